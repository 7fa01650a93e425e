use crate::error::SatelliteError;
use crate::protocol::{rotated_message, Command, CommandResponse, CommandType, ProtocolHandler, ResponseStatus};
use crate::satellite::{PanelToggle, Satellite, SatelliteState};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatcherState {
    pub running: bool,
    pub command_count: u32,
    pub error_count: u32,
    pub transient_count: u32,
    pub invalid_command_count: u32,
    pub last_error: Option<String>,
}

/// Routes commands to the satellite and turns every outcome into a response.
///
/// Domain errors never escape: they are logged, counted and reported back in
/// the response so the command loop can keep going.
#[derive(Debug)]
pub struct CommandDispatcher {
    satellite: Satellite,
    protocol_handler: ProtocolHandler,
    state: DispatcherState,
}

impl CommandDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_satellite(Satellite::new())
    }

    #[must_use]
    pub fn with_satellite(satellite: Satellite) -> Self {
        info!("Satellite initialized.");
        Self {
            satellite,
            protocol_handler: ProtocolHandler::new(),
            state: DispatcherState {
                running: true,
                ..DispatcherState::default()
            },
        }
    }

    pub fn execute(&mut self, command: Command) -> CommandResponse {
        debug!("Executing command {}: {:?}", command.id, command.command_type);
        self.state.command_count = self.state.command_count.saturating_add(1);

        let outcome = match command.command_type {
            CommandType::Rotate { direction } => self
                .satellite
                .rotate(&direction)
                .map(|orientation| (ResponseStatus::Success, rotated_message(orientation))),
            CommandType::ActivatePanels => self.satellite.activate_panels().map(Self::toggle_message),
            CommandType::DeactivatePanels => {
                self.satellite.deactivate_panels().map(Self::toggle_message)
            }
            CommandType::CollectData => self
                .satellite
                .collect_data()
                .map(|total| (ResponseStatus::Success, format!("Data collected. Total: {total}"))),
            CommandType::Status => {
                return ProtocolHandler::create_status_response(command.id, self.satellite.status());
            }
            CommandType::Exit => {
                self.state.running = false;
                info!("Exit requested after {} commands.", self.state.command_count);
                return ProtocolHandler::create_response(
                    command.id,
                    ResponseStatus::Success,
                    Some("Exiting."),
                );
            }
        };

        match outcome {
            Ok((status, message)) => {
                if status == ResponseStatus::Transient {
                    self.state.transient_count = self.state.transient_count.saturating_add(1);
                }
                ProtocolHandler::create_response(command.id, status, Some(&message))
            }
            Err(e) => self.record_error(command.id, &e),
        }
    }

    /// Responds to input that never became a command.
    pub fn reject(&mut self, reason: &str) -> CommandResponse {
        self.state.invalid_command_count = self.state.invalid_command_count.saturating_add(1);
        let id = self.protocol_handler.next_command_id();
        ProtocolHandler::create_response(id, ResponseStatus::InvalidCommand, Some(reason))
    }

    fn record_error(&mut self, command_id: u32, e: &SatelliteError) -> CommandResponse {
        let message = format!("Error: {e}");
        error!("{message}");
        self.state.error_count = self.state.error_count.saturating_add(1);
        self.state.last_error = Some(e.to_string());
        ProtocolHandler::create_response(command_id, ResponseStatus::Error, Some(&message))
    }

    fn toggle_message(toggle: PanelToggle) -> (ResponseStatus, String) {
        match toggle {
            PanelToggle::Switched(state) => (
                ResponseStatus::Success,
                format!("Solar panels {}.", state.transition_verb()),
            ),
            PanelToggle::Unchanged(notice) => {
                (ResponseStatus::Transient, format!("Transient Error: {notice}"))
            }
        }
    }

    pub fn protocol_handler(&mut self) -> &mut ProtocolHandler {
        &mut self.protocol_handler
    }

    #[must_use]
    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    #[must_use]
    pub fn satellite_state(&self) -> SatelliteState {
        self.satellite.status()
    }

    #[must_use]
    pub fn get_state(&self) -> &DispatcherState {
        &self.state
    }

    /// False once `exit` has been executed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
