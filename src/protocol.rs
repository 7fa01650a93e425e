use crate::satellite::{Orientation, SatelliteState};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MAX_COMMAND_SIZE: usize = 128;

pub const COMMAND_PROMPT: &str =
    "Enter a command (rotate, activatePanels, deactivatePanels, collectData, status, or exit): ";
pub const DIRECTION_PROMPT: &str = "Enter a direction (North, South, East, West): ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub id: u32,
    pub command_type: CommandType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandType {
    // Raw token from the direction prompt; validated by the satellite
    Rotate { direction: String },
    ActivatePanels,
    DeactivatePanels,
    CollectData,
    Status,
    Exit,
}

/// Command keyword as typed at the prompt, before any follow-up input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandToken {
    Rotate,
    ActivatePanels,
    DeactivatePanels,
    CollectData,
    Status,
    Exit,
}

impl CommandToken {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CommandToken::Rotate => "rotate",
            CommandToken::ActivatePanels => "activatePanels",
            CommandToken::DeactivatePanels => "deactivatePanels",
            CommandToken::CollectData => "collectData",
            CommandToken::Status => "status",
            CommandToken::Exit => "exit",
        }
    }

    /// Whether the command needs a direction line before it can run.
    #[must_use]
    pub fn needs_direction(self) -> bool {
        matches!(self, CommandToken::Rotate)
    }
}

impl FromStr for CommandToken {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rotate" => Ok(CommandToken::Rotate),
            "activatePanels" => Ok(CommandToken::ActivatePanels),
            "deactivatePanels" => Ok(CommandToken::DeactivatePanels),
            "collectData" => Ok(CommandToken::CollectData),
            "status" => Ok(CommandToken::Status),
            "exit" => Ok(CommandToken::Exit),
            "" => Err(ProtocolError::EmptyCommand),
            other => Err(ProtocolError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub id: u32,
    pub status: ResponseStatus,
    pub message: Option<String>,
    pub state: Option<SatelliteState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Success,
    Transient,
    Error,
    InvalidCommand,
}

#[derive(Debug)]
pub struct ProtocolHandler {
    command_counter: u32,
}

impl ProtocolHandler {
    #[must_use]
    pub fn new() -> Self {
        Self { command_counter: 0 }
    }

    /// Parses a command keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyCommand`], [`ProtocolError::UnknownCommand`]
    /// or [`ProtocolError::MessageTooLarge`] for input that is not a command.
    pub fn parse_token(line: &str) -> Result<CommandToken, ProtocolError> {
        if line.len() > MAX_COMMAND_SIZE {
            return Err(ProtocolError::MessageTooLarge);
        }
        line.trim().parse()
    }

    /// Builds a command from its keyword plus the direction line, if one was read.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingDirection`] for `rotate` without a direction.
    pub fn build_command(
        &mut self,
        token: CommandToken,
        direction: Option<&str>,
    ) -> Result<Command, ProtocolError> {
        let command_type = match token {
            CommandToken::Rotate => {
                let direction = direction.ok_or(ProtocolError::MissingDirection)?;
                CommandType::Rotate { direction: direction.trim().to_string() }
            }
            CommandToken::ActivatePanels => CommandType::ActivatePanels,
            CommandToken::DeactivatePanels => CommandType::DeactivatePanels,
            CommandToken::CollectData => CommandType::CollectData,
            CommandToken::Status => CommandType::Status,
            CommandToken::Exit => CommandType::Exit,
        };

        Ok(Command {
            id: self.next_command_id(),
            command_type,
        })
    }

    #[must_use]
    pub fn create_response(
        command_id: u32,
        status: ResponseStatus,
        message: Option<&str>,
    ) -> CommandResponse {
        CommandResponse {
            id: command_id,
            status,
            message: message.map(ToString::to_string),
            state: None,
        }
    }

    #[must_use]
    pub fn create_status_response(command_id: u32, state: SatelliteState) -> CommandResponse {
        CommandResponse {
            id: command_id,
            status: ResponseStatus::Success,
            message: None,
            state: Some(state),
        }
    }

    pub fn next_command_id(&mut self) -> u32 {
        self.command_counter = self.command_counter.wrapping_add(1);
        self.command_counter
    }

    #[must_use]
    pub fn commands_issued(&self) -> u32 {
        self.command_counter
    }
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Success message for a rotation, matching the log line.
#[must_use]
pub fn rotated_message(orientation: Orientation) -> String {
    format!("Rotated to {orientation}.")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    EmptyCommand,
    UnknownCommand(String),
    MissingDirection,
    MessageTooLarge,
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProtocolError::EmptyCommand => write!(f, "Empty command"),
            ProtocolError::UnknownCommand(token) => write!(f, "Unknown command '{token}'"),
            ProtocolError::MissingDirection => write!(f, "Rotate requires a direction"),
            ProtocolError::MessageTooLarge => write!(f, "Command exceeds {MAX_COMMAND_SIZE} bytes"),
        }
    }
}

impl std::error::Error for ProtocolError {}
