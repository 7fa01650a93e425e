use crate::config::OutputFormat;
use crate::protocol::{CommandResponse, ResponseStatus};
use crate::satellite::{PanelState, SatelliteState};
use colored::Colorize;
use std::io::{self, Write};

pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command. Please try again.";

/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_state<W: Write>(
    out: &mut W,
    title: &str,
    state: &SatelliteState,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "title": title, "state": state });
            writeln!(out, "{json}")
        }
        OutputFormat::Compact => writeln!(out, "{}", compact_state(state)),
        OutputFormat::Table => {
            writeln!(out, "{}", title.bright_blue().bold())?;
            writeln!(out, "{} {}", "Orientation:".bright_white(), state.orientation.to_string().bright_cyan())?;
            let panels = state.solar_panels.to_string();
            let panels = if state.solar_panels == PanelState::Active {
                panels.bright_green()
            } else {
                panels.yellow()
            };
            writeln!(out, "{} {}", "Solar Panels:".bright_white(), panels)?;
            writeln!(out, "{} {}", "Data Collected:".bright_white(), state.data_collected.to_string().bright_cyan())
        }
    }
}

/// # Errors
///
/// Propagates write failures from `out`, or serialization failures in the
/// json format.
pub fn write_response<W: Write>(
    out: &mut W,
    response: &CommandResponse,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        let json = serde_json::to_string(response)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        return writeln!(out, "{json}");
    }

    if let Some(state) = &response.state {
        return write_state(out, "Current State:", state, format);
    }

    let message = response.message.as_deref().unwrap_or("");

    if format == OutputFormat::Compact {
        let tag = match response.status {
            ResponseStatus::Success => "OK",
            ResponseStatus::Transient => "WARN",
            ResponseStatus::Error => "ERR",
            ResponseStatus::InvalidCommand => "INVALID",
        };
        return writeln!(out, "{tag} {message}");
    }

    match response.status {
        ResponseStatus::Success => writeln!(out, "{} {}", "✅".green(), message.bright_green()),
        ResponseStatus::Transient => writeln!(out, "{} {}", "⚠️".yellow(), message.yellow()),
        ResponseStatus::Error => writeln!(out, "{} {}", "❌".red(), message.bright_red()),
        ResponseStatus::InvalidCommand => writeln!(out, "{}", INVALID_COMMAND_MESSAGE.yellow()),
    }
}

fn compact_state(state: &SatelliteState) -> String {
    format!("{}|{}|{}", state.orientation, state.solar_panels, state.data_collected)
}
