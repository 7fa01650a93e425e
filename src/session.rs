use crate::config::OutputFormat;
use crate::console::{self, INVALID_COMMAND_MESSAGE};
use crate::dispatcher::CommandDispatcher;
use crate::protocol::{ProtocolError, ProtocolHandler, COMMAND_PROMPT, DIRECTION_PROMPT};
use crate::satellite::SatelliteState;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub commands: u32,
    pub errors: u32,
    pub transient_notices: u32,
    pub invalid_commands: u32,
    pub ended_by: SessionEnd,
    pub final_state: SatelliteState,
}

/// Read-eval loop over any line source.
pub struct Session<R, W> {
    dispatcher: CommandDispatcher,
    input: R,
    output: W,
    format: OutputFormat,
    show_prompts: bool,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(dispatcher: CommandDispatcher, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            dispatcher,
            input,
            output,
            format,
            show_prompts: true,
            line: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prompts(mut self, show_prompts: bool) -> Self {
        self.show_prompts = show_prompts;
        self
    }

    /// Runs commands until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Fails only when reading input or writing output fails. Domain errors
    /// and malformed lines are reported on the output and the loop continues.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let initial = self.dispatcher.satellite_state();
        console::write_state(&mut self.output, "Initial State:", &initial, self.format)?;
        if self.format == OutputFormat::Table {
            writeln!(self.output)?;
        }

        let mut ended_by = SessionEnd::EndOfInput;
        while self.dispatcher.is_running() {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                break;
            };

            let token = match ProtocolHandler::parse_token(&line) {
                Ok(token) => token,
                Err(e) => {
                    self.report_invalid(&e)?;
                    continue;
                }
            };

            let direction = if token.needs_direction() {
                let Some(direction) = self.prompt(DIRECTION_PROMPT)? else {
                    break;
                };
                Some(direction)
            } else {
                None
            };

            let command = match self
                .dispatcher
                .protocol_handler()
                .build_command(token, direction.as_deref())
            {
                Ok(command) => command,
                Err(e) => {
                    self.report_invalid(&e)?;
                    continue;
                }
            };

            let response = self.dispatcher.execute(command);
            if self.dispatcher.is_running() {
                console::write_response(&mut self.output, &response, self.format)?;
            } else {
                ended_by = SessionEnd::Exit;
            }
        }

        self.output.flush()?;
        let summary = self.summary(ended_by);
        debug!(
            "Session ended ({:?}): {} commands, {} errors, {} transient notices",
            summary.ended_by, summary.commands, summary.errors, summary.transient_notices
        );
        Ok(summary)
    }

    #[must_use]
    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns the next trimmed line, or `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches the parser and is reported like any other typo.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.show_prompts && self.format == OutputFormat::Table {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.line).trim().to_string()))
    }

    fn report_invalid(&mut self, e: &ProtocolError) -> io::Result<()> {
        warn!("{e}");
        let response = self.dispatcher.reject(INVALID_COMMAND_MESSAGE);
        console::write_response(&mut self.output, &response, self.format)
    }

    fn summary(&self, ended_by: SessionEnd) -> SessionSummary {
        let state = self.dispatcher.get_state();
        SessionSummary {
            commands: state.command_count,
            errors: state.error_count,
            transient_notices: state.transient_count,
            invalid_commands: state.invalid_command_count,
            ended_by,
            final_state: self.dispatcher.satellite_state(),
        }
    }
}
