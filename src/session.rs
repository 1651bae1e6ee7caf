// src/session.rs

use std::error::Error;
use std::io::Write;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app_config::AppConfig;
use crate::commands::common::{Command, ParkingOperations};
use crate::commands::dispatcher::{DispatchError, Dispatcher};

/// One parking service driven by a stream of commands. Every command's
/// result or error is written to the output; a failing command never ends
/// the session.
pub struct Session<P: ParkingOperations> {
    app: P,
    dispatcher: Dispatcher,
    config: AppConfig,
}

impl<P: ParkingOperations> Session<P> {
    pub fn new(app: P, config: AppConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            app,
            dispatcher: Dispatcher::new()?,
            config,
        })
    }

    pub fn app(&self) -> &P {
        &self.app
    }

    /// Runs one line and renders its outcome. `None` means the line was skipped.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        if self.config.skip_blank_lines && line.trim().is_empty() {
            debug!("Skipping blank line");
            return None;
        }

        debug!("Dispatching: {}", line);
        Some(render(self.dispatcher.dispatch(line, &mut self.app)))
    }

    /// File mode: one rendered result per input line.
    pub async fn run_lines<R, W>(&mut self, reader: R, output: &mut W) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = reader.split(b'\n');
        while let Some(raw) = lines.next_segment().await? {
            let line = decode_line(&raw);
            if let Some(rendered) = self.handle_line(&line) {
                writeln!(output, "{}", rendered)?;
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Runs pre-parsed commands, rendering each the same way as file mode.
    pub fn run_commands<W: Write>(&mut self, commands: &[Command], output: &mut W) -> Result<(), Box<dyn Error>> {
        for command in commands {
            debug!("Executing: {}", command.name());
            let result = command.execute(&mut self.app).map_err(DispatchError::from);
            writeln!(output, "{}", render(result))?;
        }
        output.flush()?;
        Ok(())
    }

    /// Interactive mode: prompts after every result and stops at the exit command.
    pub async fn run_interactive<R, W>(&mut self, reader: R, output: &mut W) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(output, "\n{}", self.config.prompt)?;
        output.flush()?;

        let mut lines = reader.split(b'\n');
        while let Some(raw) = lines.next_segment().await? {
            let line = decode_line(&raw);
            if line == self.config.exit_command {
                debug!("Exit requested");
                break;
            }
            // A skipped line still ends its (empty) output line before the next prompt.
            let rendered = self.handle_line(&line).unwrap_or_default();
            writeln!(output, "{}", rendered)?;
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;
        }
        Ok(())
    }
}

/// Undecodable bytes become U+FFFD instead of ending the session.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

fn render(result: Result<String, DispatchError>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            warn!("Command failed: {}", e);
            e.to_string()
        }
    }
}
