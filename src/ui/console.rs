//! Console front end
//!
//! A minimal terminal view for the calculator core. [`DisplayPrinter`] is an
//! observer that writes every published display string to a sink, and
//! [`run_console`] maps typed characters to controller gestures. All display
//! output flows through the observer path; the loop itself never prints a
//! result.
//!
//! Key map: `0-9` and `.` enter digits, `+ - * /` record an operator, `=`
//! computes, `c` clears, `q` quits.

use crate::app::controller::CalculatorController;
use crate::domain::model::Operator;
use crate::observer::{Observer, ObserverError};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors that can occur while running the console loop
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading a line of input failed
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Observer that renders each display update to a writer
///
/// Write failures are reported as [`ObserverError`] so the subject's
/// isolation policy applies instead of the view tearing down the whole
/// notification pass.
pub struct DisplayPrinter<W: Write> {
    sink: W,
}

impl<W: Write> DisplayPrinter<W> {
    /// Creates a printer writing to the given sink
    pub fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: Write> Observer for DisplayPrinter<W> {
    fn update(&mut self, display_value: &str) -> Result<(), ObserverError> {
        writeln!(self.sink, "= {display_value}")
            .and_then(|_| self.sink.flush())
            .map_err(|err| ObserverError::new(format!("display write failed: {err}")))
    }
}

/// Runs the gesture loop until end of input or a quit key
///
/// Reads lines from `input` and dispatches each character to the controller.
/// Characters without a mapping are skipped. Display updates reach the user
/// through whatever observers were attached to the model during wiring, not
/// through this loop.
pub fn run_console<R: BufRead>(
    controller: &CalculatorController,
    input: R,
) -> Result<(), ConsoleError> {
    for line in input.lines() {
        let line = line?;
        for key in line.chars() {
            if !dispatch_key(controller, key) {
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Dispatches one key to the controller
///
/// # Returns
/// false when the key requests quitting the loop, true otherwise
fn dispatch_key(controller: &CalculatorController, key: char) -> bool {
    match key {
        '0'..='9' | '.' => controller.handle_digit_input(key),
        '+' | '-' | '*' | '/' => {
            if let Some(op) = Operator::from_symbol(key) {
                controller.handle_operator_input(op);
            }
        }
        '=' => controller.handle_equals(),
        'c' | 'C' => controller.handle_clear(),
        'q' | 'Q' => return false,
        key if key.is_whitespace() => {}
        other => {
            tracing::debug!(%other, "ignoring unmapped key");
        }
    }
    true
}
