//! Front-end layer
//!
//! Hosts the console view: an observer that renders the display string plus
//! a line-oriented loop that turns typed characters into controller calls.

pub mod console;

pub use console::{run_console, ConsoleError, DisplayPrinter};
