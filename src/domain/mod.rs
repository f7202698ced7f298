//! Domain logic and core data structures
//!
//! This module contains the pure calculator logic: the arithmetic state
//! machine and the display formatting rules. It knows nothing about front
//! ends or event loops.

pub mod format;
pub mod model;

pub use format::format_result;
pub use model::{CalculatorModel, InputPhase, Operator, ERROR_SENTINEL, INITIAL_DISPLAY};
