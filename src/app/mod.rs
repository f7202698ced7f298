//! Application orchestration layer
//!
//! This module routes semantic input events from a front end to the model.
//! It holds no calculator state of its own.

pub mod controller;

pub use controller::CalculatorController;
