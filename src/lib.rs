//! deskcalc — a four-function calculator core.
//!
//! The crate is organized as a classic Model-View-Controller split wired
//! through an observer registration at startup:
//!
//! - [`domain`] holds the calculator model: the arithmetic state machine and
//!   the display formatting rules. It is the only layer that mutates state.
//! - [`app`] holds the controller, a stateless router from semantic input
//!   events to model operations.
//! - [`observer`] provides the Subject/Observer primitive the model uses to
//!   publish display updates to any number of listeners.
//! - [`ui`] hosts a minimal console front end that renders the display
//!   string and turns typed characters into controller calls.
//!
//! Control flow for every gesture: front end → controller → model mutation →
//! `Subject::notify` → every attached observer, synchronously, on the same
//! thread. The controller never talks to a view; display updates travel
//! exclusively over the observer path.

pub mod app;
pub mod domain;
pub mod observer;
pub mod ui;
