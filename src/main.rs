//! deskcalc binary: wires Model, View, and Controller together
//!
//! The entry point builds the model, attaches the console view as an
//! observer, hands the model to the controller, renders the initial display,
//! and runs the console gesture loop. All subsequent display updates travel
//! over the observer path.

use anyhow::Result;
use deskcalc::app::controller::{CalculatorController, SharedModel};
use deskcalc::domain::model::CalculatorModel;
use deskcalc::observer::Observer;
use deskcalc::ui::console::{run_console, DisplayPrinter};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model: SharedModel = Rc::new(RefCell::new(CalculatorModel::new()));
    let view = Rc::new(RefCell::new(DisplayPrinter::new(io::stdout())));

    model.borrow_mut().attach_observer(view.clone());
    let controller = CalculatorController::new(model.clone());

    println!("deskcalc — keys: 0-9 . + - * / = c(lear) q(uit)");

    // Initial render, before any gesture has produced a notification
    if let Err(err) = view.borrow_mut().update(model.borrow().get_display_value()) {
        tracing::warn!(%err, "initial render failed");
    }

    run_console(&controller, io::stdin().lock())?;
    Ok(())
}
