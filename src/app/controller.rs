//! Calculator controller: the command router of the MVC split
//!
//! The controller receives semantic gestures from a front end and forwards
//! each one verbatim to the corresponding model operation. It never calls a
//! view — display updates reach views exclusively through the model's
//! observer notifications, which keeps every front end (GUI, console, test
//! probe) on the same code path.

use crate::domain::model::{CalculatorModel, Operator};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the model, as held by the controller and the wiring code
pub type SharedModel = Rc<RefCell<CalculatorModel>>;

/// Stateless router from user gestures to model operations
pub struct CalculatorController {
    model: SharedModel,
}

impl CalculatorController {
    /// Creates a controller for the given model
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    /// Handles a digit or decimal-point press
    pub fn handle_digit_input(&self, digit: char) {
        self.model.borrow_mut().input_digit(digit);
    }

    /// Handles an operator press
    pub fn handle_operator_input(&self, op: Operator) {
        self.model.borrow_mut().set_operator(op);
    }

    /// Handles the equals press
    pub fn handle_equals(&self) {
        self.model.borrow_mut().calculate_result();
    }

    /// Handles the clear press
    pub fn handle_clear(&self) {
        self.model.borrow_mut().clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{Observer, ObserverError};
    use pretty_assertions::assert_eq;

    struct DisplayProbe {
        seen: Vec<String>,
    }

    impl DisplayProbe {
        fn new() -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self { seen: Vec::new() }))
        }
    }

    impl Observer for DisplayProbe {
        fn update(&mut self, display_value: &str) -> Result<(), ObserverError> {
            self.seen.push(display_value.to_string());
            Ok(())
        }
    }

    fn wired_controller() -> (CalculatorController, SharedModel, Rc<RefCell<DisplayProbe>>) {
        let model: SharedModel = Rc::new(RefCell::new(CalculatorModel::new()));
        let probe = DisplayProbe::new();
        model.borrow_mut().attach_observer(probe.clone());
        let controller = CalculatorController::new(model.clone());
        (controller, model, probe)
    }

    #[test]
    fn gestures_forward_to_the_model() {
        let (controller, model, _probe) = wired_controller();

        controller.handle_digit_input('1');
        controller.handle_digit_input('2');
        controller.handle_operator_input(Operator::Add);
        controller.handle_digit_input('3');
        controller.handle_equals();

        assert_eq!(model.borrow().get_display_value(), "15");
    }

    #[test]
    fn clear_resets_through_the_controller() {
        let (controller, model, _probe) = wired_controller();

        controller.handle_digit_input('9');
        controller.handle_clear();

        assert_eq!(model.borrow().get_display_value(), "0");
    }

    #[test]
    fn display_updates_arrive_only_via_the_observer_path() {
        // The controller exposes no display accessors at all; everything an
        // attached observer sees comes from the model's notifications
        let (controller, _model, probe) = wired_controller();

        controller.handle_digit_input('7');
        controller.handle_operator_input(Operator::Mul);
        controller.handle_digit_input('6');
        controller.handle_equals();

        assert_eq!(
            probe.borrow().seen,
            vec![
                "7".to_string(),
                "7".to_string(),
                "6".to_string(),
                "42".to_string(),
            ]
        );
    }

    #[test]
    fn controller_gestures_match_direct_model_calls() {
        let (controller, model, _probe) = wired_controller();
        let mut direct = CalculatorModel::new();

        controller.handle_digit_input('8');
        controller.handle_operator_input(Operator::Div);
        controller.handle_digit_input('0');
        controller.handle_equals();

        direct.input_digit('8');
        direct.set_operator(Operator::Div);
        direct.input_digit('0');
        direct.calculate_result();

        assert_eq!(model.borrow().get_display_value(), direct.get_display_value());
        assert_eq!(model.borrow().get_display_value(), "Error");
    }
}
