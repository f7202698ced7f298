//! Calculator model: the arithmetic state machine
//!
//! The model owns all calculator state and is the only component that
//! mutates it. Every mutating operation ends with exactly one notification
//! to the attached observers carrying the current display string, except the
//! operations that are defined as silent no-ops in the error state.
//!
//! The display moves between three phases: `Fresh` (the next digit starts a
//! new number), `Entering` (digits append to the current number), and
//! `Error` (the `"Error"` sentinel is shown and only a clear or a fresh
//! digit press leaves it).

use crate::domain::format::format_result;
use crate::observer::{SharedObserver, Subject, SubjectError};

/// Display string shown while the model is in the error phase
pub const ERROR_SENTINEL: &str = "Error";

/// Initial display string
pub const INITIAL_DISPLAY: &str = "0";

/// A pending binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Maps a keyboard symbol to an operator
    ///
    /// # Returns
    /// The operator for `+ - * /`, or None for any other character
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Returns the keyboard symbol for this operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Applies the operator to two operands
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

/// Where the state machine currently is with respect to digit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    /// The next digit starts a new number
    Fresh,
    /// Digits append to the number being entered
    Entering,
    /// The error sentinel is displayed; only clear or a digit press exits
    Error,
}

/// The Model in the MVC split: calculator state plus arithmetic
///
/// Also the Subject of the observer relationship — every state change is
/// published to the attached observers as a display string. The model
/// performs no locking; callers on multiple threads must serialize access
/// externally.
pub struct CalculatorModel {
    /// Text currently shown or edited; `"Error"` is the failure sentinel
    current_input: String,
    /// First operand of a pending binary operation
    stored_value: f64,
    /// Pending operator, if any
    operator: Option<Operator>,
    /// True when the next digit starts a fresh number instead of appending
    awaiting_new_input: bool,
    /// Most recent computed result, informational only
    last_result: Option<f64>,
    /// Observer registrations and notification fan-out
    subject: Subject,
}

impl Default for CalculatorModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorModel {
    /// Creates a model in its initial state: display `"0"`, nothing pending
    pub fn new() -> Self {
        Self {
            current_input: INITIAL_DISPLAY.to_string(),
            stored_value: 0.0,
            operator: None,
            awaiting_new_input: true,
            last_result: None,
            subject: Subject::new(),
        }
    }

    /// Attaches an observer that will receive every display update
    pub fn attach_observer(&mut self, observer: SharedObserver) {
        self.subject.attach(observer);
    }

    /// Detaches a previously attached observer
    pub fn detach_observer(&mut self, observer: &SharedObserver) -> Result<(), SubjectError> {
        self.subject.detach(observer)
    }

    /// Returns the string to show on the display
    ///
    /// Pure read: no side effects, no notification.
    pub fn get_display_value(&self) -> &str {
        &self.current_input
    }

    /// Returns the current input phase
    pub fn phase(&self) -> InputPhase {
        if self.is_error() {
            InputPhase::Error
        } else if self.awaiting_new_input {
            InputPhase::Fresh
        } else {
            InputPhase::Entering
        }
    }

    /// Returns the most recent computed result, if any
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Returns the operator waiting for its second operand, if any
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Enters a digit or the decimal point
    ///
    /// Builds up the display buffer character by character: a digit press in
    /// the error phase first resets to a fresh `"0"` display, a press in the
    /// fresh phase starts a new buffer (`"0."` for the decimal point), and a
    /// press while entering appends — with a second decimal point and
    /// redundant leading zeros suppressed. Characters outside `0-9` and `.`
    /// are ignored without a notification.
    pub fn input_digit(&mut self, digit: char) {
        if digit != '.' && !digit.is_ascii_digit() {
            tracing::debug!(%digit, "ignoring non-digit input");
            return;
        }

        if self.is_error() {
            // A digit press is the one gesture besides clear that exits the
            // error phase; it starts a brand-new entry
            self.current_input = INITIAL_DISPLAY.to_string();
            self.awaiting_new_input = true;
        }

        if self.awaiting_new_input {
            self.current_input = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.awaiting_new_input = false;
        } else if digit == '.' {
            if !self.current_input.contains('.') {
                self.current_input.push(digit);
            }
        } else if self.current_input == "0" && digit == '0' {
            // Suppress "00"
        } else if self.current_input == "0" {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }

        tracing::debug!(display = %self.current_input, "digit entered");
        self.notify();
    }

    /// Records a pending binary operator
    ///
    /// A no-op in the error phase. If an operator is already pending and a
    /// second operand has been entered since, the pending calculation runs
    /// first (chained entry like `10 + 5 -` shows `15` before `-` takes
    /// effect); if that calculation fails the model stays in the error phase
    /// with the single notification the calculation already emitted.
    pub fn set_operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }

        if self.operator.is_some() && !self.awaiting_new_input {
            self.calculate_result();
            if self.is_error() {
                return;
            }
        }

        match self.current_input.parse::<f64>() {
            Ok(value) => {
                self.stored_value = value;
                self.operator = Some(op);
                self.awaiting_new_input = true;
                tracing::debug!(operator = %op.symbol(), stored = value, "operator pending");
            }
            Err(_) => self.enter_error("unparseable operand"),
        }

        self.notify();
    }

    /// Applies the pending operator to the stored value and current input
    ///
    /// A no-op in the error phase. With no operator pending this is the
    /// identity operation: the current input becomes the stored value and
    /// result unchanged. Division by zero, an unparseable operand, and a
    /// non-finite result all land in the error phase instead of producing a
    /// value. Exactly one notification is emitted on every non-no-op path.
    pub fn calculate_result(&mut self) {
        if self.is_error() {
            return;
        }

        let Some(op) = self.operator else {
            match self.current_input.parse::<f64>() {
                Ok(value) => {
                    self.stored_value = value;
                    self.last_result = Some(value);
                    self.awaiting_new_input = true;
                }
                Err(_) => self.enter_error("unparseable operand"),
            }
            self.notify();
            return;
        };

        match self.current_input.parse::<f64>() {
            Err(_) => self.enter_error("unparseable operand"),
            Ok(rhs) => {
                if op == Operator::Div && rhs == 0.0 {
                    self.enter_error("division by zero");
                } else {
                    let result = op.apply(self.stored_value, rhs);
                    if result.is_finite() {
                        self.current_input = format_result(result);
                        self.stored_value = result;
                        self.last_result = Some(result);
                        self.operator = None;
                        self.awaiting_new_input = true;
                        tracing::debug!(display = %self.current_input, "result computed");
                    } else {
                        self.enter_error("non-finite result");
                    }
                }
            }
        }

        self.notify();
    }

    /// Resets every field to its initial value and notifies with `"0"`
    pub fn clear_all(&mut self) {
        self.current_input = INITIAL_DISPLAY.to_string();
        self.stored_value = 0.0;
        self.operator = None;
        self.awaiting_new_input = true;
        self.last_result = None;
        tracing::debug!("cleared");
        self.notify();
    }

    fn is_error(&self) -> bool {
        self.current_input == ERROR_SENTINEL
    }

    fn enter_error(&mut self, reason: &str) {
        tracing::debug!(reason, "entering error phase");
        self.current_input = ERROR_SENTINEL.to_string();
        self.stored_value = 0.0;
        self.operator = None;
        self.awaiting_new_input = true;
    }

    fn notify(&self) {
        self.subject.notify(&self.current_input);
    }
}
