//! Input state machine
//!
//! `Calculator` turns keypad events into engine calls and display updates.
//! There are no named states; behaviour depends on the pending operator,
//! the new-entry flag and the equals-feedback flag.
//!
//! The UI owns one `Calculator`, feeds it [`Command`]s and redraws from the
//! returned [`DisplayState`].

use tracing::trace;

use crate::engine::{CalculatorEngine, GENERIC_ERROR_TEXT};
use crate::format::{digit_count, parse_display, MAX_DISPLAY_DIGITS};
use crate::operator::{BinaryOp, UnaryOp};

/// One discrete UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(char),
    Decimal,
    Operator(BinaryOp),
    Equals,
    Clear,
    ClearEntry,
    Backspace,
    Negate,
    Percent,
    Advanced(UnaryOp),
}

/// What the display shows after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub display: String,
    pub history: String,
    pub equals_pressed: bool,
}

#[derive(Debug, Clone)]
pub struct Calculator {
    engine: CalculatorEngine,
    display: String,
    history: String,
    accumulator: f64,
    pending: Option<BinaryOp>,
    new_entry: bool,
    last_operand: f64,
    last_operator: Option<BinaryOp>,
    equals_pressed: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorEngine::new())
    }
}

impl Calculator {
    pub fn new(engine: CalculatorEngine) -> Self {
        Self {
            engine,
            display: "0".to_string(),
            history: String::new(),
            accumulator: 0.0,
            pending: None,
            new_entry: true,
            last_operand: 0.0,
            last_operator: None,
            equals_pressed: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn is_equals_pressed(&self) -> bool {
        self.equals_pressed
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending
    }

    pub fn is_new_entry(&self) -> bool {
        self.new_entry
    }

    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            display: self.display.clone(),
            history: self.history.clone(),
            equals_pressed: self.equals_pressed,
        }
    }

    /// Dispatch a command and return the resulting display.
    pub fn apply(&mut self, command: Command) -> DisplayState {
        trace!(?command, "apply");
        match command {
            Command::Digit(d) => self.input_digit(d),
            Command::Decimal => self.input_digit('.'),
            Command::Operator(op) => self.press_operator(op),
            Command::Equals => self.equals(),
            Command::Clear => self.clear(),
            Command::ClearEntry => self.clear_entry(),
            Command::Backspace => self.backspace(),
            Command::Negate => self.negate(),
            Command::Percent => self.percent(),
            Command::Advanced(op) => self.advanced(op),
        }
        self.snapshot()
    }

    /// Type a digit or the decimal point. Other characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            return;
        }

        self.engine.clear_error();
        self.equals_pressed = false;

        if self.new_entry {
            self.display = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.new_entry = false;
            return;
        }

        if digit == '.' && self.display.contains('.') {
            return;
        }
        if digit_count(&self.display) >= MAX_DISPLAY_DIGITS {
            return;
        }

        if self.display == "0" && digit != '.' {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Press a binary operator, resolving any pending one first when a new
    /// operand has been typed.
    pub fn press_operator(&mut self, op: BinaryOp) {
        self.engine.clear_error();
        self.equals_pressed = false;

        let current = parse_display(&self.display);

        match self.pending {
            Some(pending) if !self.new_entry => {
                let result = self.engine.calculate(self.accumulator, pending, current);
                if self.engine.has_error() {
                    self.fail(true);
                    return;
                }
                self.accumulator = result;
                self.display = self.engine.format_number(result);
            }
            _ => self.accumulator = current,
        }

        self.pending = Some(op);
        self.new_entry = true;
        self.history = format!("{} {}", self.engine.format_number(self.accumulator), op);
    }

    /// Resolve the pending operation, or repeat the last one when equals is
    /// pressed again straight away.
    pub fn equals(&mut self) {
        self.engine.clear_error();

        let (operand, op) = match (self.equals_pressed, self.last_operator, self.pending) {
            (true, Some(last), _) => {
                self.accumulator = parse_display(&self.display);
                (self.last_operand, last)
            }
            (_, _, Some(pending)) => {
                let operand = parse_display(&self.display);
                self.last_operand = operand;
                self.last_operator = Some(pending);
                (operand, pending)
            }
            _ => {
                self.equals_pressed = true;
                return;
            }
        };

        let result = self.engine.calculate(self.accumulator, op, operand);
        if self.engine.has_error() {
            self.fail(true);
            return;
        }

        self.history = format!(
            "{} {} {} =",
            self.engine.format_number(self.accumulator),
            op,
            self.engine.format_number(operand)
        );
        self.display = self.engine.format_number(result);
        self.accumulator = result;
        self.pending = None;
        self.new_entry = true;
        self.equals_pressed = true;
    }

    /// Back to the power-on state.
    pub fn clear(&mut self) {
        self.reset();
        self.display = "0".to_string();
        self.history.clear();
        self.engine.clear_error();
    }

    /// Discard the value being typed; the pending operation survives.
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.new_entry = true;
        self.engine.clear_error();
    }

    pub fn backspace(&mut self) {
        if self.new_entry || self.engine.has_error() {
            self.display = "0".to_string();
            self.new_entry = true;
            return;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.new_entry = true;
        }
    }

    /// Flip the sign of the displayed value; typing continues to append.
    pub fn negate(&mut self) {
        let current = parse_display(&self.display);
        let result = self.engine.calculate_unary(UnaryOp::Negate, current);
        self.display = self.engine.format_number(result);
        self.new_entry = false;
    }

    /// Percentage of the accumulator while an operator is pending, plain
    /// divide-by-100 otherwise.
    pub fn percent(&mut self) {
        let current = parse_display(&self.display);
        let result = match self.pending {
            Some(_) => self.engine.calculate(self.accumulator, BinaryOp::Percent, current),
            None => self.engine.calculate_unary(UnaryOp::Percent, current),
        };
        self.display = self.engine.format_number(result);
        self.new_entry = false;
    }

    /// Apply a function key (√, x², 1/x) to the displayed value.
    pub fn advanced(&mut self, op: UnaryOp) {
        let current = parse_display(&self.display);
        let result = self.engine.calculate_unary(op, current);
        if self.engine.has_error() {
            self.fail(false);
            return;
        }

        self.history = op.history_label(&self.engine.format_number(current));
        self.display = self.engine.format_number(result);
        self.new_entry = true;
    }

    /// Show the engine's error and drop the expression.
    fn fail(&mut self, clear_history: bool) {
        self.display = self
            .engine
            .error_message()
            .unwrap_or_else(|| GENERIC_ERROR_TEXT.to_string());
        if clear_history {
            self.history.clear();
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.new_entry = true;
        self.last_operand = 0.0;
        self.last_operator = None;
        self.equals_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for d in digits.chars() {
            calc.input_digit(d);
        }
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::default();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history(), "");
        assert!(calc.is_new_entry());
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_digit_entry() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "123");
        assert_eq!(calc.display(), "123");
        calc.input_digit('.');
        assert_eq!(calc.display(), "123.");
        calc.input_digit('.');
        assert_eq!(calc.display(), "123.");
    }

    #[test]
    fn test_leading_decimal() {
        let mut calc = Calculator::default();
        calc.input_digit('.');
        assert_eq!(calc.display(), "0.");
        calc.input_digit('5');
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "007");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_ignores_non_digits() {
        let mut calc = Calculator::default();
        calc.input_digit('x');
        assert_eq!(calc.display(), "0");
        assert!(calc.is_new_entry());
    }

    #[test]
    fn test_sixteen_digit_limit() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "1234567890123456");
        type_digits(&mut calc, "78");
        assert_eq!(calc.display(), "1234567890123456");

        let mut calc = Calculator::default();
        type_digits(&mut calc, "1.234567890123456");
        calc.input_digit('7');
        assert_eq!(calc.display(), "1.234567890123456");
    }

    #[test]
    fn test_accumulator_untouched_by_digits() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "5");
        calc.press_operator(BinaryOp::Add);
        type_digits(&mut calc, "987");
        assert_eq!(calc.accumulator(), 5.0);
    }

    #[test]
    fn test_operator_sets_history() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "12");
        calc.press_operator(BinaryOp::Multiply);
        assert_eq!(calc.history(), "12 ×");
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Multiply));
        assert!(calc.is_new_entry());
    }

    #[test]
    fn test_chained_operators() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "2");
        calc.press_operator(BinaryOp::Add);
        type_digits(&mut calc, "3");
        calc.press_operator(BinaryOp::Multiply);
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.history(), "5 ×");
        type_digits(&mut calc, "4");
        calc.equals();
        assert_eq!(calc.display(), "20");
        assert_eq!(calc.history(), "5 × 4 =");
    }

    #[test]
    fn test_operator_replaced_without_new_operand() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "9");
        calc.press_operator(BinaryOp::Add);
        calc.press_operator(BinaryOp::Subtract);
        assert_eq!(calc.accumulator(), 9.0);
        assert_eq!(calc.history(), "9 −");
        type_digits(&mut calc, "4");
        calc.equals();
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_equals_without_pending() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "42");
        calc.equals();
        assert_eq!(calc.display(), "42");
        assert_eq!(calc.history(), "");
        assert!(calc.is_equals_pressed());
    }

    #[test]
    fn test_digit_clears_equals_feedback() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "5");
        calc.press_operator(BinaryOp::Add);
        type_digits(&mut calc, "3");
        calc.equals();
        assert!(calc.is_equals_pressed());
        calc.input_digit('7');
        assert!(!calc.is_equals_pressed());
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_clear_entry_keeps_pending() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "8");
        calc.press_operator(BinaryOp::Subtract);
        type_digits(&mut calc, "99");
        calc.clear_entry();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Subtract));
        type_digits(&mut calc, "3");
        calc.equals();
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "8");
        calc.press_operator(BinaryOp::Subtract);
        type_digits(&mut calc, "3");
        calc.equals();
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history(), "");
        assert_eq!(calc.accumulator(), 0.0);
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.is_equals_pressed());
        calc.equals();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.display(), "12");
        calc.backspace();
        calc.backspace();
        assert_eq!(calc.display(), "0");
        assert!(calc.is_new_entry());
    }

    #[test]
    fn test_backspace_bare_minus_collapses() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "7");
        calc.negate();
        assert_eq!(calc.display(), "-7");
        calc.backspace();
        assert_eq!(calc.display(), "0");
        assert!(calc.is_new_entry());
    }

    #[test]
    fn test_backspace_after_result() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "5");
        calc.press_operator(BinaryOp::Add);
        type_digits(&mut calc, "5");
        calc.equals();
        calc.backspace();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_negate_keeps_typing() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "12");
        calc.negate();
        assert_eq!(calc.display(), "-12");
        calc.input_digit('3');
        assert_eq!(calc.display(), "-123");
    }

    #[test]
    fn test_percent_without_pending() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "50");
        calc.percent();
        assert_eq!(calc.display(), "0.5");
        assert!(!calc.is_new_entry());
    }

    #[test]
    fn test_percent_of_accumulator() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "200");
        calc.press_operator(BinaryOp::Add);
        type_digits(&mut calc, "10");
        calc.percent();
        assert_eq!(calc.display(), "20");
        calc.equals();
        assert_eq!(calc.display(), "220");
    }

    #[test]
    fn test_advanced_functions() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "9");
        calc.advanced(UnaryOp::SquareRoot);
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.history(), "√(9)");
        assert!(calc.is_new_entry());

        calc.advanced(UnaryOp::Square);
        assert_eq!(calc.display(), "9");
        assert_eq!(calc.history(), "sqr(3)");

        calc.advanced(UnaryOp::Reciprocal);
        assert_eq!(calc.display(), "0.11111111111111");
        assert_eq!(calc.history(), "1/(9)");
    }

    #[test]
    fn test_advanced_error_resets() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "4");
        calc.press_operator(BinaryOp::Add);
        type_digits(&mut calc, "0");
        calc.advanced(UnaryOp::Reciprocal);
        assert_eq!(calc.display(), "Cannot divide by zero");
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.accumulator(), 0.0);
        assert!(calc.is_new_entry());
    }

    #[test]
    fn test_negative_square_root() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "4");
        calc.negate();
        calc.advanced(UnaryOp::SquareRoot);
        assert_eq!(calc.display(), "Invalid input");
        calc.backspace();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_error_then_digit_starts_fresh() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "1");
        calc.press_operator(BinaryOp::Divide);
        type_digits(&mut calc, "0");
        calc.press_operator(BinaryOp::Add);
        assert_eq!(calc.display(), "Cannot divide by zero");
        assert_eq!(calc.history(), "");
        calc.input_digit('6');
        assert_eq!(calc.display(), "6");
        assert!(!calc.engine.has_error());
    }

    #[test]
    fn test_apply_returns_snapshot() {
        let mut calc = Calculator::default();
        calc.apply(Command::Digit('5'));
        calc.apply(Command::Operator(BinaryOp::Add));
        calc.apply(Command::Digit('3'));
        let state = calc.apply(Command::Equals);
        assert_eq!(
            state,
            DisplayState {
                display: "8".to_string(),
                history: "5 + 3 =".to_string(),
                equals_pressed: true,
            }
        );
        let state = calc.apply(Command::Decimal);
        assert_eq!(state.display, "0.");
    }
}
