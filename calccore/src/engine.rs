//! Arithmetic engine
//!
//! The pure functions return `EngineResult`. `CalculatorEngine` wraps them
//! for the state machine: it keeps the last failure in a one-shot error slot
//! and hands back NaN, so a bad keystroke never unwinds the event handler.
//! Every operation clears the slot first.

use tracing::debug;

use crate::error::CalcError;
use crate::format;
use crate::operator::{BinaryOp, UnaryOp};

/// A value, or the reason there is none.
pub type EngineResult = Result<f64, CalcError>;

/// Text shown for NaN when no error message is recorded.
pub const GENERIC_ERROR_TEXT: &str = "Error";

/// Combine two operands.
pub fn apply_binary(left: f64, op: BinaryOp, right: f64) -> EngineResult {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Subtract => Ok(left - right),
        BinaryOp::Multiply => Ok(left * right),
        BinaryOp::Divide => {
            if right == 0.0 {
                Err(CalcError::DivideByZero)
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::Percent => Ok(left * (right / 100.0)),
    }
}

/// Apply a single-operand function.
pub fn apply_unary(op: UnaryOp, value: f64) -> EngineResult {
    match op {
        UnaryOp::SquareRoot => {
            if value < 0.0 {
                Err(CalcError::InvalidInput)
            } else {
                Ok(value.sqrt())
            }
        }
        UnaryOp::Negate => Ok(-value),
        UnaryOp::Reciprocal => {
            if value == 0.0 {
                Err(CalcError::DivideByZero)
            } else {
                Ok(1.0 / value)
            }
        }
        UnaryOp::Square => Ok(value * value),
        UnaryOp::Percent => Ok(value / 100.0),
    }
}

#[derive(Debug, Default, Clone)]
pub struct CalculatorEngine {
    error: Option<CalcError>,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Message for the last failure, if the slot is set.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// `left op right`, or NaN with the error recorded.
    pub fn calculate(&mut self, left: f64, op: BinaryOp, right: f64) -> f64 {
        self.clear_error();
        let result = apply_binary(left, op, right);
        self.settle(result)
    }

    /// `op(value)`, or NaN with the error recorded.
    pub fn calculate_unary(&mut self, op: UnaryOp, value: f64) -> f64 {
        self.clear_error();
        let result = apply_unary(op, value);
        self.settle(result)
    }

    /// Like [`calculate`](Self::calculate) but takes an operator symbol
    /// (`+`, `−`/`-`, `×`/`*`, `÷`/`/`, `%`).
    pub fn calculate_symbol(&mut self, left: f64, symbol: &str, right: f64) -> f64 {
        self.clear_error();
        let result = symbol
            .parse::<BinaryOp>()
            .and_then(|op| apply_binary(left, op, right));
        self.settle(result)
    }

    /// Like [`calculate_unary`](Self::calculate_unary) but takes a symbol
    /// or name (`√`/`sqrt`, `±`/`negate`, `1/x`/`reciprocal`, `x²`/`square`,
    /// `%`/`percent`).
    pub fn calculate_unary_symbol(&mut self, symbol: &str, value: f64) -> f64 {
        self.clear_error();
        let result = symbol
            .parse::<UnaryOp>()
            .and_then(|op| apply_unary(op, value));
        self.settle(result)
    }

    /// Display text for `value`. NaN shows the current error message.
    pub fn format_number(&self, value: f64) -> String {
        match &self.error {
            Some(err) => format::format_number(value, &err.to_string()),
            None => format::format_number(value, GENERIC_ERROR_TEXT),
        }
    }

    fn settle(&mut self, result: EngineResult) -> f64 {
        match result {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "calculation failed");
                self.error = Some(err);
                f64::NAN
            }
        }
    }
}
