//! Operator vocabulary
//!
//! Buttons and keys produce these enums directly. The symbol parsers exist
//! for anything that still speaks in strings (the engine's symbol API).

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Operators that combine the accumulator with a new operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `left * (right / 100)`: percentage-of, not modulo.
    Percent,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Percent,
    ];

    /// Glyph shown on the keypad and in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Percent => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinaryOp::Add),
            "−" | "-" => Ok(BinaryOp::Subtract),
            "×" | "*" => Ok(BinaryOp::Multiply),
            "÷" | "/" => Ok(BinaryOp::Divide),
            "%" => Ok(BinaryOp::Percent),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

/// Operators applied to the displayed value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    SquareRoot,
    Negate,
    Reciprocal,
    Square,
    /// Divides by 100.
    Percent,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::SquareRoot => "√",
            UnaryOp::Negate => "±",
            UnaryOp::Reciprocal => "1/x",
            UnaryOp::Square => "x²",
            UnaryOp::Percent => "%",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::SquareRoot => "sqrt",
            UnaryOp::Negate => "negate",
            UnaryOp::Reciprocal => "reciprocal",
            UnaryOp::Square => "square",
            UnaryOp::Percent => "percent",
        }
    }

    /// History line for an advanced function applied to `operand`,
    /// e.g. `√(9)`.
    pub fn history_label(self, operand: &str) -> String {
        match self {
            UnaryOp::SquareRoot => format!("√({operand})"),
            UnaryOp::Square => format!("sqr({operand})"),
            UnaryOp::Reciprocal => format!("1/({operand})"),
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnaryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "√" | "sqrt" => Ok(UnaryOp::SquareRoot),
            "±" | "negate" => Ok(UnaryOp::Negate),
            "1/x" | "reciprocal" => Ok(UnaryOp::Reciprocal),
            "x²" | "square" => Ok(UnaryOp::Square),
            "%" | "percent" => Ok(UnaryOp::Percent),
            other => Err(CalcError::UnknownUnaryOperator(other.to_string())),
        }
    }
}
