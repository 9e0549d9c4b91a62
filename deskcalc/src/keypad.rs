//! Button layout and keyboard accelerators

use calccore::{BinaryOp, Command, UnaryOp};

/// One keypad button: label and the command it sends.
pub type Button = (&'static str, Command);

pub const BASIC_ROWS: [[Button; 4]; 5] = [
    [
        ("C", Command::Clear),
        ("CE", Command::ClearEntry),
        ("%", Command::Percent),
        ("÷", Command::Operator(BinaryOp::Divide)),
    ],
    [
        ("7", Command::Digit('7')),
        ("8", Command::Digit('8')),
        ("9", Command::Digit('9')),
        ("×", Command::Operator(BinaryOp::Multiply)),
    ],
    [
        ("4", Command::Digit('4')),
        ("5", Command::Digit('5')),
        ("6", Command::Digit('6')),
        ("−", Command::Operator(BinaryOp::Subtract)),
    ],
    [
        ("1", Command::Digit('1')),
        ("2", Command::Digit('2')),
        ("3", Command::Digit('3')),
        ("+", Command::Operator(BinaryOp::Add)),
    ],
    [
        ("±", Command::Negate),
        ("0", Command::Digit('0')),
        (".", Command::Decimal),
        ("=", Command::Equals),
    ],
];

/// Extra row shown above the basic keypad in the advanced layout.
pub const ADVANCED_ROW: [Button; 4] = [
    ("√", Command::Advanced(UnaryOp::SquareRoot)),
    ("x²", Command::Advanced(UnaryOp::Square)),
    ("1/x", Command::Advanced(UnaryOp::Reciprocal)),
    ("del", Command::Backspace),
];

/// Command for a typed character, if any.
///
/// Typed text covers the number row, the numpad and shifted symbols
/// regardless of keyboard layout.
pub fn command_for_char(c: char) -> Option<Command> {
    match c {
        '0'..='9' => Some(Command::Digit(c)),
        '.' | ',' => Some(Command::Decimal),
        '+' => Some(Command::Operator(BinaryOp::Add)),
        '-' => Some(Command::Operator(BinaryOp::Subtract)),
        '*' => Some(Command::Operator(BinaryOp::Multiply)),
        '/' => Some(Command::Operator(BinaryOp::Divide)),
        '%' => Some(Command::Percent),
        '=' => Some(Command::Equals),
        _ => None,
    }
}

/// Command for a non-text key, if any.
pub fn command_for_key(key: egui::Key) -> Option<Command> {
    match key {
        egui::Key::Enter => Some(Command::Equals),
        egui::Key::Backspace => Some(Command::Backspace),
        egui::Key::Escape => Some(Command::Clear),
        egui::Key::Delete => Some(Command::ClearEntry),
        _ => None,
    }
}
