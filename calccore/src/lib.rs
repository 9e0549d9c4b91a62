//! calccore — arithmetic engine and keypad state machine for deskcalc

pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod operator;
pub mod repaint;
pub mod settings;
pub mod state;
pub mod theme;

pub use engine::{CalculatorEngine, EngineResult};
pub use error::{CalcError, StorageError};
pub use operator::{BinaryOp, UnaryOp};
pub use repaint::{RepaintController, RepaintReason};
pub use settings::{CalcSettings, Layout};
pub use state::{Calculator, Command, DisplayState};
pub use theme::CalcTheme;
