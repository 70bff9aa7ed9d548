// ============================================================================
// Numeric Module
// Token coercion and the calculator's error type
// ============================================================================
//
// This module provides:
// - split_all: iterative multi-separator splitting
// - parse_token: trimmed, optionally signed integer parsing
// - CalculatorError: the single failure kind of the calculator
//
// Design principles:
// - Unparseable tokens are values (None), never errors
// - Summation saturates at i64::MAX instead of panicking

mod errors;
mod tokens;

pub use errors::{CalculatorError, CalculatorResult};
pub use tokens::{parse_token, split_all};
