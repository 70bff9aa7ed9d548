// ============================================================================
// String Calculator Library
// Sums delimited numeric strings with custom delimiters and validation
// ============================================================================

//! # String Calculator
//!
//! Parses a delimited numeric string and returns its sum.
//!
//! ## Features
//!
//! - **Custom delimiters** via a `//[delimiters]\n` header, several per input,
//!   each possibly multi-character
//! - **Multi-line tolerance**: newline always separates tokens
//! - **Negative-number rejection** listing every offender in input order
//! - **Upper-bound filter**: numbers above 1000 are ignored
//! - **Event handlers** for logging and auditing each calculation
//!
//! ## Example
//!
//! ```rust
//! use string_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let calculator = StringCalculator::new(
//!     CalculatorConfig::kata(),
//!     Arc::new(NoOpEventHandler),
//! );
//!
//! assert_eq!(calculator.add(Some("1,2,5")), Ok(8));
//! assert_eq!(calculator.add(Some("//$,@\n1$2@3")), Ok(6));
//! assert_eq!(calculator.add(Some("2,1001")), Ok(2));
//!
//! let err = calculator.add(Some("1,-2,-5")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Negatives are not allowed. The input contained these negative numbers: [-2, -5]"
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

use numeric::CalculatorResult;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, DelimiterSet, ParsedInput};
    pub use crate::engine::{create_from_config, StringCalculator, StringCalculatorBuilder};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{CalculatorError, CalculatorResult};
}

/// Sum `input` with the default kata rules.
///
/// ```
/// assert_eq!(string_calculator::add(Some("1\n,2,3")), Ok(6));
/// assert_eq!(string_calculator::add(None), Ok(0));
/// ```
pub fn add(input: Option<&str>) -> CalculatorResult<i64> {
    engine::StringCalculator::default().add(input)
}
