// ============================================================================
// Engine Module
// Contains the calculator business logic
// ============================================================================

mod string_calculator;

pub mod factory;

pub use factory::{create_from_config, StringCalculatorBuilder};
pub use string_calculator::StringCalculator;
