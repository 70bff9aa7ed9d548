// ============================================================================
// Domain Models Module
// Configuration and input structure of the calculator
// ============================================================================

pub mod config;
pub mod delimiters;

pub use config::{
    CalculatorConfig, DEFAULT_DELIMITER, DEFAULT_HEADER_MARKER, DEFAULT_LIST_SEPARATOR,
    DEFAULT_UPPER_BOUND,
};
pub use delimiters::{DelimiterSet, ParsedInput};
