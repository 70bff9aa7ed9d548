// ============================================================================
// Calculator Errors
// Error types raised by the string calculator
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while summing a numeric string.
///
/// Irregular input (empty strings, unparseable tokens, consecutive
/// delimiters, values above the upper bound) is absorbed by the calculator
/// and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorError {
    /// The input contained negative numbers, listed in order of appearance
    NegativesNotAllowed { negatives: Vec<i64> },
}

impl CalculatorError {
    /// The offending numbers, left to right as they appeared in the input.
    pub fn negatives(&self) -> &[i64] {
        match self {
            CalculatorError::NegativesNotAllowed { negatives } => negatives,
        }
    }

    /// Compact rendering, e.g. `Negatives not allowed: -2, -5`.
    pub fn short_message(&self) -> String {
        let joined = self
            .negatives()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Negatives not allowed: {}", joined)
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::NegativesNotAllowed { negatives } => write!(
                f,
                "Negatives are not allowed. The input contained these negative numbers: {:?}",
                negatives
            ),
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalculatorError::NegativesNotAllowed {
            negatives: vec![-2, -5],
        };
        assert_eq!(
            err.to_string(),
            "Negatives are not allowed. The input contained these negative numbers: [-2, -5]"
        );
    }

    #[test]
    fn test_short_message() {
        let err = CalculatorError::NegativesNotAllowed {
            negatives: vec![-2, -5],
        };
        assert_eq!(err.short_message(), "Negatives not allowed: -2, -5");

        let single = CalculatorError::NegativesNotAllowed {
            negatives: vec![-10],
        };
        assert_eq!(single.short_message(), "Negatives not allowed: -10");
    }

    #[test]
    fn test_negatives_accessor() {
        let err = CalculatorError::NegativesNotAllowed {
            negatives: vec![-7, -1, -7],
        };
        assert_eq!(err.negatives(), &[-7, -1, -7]);
    }

    #[test]
    fn test_error_equality() {
        let a = CalculatorError::NegativesNotAllowed { negatives: vec![-1] };
        let b = CalculatorError::NegativesNotAllowed { negatives: vec![-1] };
        let c = CalculatorError::NegativesNotAllowed { negatives: vec![-2] };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&CalculatorError::NegativesNotAllowed { negatives: vec![-3] });
    }
}
