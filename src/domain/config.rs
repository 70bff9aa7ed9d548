// ============================================================================
// Calculator Configuration
// Delimiter defaults, header syntax and the summation upper bound
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default delimiter used when the input carries no header
pub const DEFAULT_DELIMITER: &str = ",";

/// Values strictly greater than this are ignored by default
pub const DEFAULT_UPPER_BOUND: i64 = 1000;

/// Prefix that introduces a custom-delimiter header
pub const DEFAULT_HEADER_MARKER: &str = "//";

/// Separates the entries of a custom-delimiter header
pub const DEFAULT_LIST_SEPARATOR: char = ',';

/// Configuration for a string calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Delimiters used when no custom-delimiter header is present
    pub default_delimiters: Vec<String>,

    /// Values strictly greater than this contribute nothing to the sum
    pub upper_bound: i64,

    /// Whether a literal newline always separates tokens,
    /// even when a custom delimiter is active
    pub newline_separator: bool,

    /// Marker that starts a custom-delimiter header (e.g. `//;\n`)
    pub header_marker: String,

    /// Separator between several delimiters inside one header
    pub delimiter_list_separator: char,
}

impl CalculatorConfig {
    /// Create a new configuration with the given default delimiters
    pub fn new(default_delimiters: Vec<String>) -> Self {
        Self {
            default_delimiters,
            upper_bound: DEFAULT_UPPER_BOUND,
            newline_separator: true,
            header_marker: DEFAULT_HEADER_MARKER.to_string(),
            delimiter_list_separator: DEFAULT_LIST_SEPARATOR,
        }
    }

    /// Builder method: Set the upper bound
    pub fn with_upper_bound(mut self, upper_bound: i64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Builder method: Enable or disable the implicit newline separator
    pub fn with_newline_separator(mut self, enabled: bool) -> Self {
        self.newline_separator = enabled;
        self
    }

    /// Builder method: Set the header marker
    pub fn with_header_marker(mut self, marker: impl Into<String>) -> Self {
        self.header_marker = marker.into();
        self
    }

    /// Builder method: Set the separator used inside headers
    pub fn with_delimiter_list_separator(mut self, separator: char) -> Self {
        self.delimiter_list_separator = separator;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_delimiters.is_empty() {
            return Err("At least one default delimiter is required".to_string());
        }

        if self.default_delimiters.iter().any(|d| d.is_empty()) {
            return Err("Delimiters cannot be empty".to_string());
        }

        if self.upper_bound < 0 {
            return Err("Upper bound cannot be negative".to_string());
        }

        if self.header_marker.is_empty() {
            return Err("Header marker cannot be empty".to_string());
        }

        if self.header_marker.contains('\n') {
            return Err("Header marker cannot contain a newline".to_string());
        }

        if self.delimiter_list_separator == '\n' {
            return Err("Delimiter list separator cannot be a newline".to_string());
        }

        Ok(())
    }

    /// Load a configuration from JSON and validate it.
    ///
    /// Fields missing from the document take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::kata()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Classic kata rules
    /// - Comma delimiter, `//` header
    /// - Newline always separates
    /// - Numbers above 1000 ignored
    pub fn kata() -> Self {
        Self::new(vec![DEFAULT_DELIMITER.to_string()])
    }

    /// Kata rules without the upper-bound filter
    pub fn unbounded() -> Self {
        Self::kata().with_upper_bound(i64::MAX)
    }

    /// Kata rules where newline is only a separator if declared
    pub fn single_line() -> Self {
        Self::kata().with_newline_separator(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();

        assert_eq!(config.default_delimiters, vec![",".to_string()]);
        assert_eq!(config.upper_bound, 1000);
        assert!(config.newline_separator);
        assert_eq!(config.header_marker, "//");
        assert_eq!(config.delimiter_list_separator, ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::new(vec![";".to_string()])
            .with_upper_bound(50)
            .with_header_marker("##")
            .with_delimiter_list_separator('|');

        assert_eq!(config.upper_bound, 50);
        assert_eq!(config.header_marker, "##");
        assert_eq!(config.delimiter_list_separator, '|');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(CalculatorConfig::new(vec![]).validate().is_err());
        assert!(CalculatorConfig::new(vec![String::new()]).validate().is_err());
        assert!(CalculatorConfig::kata().with_upper_bound(-1).validate().is_err());
        assert!(CalculatorConfig::kata().with_header_marker("").validate().is_err());
        assert!(CalculatorConfig::kata()
            .with_header_marker("/\n")
            .validate()
            .is_err());
        assert!(CalculatorConfig::kata()
            .with_delimiter_list_separator('\n')
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(CalculatorConfig::unbounded().upper_bound, i64::MAX);
        assert!(!CalculatorConfig::single_line().newline_separator);
        assert_eq!(CalculatorConfig::kata(), CalculatorConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = CalculatorConfig::from_json(r#"{"upper_bound": 10}"#).unwrap();
        assert_eq!(config.upper_bound, 10);
        assert_eq!(config.default_delimiters, vec![",".to_string()]);

        let config =
            CalculatorConfig::from_json(r#"{"default_delimiters": [";", "|"]}"#).unwrap();
        assert_eq!(config.default_delimiters.len(), 2);

        assert!(CalculatorConfig::from_json(r#"{"default_delimiters": []}"#).is_err());
        assert!(CalculatorConfig::from_json("not json").is_err());
    }
}
