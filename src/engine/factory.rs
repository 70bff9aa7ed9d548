// ============================================================================
// Calculator Factory
// Creates string calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::StringCalculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a string calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<StringCalculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use string_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::kata();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calculator.add(Some("1,2,5")), Ok(8));
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<StringCalculator, String> {
    config.validate()?;

    tracing::debug!(
        delimiters = ?config.default_delimiters,
        upper_bound = config.upper_bound,
        newline_separator = config.newline_separator,
        "Creating string calculator"
    );

    Ok(StringCalculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating string calculators with fluent API
///
/// # Example
/// ```
/// use string_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = StringCalculatorBuilder::new()
///     .with_delimiters([";", "|"])
///     .with_upper_bound(100)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calculator.add(Some("1;2|200")), Ok(3));
/// ```
pub struct StringCalculatorBuilder {
    config: CalculatorConfig,
}

impl StringCalculatorBuilder {
    /// Create a new builder with kata defaults
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::kata(),
        }
    }

    // ========================================================================
    // Delimiter Configuration
    // ========================================================================

    /// Replace the default delimiters
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.default_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Add one default delimiter
    pub fn add_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.default_delimiters.push(delimiter.into());
        self
    }

    /// Enable or disable the implicit newline separator
    pub fn with_newline_separator(mut self, enabled: bool) -> Self {
        self.config.newline_separator = enabled;
        self
    }

    /// Set the custom-delimiter header marker
    pub fn with_header_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.header_marker = marker.into();
        self
    }

    /// Set the separator between delimiters inside a header
    pub fn with_delimiter_list_separator(mut self, separator: char) -> Self {
        self.config.delimiter_list_separator = separator;
        self
    }

    // ========================================================================
    // Summation Configuration
    // ========================================================================

    /// Set the upper bound
    pub fn with_upper_bound(mut self, upper_bound: i64) -> Self {
        self.config.upper_bound = upper_bound;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Apply unbounded configuration
    pub fn unbounded() -> Self {
        Self::from_config(CalculatorConfig::unbounded())
    }

    /// Apply single-line configuration
    pub fn single_line() -> Self {
        Self::from_config(CalculatorConfig::single_line())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<StringCalculator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for StringCalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
