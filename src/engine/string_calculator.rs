// ============================================================================
// String Calculator
// Delimiter detection, tokenization, validation and bounded summation
// ============================================================================

use crate::domain::{CalculatorConfig, ParsedInput};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{parse_token, split_all, CalculatorError, CalculatorResult};
use chrono::Utc;
use std::sync::Arc;

/// Sums delimited numeric strings.
///
/// Holds no mutable state; one instance can be shared across threads.
pub struct StringCalculator {
    /// Delimiter and bound configuration
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl StringCalculator {
    /// Create a new calculator.
    ///
    /// The configuration is taken as is; use
    /// [`create_from_config`](crate::engine::create_from_config) or the
    /// builder to have it validated first.
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Sum the numbers in `input`.
    ///
    /// Absent or empty input sums to 0. Tokens that do not parse as integers
    /// are dropped, and numbers above the upper bound count as 0.
    ///
    /// # Errors
    /// Returns `NegativesNotAllowed` listing every negative number in order of
    /// appearance. No sum is produced in that case.
    ///
    /// # Example
    /// ```
    /// use string_calculator::prelude::*;
    ///
    /// let calculator = StringCalculator::default();
    /// assert_eq!(calculator.add(Some("//;\n1;3;4")), Ok(8));
    /// assert_eq!(calculator.add(None), Ok(0));
    ///
    /// let err = calculator.add(Some("1,-2,-5")).unwrap_err();
    /// assert_eq!(err.negatives(), &[-2, -5]);
    /// ```
    pub fn add(&self, input: Option<&str>) -> CalculatorResult<i64> {
        let input = input.unwrap_or_default();
        let mut events = vec![CalculationEvent::InputReceived {
            length: input.len(),
            timestamp: Utc::now(),
        }];

        if input.is_empty() {
            return Ok(self.finish(events, 0));
        }

        let parsed = ParsedInput::parse(input, &self.config);
        events.push(CalculationEvent::DelimitersResolved {
            delimiters: parsed.delimiters.to_vec(),
            custom: parsed.delimiters.is_custom(),
            timestamp: Utc::now(),
        });

        let separators = parsed.delimiters.separators(self.config.newline_separator);
        let mut numbers = Vec::new();
        for token in split_all(parsed.body, separators.as_slice()) {
            match parse_token(token) {
                Some(number) => numbers.push(number),
                None => {
                    let token = token.trim();
                    if !token.is_empty() {
                        events.push(CalculationEvent::TokenDiscarded {
                            token: token.to_string(),
                            timestamp: Utc::now(),
                        });
                    }
                }
            }
        }

        let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
        if !negatives.is_empty() {
            events.push(CalculationEvent::NegativesRejected {
                negatives: negatives.clone(),
                timestamp: Utc::now(),
            });
            self.event_handler.on_events(events);
            return Err(CalculatorError::NegativesNotAllowed { negatives });
        }

        let upper_bound = self.config.upper_bound;
        let mut sum: i64 = 0;
        for number in numbers {
            if number > upper_bound {
                events.push(CalculationEvent::NumberIgnored {
                    value: number,
                    upper_bound,
                    timestamp: Utc::now(),
                });
            } else {
                sum = sum.saturating_add(number);
            }
        }

        Ok(self.finish(events, sum))
    }

    /// Get the configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn finish(&self, mut events: Vec<CalculationEvent>, sum: i64) -> i64 {
        events.push(CalculationEvent::SumComputed {
            sum,
            timestamp: Utc::now(),
        });
        self.event_handler.on_events(events);
        sum
    }
}

impl Default for StringCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }
}
