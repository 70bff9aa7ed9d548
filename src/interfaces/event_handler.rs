// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the string calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Input received (length in bytes, 0 for absent input)
    InputReceived {
        length: usize,
        timestamp: DateTime<Utc>,
    },

    /// Delimiter set resolved from a header or the defaults
    DelimitersResolved {
        delimiters: Vec<String>,
        custom: bool,
        timestamp: DateTime<Utc>,
    },

    /// Non-empty token that did not parse as an integer
    TokenDiscarded {
        token: String,
        timestamp: DateTime<Utc>,
    },

    /// Number above the upper bound, contributes nothing
    NumberIgnored {
        value: i64,
        upper_bound: i64,
        timestamp: DateTime<Utc>,
    },

    /// Input rejected because of negative numbers
    NegativesRejected {
        negatives: Vec<i64>,
        timestamp: DateTime<Utc>,
    },

    /// Sum computed successfully
    SumComputed {
        sum: i64,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}

    fn on_events(&self, _events: Vec<CalculationEvent>) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::NegativesRejected { negatives, .. } => {
                tracing::warn!(?negatives, "String calculator rejected negative numbers");
            }
            _ => tracing::debug!("String calculator event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in delivery order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    /// Remove and return all recorded events
    pub fn drain(&self) -> Vec<CalculationEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}
