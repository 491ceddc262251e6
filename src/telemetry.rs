//! Diagnostic output of the sequencer.
//!
//! The sequencer reports what it is doing as key/value pairs and never reads
//! anything back. Hosts plug in whatever transport they have by implementing
//! [`TelemetrySink`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key carrying the active step's label.
pub const STATE_KEY: &str = "State";

/// Key carrying the remaining distance of a Forward step.
pub const FORWARD_ERROR_KEY: &str = "FWD ERR";

/// A telemetry value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TelemetryValue {
    Text(String),
    Number(f32),
}

impl TelemetryValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for TelemetryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for TelemetryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TelemetryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f32> for TelemetryValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

/// Write-only destination for diagnostics.
///
/// Delivery is fire-and-forget: a sink that cannot deliver drops the entry.
pub trait TelemetrySink {
    fn add_data(&mut self, key: &str, value: TelemetryValue);
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for &mut T {
    fn add_data(&mut self, key: &str, value: TelemetryValue) {
        (**self).add_data(key, value);
    }
}

/// Forwards every entry as a `tracing` debug event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn add_data(&mut self, key: &str, value: TelemetryValue) {
        tracing::debug!(
            target: "motion_sequencer::telemetry",
            key = key,
            value = %value,
            "telemetry"
        );
    }
}

/// Keeps every entry in arrival order. Useful for tests and replay.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    entries: Vec<(String, TelemetryValue)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, TelemetryValue)] {
        &self.entries
    }

    /// All values recorded under `key`, oldest first.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a TelemetryValue> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// The `"State"` labels recorded so far, oldest first.
    pub fn states(&self) -> Vec<&str> {
        self.values(STATE_KEY).filter_map(TelemetryValue::as_text).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TelemetrySink for RecordingSink {
    fn add_data(&mut self, key: &str, value: TelemetryValue) {
        self.entries.push((key.to_owned(), value));
    }
}
