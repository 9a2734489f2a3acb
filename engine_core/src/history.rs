use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{InstId, Timestamp};

/// One mid-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: Timestamp,
    pub price: f64,
}

/// Rolling mid-price history, round-tripped through the harness as an opaque
/// JSON blob between ticks. The engine itself keeps no state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceHistory {
    pub prices: FxHashMap<InstId, Vec<PricePoint>>,
}

impl PriceHistory {
    /// Parse the blob from the previous tick. An empty or unreadable blob
    /// starts a fresh history; corruption is recovered here, never surfaced.
    pub fn from_blob(blob: &str) -> Self {
        if blob.is_empty() {
            return Self::default();
        }
        match serde_json::from_str(blob) {
            Ok(history) => history,
            Err(err) => {
                tracing::warn!("discarding unreadable trader data: {err}");
                Self::default()
            }
        }
    }

    pub fn to_blob(&self) -> String {
        match serde_json::to_string(self) {
            Ok(blob) => blob,
            Err(err) => {
                // Unreachable for this data shape; the next tick starts fresh.
                tracing::error!("failed to serialize trader data: {err}");
                String::new()
            }
        }
    }

    /// Append one observation and evict the oldest entries past `cap`.
    pub fn record(&mut self, instrument_id: InstId, timestamp: Timestamp, price: f64, cap: usize) {
        let series = self.prices.entry(instrument_id).or_default();
        series.push(PricePoint { timestamp, price });
        if series.len() > cap {
            let excess = series.len() - cap;
            series.drain(..excess);
        }
    }

    /// Full recorded series for one instrument, oldest first.
    pub fn samples(&self, instrument_id: &InstId) -> &[PricePoint] {
        self.prices
            .get(instrument_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
