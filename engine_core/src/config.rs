use std::path::Path;

use anyhow::Context;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::InstId;

/// History entries kept per instrument, at minimum. The effective cap grows
/// with the largest configured lookback window.
const MIN_HISTORY: usize = 50;

/// Fair-value model for one instrument. Closed set: instruments whose name has
/// no config entry are skipped entirely rather than guessed at.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FairValueModel {
    /// The instrument's value is known a priori to be stationary.
    StableValue { fair_value: f64 },
    /// SMA crossover with a 1% directional bias once both windows are full.
    TrendFollowing {
        short_window: usize,
        long_window: usize,
    },
    /// Rolling z-score mean reversion over a single window.
    MeanReversion { window: usize, threshold: f64 },
}

impl FairValueModel {
    /// Longest lookback this model needs from the rolling history.
    pub fn max_window(&self) -> usize {
        match *self {
            FairValueModel::StableValue { .. } => 0,
            FairValueModel::TrendFollowing {
                short_window,
                long_window,
            } => short_window.max(long_window),
            FairValueModel::MeanReversion { window, .. } => window,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InstrumentConfig {
    /// Symmetric bound on the signed net position.
    pub position_limit: i64,
    pub model: FairValueModel,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    pub instruments: FxHashMap<InstId, InstrumentConfig>,
}

impl EngineConfig {
    /// Three-instrument table matching the simulated exchange's round-one
    /// universe.
    pub fn default_universe() -> Self {
        let mut instruments = FxHashMap::default();
        instruments.insert(
            InstId::from("RAINFOREST_RESIN").unwrap(),
            InstrumentConfig {
                position_limit: 50,
                model: FairValueModel::StableValue { fair_value: 10_000. },
            },
        );
        instruments.insert(
            InstId::from("KELP").unwrap(),
            InstrumentConfig {
                position_limit: 50,
                model: FairValueModel::TrendFollowing {
                    short_window: 5,
                    long_window: 15,
                },
            },
        );
        instruments.insert(
            InstId::from("SQUID_INK").unwrap(),
            InstrumentConfig {
                position_limit: 50,
                model: FairValueModel::MeanReversion {
                    window: 15,
                    threshold: 1.75,
                },
            },
        );
        Self { instruments }
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading engine config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing engine config {}", path.display()))
    }

    /// Rolling-history cap: at least [`MIN_HISTORY`], stretched to cover the
    /// widest window any configured model looks back over.
    pub fn max_history(&self) -> usize {
        self.instruments
            .values()
            .map(|cfg| cfg.model.max_window())
            .fold(MIN_HISTORY, usize::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_universe_history_cap() {
        let config = EngineConfig::default_universe();
        assert_eq!(config.max_history(), 50);
    }

    #[test]
    fn wide_window_stretches_history_cap() {
        let mut config = EngineConfig::default_universe();
        config.instruments.insert(
            InstId::from("VOLCANIC_ROCK").unwrap(),
            InstrumentConfig {
                position_limit: 20,
                model: FairValueModel::MeanReversion {
                    window: 120,
                    threshold: 2.,
                },
            },
        );
        assert_eq!(config.max_history(), 120);
    }

    #[test]
    fn parses_toml_table() {
        let raw = r#"
            [instruments.KELP]
            position_limit = 50

            [instruments.KELP.model]
            kind = "trend_following"
            short_window = 5
            long_window = 15

            [instruments.RAINFOREST_RESIN]
            position_limit = 50

            [instruments.RAINFOREST_RESIN.model]
            kind = "stable_value"
            fair_value = 10000.0
        "#;
        let config: EngineConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.instruments.len(), 2);
        let kelp = &config.instruments[&InstId::from("KELP").unwrap()];
        assert_eq!(
            kelp.model,
            FairValueModel::TrendFollowing {
                short_window: 5,
                long_window: 15
            }
        );
    }
}
