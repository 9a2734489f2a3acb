pub mod calc;

use crate::{FairValueModel, OrderDepth, history::PricePoint};

impl FairValueModel {
    /// Model price used as the trading threshold for one instrument on one
    /// tick. `None` means not enough data to quote; the instrument is skipped.
    pub fn fair_value(&self, depth: &OrderDepth, samples: &[PricePoint]) -> Option<f64> {
        match *self {
            FairValueModel::StableValue { fair_value } => Some(fair_value),
            FairValueModel::TrendFollowing {
                short_window,
                long_window,
            } => trend_following(depth, samples, short_window, long_window),
            FairValueModel::MeanReversion { window, threshold } => {
                mean_reversion(depth, samples, window, threshold)
            }
        }
    }
}

/// SMA crossover. Quotes the short average, biased 1% toward the detected
/// trend once the long window is also full.
fn trend_following(
    depth: &OrderDepth,
    samples: &[PricePoint],
    short_window: usize,
    long_window: usize,
) -> Option<f64> {
    if samples.len() < short_window {
        return depth.mid_price();
    }
    let short_ma = calc::window_mean(samples, short_window);
    if samples.len() < long_window {
        return Some(short_ma);
    }
    let long_ma = calc::window_mean(samples, long_window);
    if short_ma > long_ma {
        Some(short_ma * 1.01)
    } else {
        Some(short_ma * 0.99)
    }
}

/// Rolling z-score reversion. Prices beyond `threshold` standard deviations
/// from the window mean are quoted half a deviation back toward it.
fn mean_reversion(
    depth: &OrderDepth,
    samples: &[PricePoint],
    window: usize,
    threshold: f64,
) -> Option<f64> {
    if samples.len() < window {
        return depth.mid_price();
    }
    let recent = calc::tail(samples, window);
    let mean = calc::window_mean(recent, window);
    let std_dev = calc::window_std_dev(recent, window);
    if std_dev.is_nan() || std_dev == 0. {
        return Some(mean);
    }
    let latest = recent.last()?.price;
    let z_score = (latest - mean) / std_dev;
    if z_score > threshold {
        Some(mean - 0.5 * std_dev)
    } else if z_score < -threshold {
        Some(mean + 0.5 * std_dev)
    } else {
        Some(mean)
    }
}
