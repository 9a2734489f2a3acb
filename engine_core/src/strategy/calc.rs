use statrs::statistics::Statistics;

use crate::history::PricePoint;

/// Trailing slice of at most `window` samples, newest last.
pub fn tail(samples: &[PricePoint], window: usize) -> &[PricePoint] {
    let start = samples.len().saturating_sub(window);
    &samples[start..]
}

/// Simple moving average over the trailing `window` samples.
pub fn window_mean(samples: &[PricePoint], window: usize) -> f64 {
    tail(samples, window).iter().map(|p| p.price).mean()
}

/// Corrected sample standard deviation (n − 1) over the trailing `window`
/// samples. NaN with fewer than two samples, zero when all samples agree.
pub fn window_std_dev(samples: &[PricePoint], window: usize) -> f64 {
    tail(samples, window).iter().map(|p| p.price).std_dev()
}
