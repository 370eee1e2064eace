//! Histogram statistics: mean and standard deviation per channel.

use super::histogram::{Histogram, BIN_COUNT};

/// Precomputed squared-bin values, so the second moment does not recompute
/// `bin * bin` on every frame.
#[derive(Debug, Clone)]
pub struct BinWeights {
    squared: [f64; BIN_COUNT],
}

impl Default for BinWeights {
    fn default() -> Self {
        Self::new()
    }
}

impl BinWeights {
    /// Build the bin-squared table. Done once at pipeline construction.
    pub fn new() -> Self {
        let mut squared = [0.0; BIN_COUNT];
        for (bin, w) in squared.iter_mut().enumerate() {
            *w = (bin * bin) as f64;
        }
        Self { squared }
    }
}

/// Mean and standard deviation of one channel's intensity distribution.
///
/// Both are NaN when the histogram holds no samples (0/0 division), which
/// is the expected degenerate-frame outcome, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ChannelStats {
    /// Reduce a histogram to mean and standard deviation.
    ///
    /// Two-pass bin-weighted moments: exact for discretized counts, so no
    /// streaming-stability concerns arise.
    pub fn reduce(hist: &Histogram, weights: &BinWeights) -> Self {
        let mut sum = 0.0f64;
        let mut weighted = 0.0f64;
        for (bin, &count) in hist.bins().iter().enumerate() {
            weighted += count as f64 * bin as f64;
            sum += count as f64;
        }
        let mean = weighted / sum;

        let mut second_moment = 0.0f64;
        for (bin, &count) in hist.bins().iter().enumerate() {
            second_moment += count as f64 * weights.squared[bin];
        }
        second_moment /= sum;

        Self {
            mean,
            std_dev: (second_moment - mean * mean).sqrt(),
        }
    }
}
