//! Histogram bar-chart layout.
//!
//! Bars are scaled the way the original overlay draws them: per-bin
//! probability times [`BAR_SCALE`], capped at [`BAR_CAP`]. That capped
//! height is then mapped onto however many character rows the chart has.

use crate::pipeline::{Histogram, BIN_COUNT};

/// Probability-to-height scale factor for one bar.
pub const BAR_SCALE: f64 = 3000.0;

/// Maximum bar height before rescaling to chart rows.
pub const BAR_CAP: f64 = 80.0;

/// Character-cell dimensions of one channel's chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    /// Chart width in character cells; the 256 bins are folded into this
    /// many columns
    pub columns: usize,
    /// Chart height in character cells
    pub rows: usize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            columns: 64,
            rows: 8,
        }
    }
}

/// Per-column bar heights in character rows, 0..=layout.rows.
///
/// Each column covers a contiguous group of bins and takes the tallest
/// capped bar within its group, so narrow spikes stay visible after
/// folding. A zero-sample histogram yields all-zero heights.
pub fn bar_heights(hist: &Histogram, layout: ChartLayout) -> Vec<usize> {
    let columns = layout.columns.max(1);
    let total = hist.sample_count() as f64;
    let mut heights = vec![0usize; columns];
    if total == 0.0 {
        return heights;
    }

    let bins_per_column = BIN_COUNT.div_ceil(columns);
    for (bin, &count) in hist.bins().iter().enumerate() {
        let prob = count as f64 / total;
        let capped = (prob * BAR_SCALE).min(BAR_CAP);
        let rows = (capped / BAR_CAP * layout.rows as f64).round() as usize;
        let column = bin / bins_per_column;
        if rows > heights[column] {
            heights[column] = rows;
        }
    }
    heights
}

/// Render one histogram as chart rows, top row first.
pub fn chart_lines(hist: &Histogram, layout: ChartLayout) -> Vec<String> {
    let heights = bar_heights(hist, layout);
    let mut lines = Vec::with_capacity(layout.rows);
    for row in (1..=layout.rows).rev() {
        let line: String = heights
            .iter()
            .map(|&h| if h >= row { '█' } else { ' ' })
            .collect();
        lines.push(line);
    }
    lines
}
