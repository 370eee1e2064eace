//! Overlay rendering for processed frames.
//!
//! The pipeline exposes results; drawing them is a pluggable capability
//! behind the [`Renderer`] trait. [`TextRenderer`] is the built-in
//! implementation: per-channel bar charts plus a numeric readout written to
//! any `io::Write`.

mod chart;
mod readout;

pub use chart::{bar_heights, chart_lines, ChartLayout, BAR_CAP, BAR_SCALE};
pub use readout::{format_sig, mean_line, std_dev_line, READOUT_DIGITS};

use std::io::{self, Write};

use crate::pipeline::{Channel, OverlaySnapshot};

/// A consumer of pipeline results that draws the overlay.
pub trait Renderer {
    /// Draw one snapshot.
    fn render(&mut self, snapshot: &OverlaySnapshot) -> io::Result<()>;
}

/// Text renderer: numeric readout plus one bar chart per channel.
pub struct TextRenderer<W: Write> {
    out: W,
    layout: ChartLayout,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, layout: ChartLayout) -> Self {
        Self { out, layout }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &OverlaySnapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "frame {} ({}x{})",
            snapshot.sequence, snapshot.width, snapshot.height
        )?;
        writeln!(self.out, "{}", mean_line(&snapshot.stats))?;
        writeln!(self.out, "{}", std_dev_line(&snapshot.stats))?;

        for channel in Channel::ALL {
            writeln!(self.out, "{:?}", channel)?;
            for line in chart_lines(&snapshot.histograms[channel.index()], self.layout) {
                writeln!(self.out, "  {}", line)?;
            }
        }
        self.out.flush()
    }
}
