//! Frame-processing pipeline.
//!
//! The per-frame sequence, run once for every delivered camera frame:
//!
//! 1. **Color conversion** - YUV420SP to packed RGB ([`convert`])
//! 2. **Histogram accumulation** - 256-bin counts per channel ([`Histogram`])
//! 3. **Statistical reduction** - mean and std-dev per channel ([`ChannelStats`])
//! 4. **Publication** - double-buffered snapshots for the renderer
//!    ([`FrameProcessor`] / [`OverlayHandle`])
//!
//! [`PipelineSession`] runs the whole sequence on a background thread fed
//! by a [`crate::frame::FrameSource`].

pub mod convert;
mod histogram;
mod processor;
mod session;
mod stats;

pub use histogram::{Channel, Histogram, BIN_COUNT, SAMPLE_STRIDE};
pub use processor::{FrameProcessor, OverlayHandle, OverlaySnapshot, PipelineError};
pub use session::{PipelineSession, SessionCommand, SessionError};
pub use stats::{BinWeights, ChannelStats};
