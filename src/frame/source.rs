//! Frame source abstraction.
//!
//! Device capture itself (camera session management) lives outside this
//! crate; anything that can hand over YUV420SP bytes at some rate can drive
//! the pipeline by implementing [`FrameSource`].

use super::types::{ColorEffect, RawFrame, SourceError};

/// A producer of raw YUV420SP frames.
///
/// The session runner polls `next_frame()` at its target rate. Dimensions
/// are assumed stable after `open()`, but the pipeline tolerates a change by
/// re-allocating its buffers.
pub trait FrameSource: Send {
    /// Prepare the source for delivery.
    ///
    /// Called once before the first `next_frame()`. The color effect is a
    /// session-start knob and is not changed afterwards.
    fn open(&mut self, effect: ColorEffect) -> Result<(), SourceError>;

    /// Produce the next frame.
    fn next_frame(&mut self) -> Result<RawFrame, SourceError>;

    /// Dimensions the source negotiated, if known before the first frame.
    fn dimensions(&self) -> Option<(u32, u32)> {
        None
    }
}
