//! Per-frame pipeline orchestration.
//!
//! [`FrameProcessor`] owns the buffer lifecycle and runs the full sequence
//! for every delivered frame: ingest raw bytes, decode to RGB, accumulate
//! the three channel histograms, reduce each to statistics, publish.
//!
//! Results are published through double buffering: two snapshot slots and
//! an atomic "current" index. The writer always fills the non-current slot
//! and then swaps, so a reader pulling the current snapshot never observes
//! a half-written frame.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::frame::{ColorEffect, RawFrame};

use super::convert::{yuv420sp_to_gray, yuv420sp_to_rgb};
use super::histogram::{Channel, Histogram};
use super::stats::{BinWeights, ChannelStats};

/// Errors that can occur while processing a frame.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Frame buffer length does not match the declared dimensions
    #[error(
        "frame buffer is {actual} bytes but a {width}x{height} YUV420SP frame needs {expected}"
    )]
    BufferSizeMismatch {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },
    /// A frame arrived after the pipeline was stopped
    #[error("pipeline is stopped")]
    Stopped,
}

/// One published pipeline result: the decoded pixels plus the derived
/// histogram and statistics data a renderer needs to draw the overlay.
#[derive(Debug, Clone)]
pub struct OverlaySnapshot {
    /// Packed `0xAARRGGBB` pixels, `width * height` entries
    pub rgb: Vec<u32>,
    /// Red, green, blue histograms (in [`Channel::ALL`] order)
    pub histograms: [Histogram; 3],
    /// Per-channel mean and standard deviation
    pub stats: [ChannelStats; 3],
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Monotonic frame sequence number, starting at 1
    pub sequence: u64,
}

impl OverlaySnapshot {
    fn empty() -> Self {
        Self {
            rgb: Vec::new(),
            histograms: [Histogram::new(), Histogram::new(), Histogram::new()],
            stats: [ChannelStats::default(); 3],
            width: 0,
            height: 0,
            sequence: 0,
        }
    }
}

struct Shared {
    slots: [Mutex<OverlaySnapshot>; 2],
    current: AtomicUsize,
}

/// Pull-based reader handle for the latest published snapshot.
///
/// Cloneable and cheap to pass to a render loop; rendering stays a separate
/// collaborator rather than living inside the pipeline.
#[derive(Clone)]
pub struct OverlayHandle {
    shared: Arc<Shared>,
}

impl OverlayHandle {
    /// Clone out the most recently published snapshot.
    ///
    /// Returns `None` until the first frame has been processed.
    pub fn latest(&self) -> Option<OverlaySnapshot> {
        let index = self.shared.current.load(Ordering::Acquire);
        let slot = self
            .shared
            .slots[index]
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.sequence == 0 {
            None
        } else {
            Some(slot.clone())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No dimensions known yet, no buffers allocated
    Uninitialized,
    /// Buffers allocated for the given dimensions
    Ready { width: u32, height: u32 },
    /// Session ended; frames are rejected
    Stopped,
}

/// Owns per-frame buffers and runs the pipeline once per delivered frame.
pub struct FrameProcessor {
    effect: ColorEffect,
    state: State,
    /// Reused ingest buffer for the raw frame bytes, sized on first frame
    yuv: Vec<u8>,
    weights: BinWeights,
    shared: Arc<Shared>,
    sequence: u64,
}

impl FrameProcessor {
    /// Create a processor with the given color effect.
    ///
    /// Buffers are allocated lazily when the first frame reveals the
    /// session's dimensions.
    pub fn new(effect: ColorEffect) -> Self {
        Self {
            effect,
            state: State::Uninitialized,
            yuv: Vec::new(),
            weights: BinWeights::new(),
            shared: Arc::new(Shared {
                slots: [
                    Mutex::new(OverlaySnapshot::empty()),
                    Mutex::new(OverlaySnapshot::empty()),
                ],
                current: AtomicUsize::new(0),
            }),
            sequence: 0,
        }
    }

    /// Reader handle for the render side.
    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// The configured color effect.
    pub fn effect(&self) -> ColorEffect {
        self.effect
    }

    /// Run one full pipeline pass over a raw YUV420SP frame.
    ///
    /// Validates the buffer length against the declared dimensions before
    /// touching any bytes, then decodes, accumulates all three histograms,
    /// reduces statistics and publishes the result.
    pub fn process_frame(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(), PipelineError> {
        if self.state == State::Stopped {
            return Err(PipelineError::Stopped);
        }

        let expected = RawFrame::expected_len(width, height);
        if data.len() != expected {
            return Err(PipelineError::BufferSizeMismatch {
                expected,
                actual: data.len(),
                width,
                height,
            });
        }

        match self.state {
            State::Uninitialized => {
                log::info!("first frame: allocating buffers for {}x{}", width, height);
                self.state = State::Ready { width, height };
            }
            State::Ready { width: w, height: h } if w != width || h != height => {
                log::warn!(
                    "frame dimensions changed from {}x{} to {}x{}, reallocating",
                    w,
                    h,
                    width,
                    height
                );
                self.state = State::Ready { width, height };
            }
            _ => {}
        }

        // Ingest: replace the retained raw frame wholesale, reusing storage
        self.yuv.clear();
        self.yuv.extend_from_slice(data);

        let pixel_count = width as usize * height as usize;
        let back = 1 - self.shared.current.load(Ordering::Acquire);
        {
            let mut slot = self.shared.slots[back]
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            slot.rgb.resize(pixel_count, 0);
            slot.width = width;
            slot.height = height;

            match self.effect {
                ColorEffect::Color => {
                    yuv420sp_to_rgb(&mut slot.rgb, &self.yuv, width as usize, height as usize)
                }
                ColorEffect::Mono => {
                    yuv420sp_to_gray(&mut slot.rgb, &self.yuv, width as usize, height as usize)
                }
            }

            let OverlaySnapshot {
                rgb,
                histograms,
                stats,
                ..
            } = &mut *slot;
            for channel in Channel::ALL {
                let hist = &mut histograms[channel.index()];
                hist.accumulate(rgb, channel);
                stats[channel.index()] = ChannelStats::reduce(hist, &self.weights);
            }

            self.sequence += 1;
            slot.sequence = self.sequence;
        }
        self.shared.current.store(back, Ordering::Release);

        Ok(())
    }

    /// End the session: release the ingest buffer and reject further frames.
    ///
    /// The last published snapshot stays readable through existing handles.
    pub fn stop(&mut self) {
        if self.state != State::Stopped {
            log::info!("pipeline stopped after {} frames", self.sequence);
            self.state = State::Stopped;
            self.yuv = Vec::new();
        }
    }

    /// Whether `stop()` has been called.
    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    /// Number of frames processed so far.
    pub fn frames_processed(&self) -> u64 {
        self.sequence
    }
}
