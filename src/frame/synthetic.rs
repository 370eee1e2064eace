//! Deterministic synthetic frame generator.
//!
//! Stands in for a camera when none is wired up: produces a horizontally
//! drifting luma gradient with a slow chroma sweep, in YUV420SP layout.
//! Used by the demo binary and the end-to-end tests.

use super::source::FrameSource;
use super::types::{ColorEffect, RawFrame, SourceError};

/// Synthetic YUV420SP source with a drifting gradient pattern.
#[derive(Debug)]
pub struct SyntheticSource {
    width: u32,
    height: u32,
    effect: ColorEffect,
    tick: u64,
    opened: bool,
}

impl SyntheticSource {
    /// Create a source producing frames of the given even dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            effect: ColorEffect::Color,
            tick: 0,
            opened: false,
        }
    }

    /// Fill `data` with one frame of the pattern for the given tick.
    fn fill(&self, data: &mut [u8]) {
        let w = self.width as usize;
        let h = self.height as usize;
        let frame_size = w * h;
        let shift = (self.tick * 2) as usize;

        for j in 0..h {
            for i in 0..w {
                // Diagonal gradient drifting right over time, kept inside
                // the nominal luma range 16..=235
                let v = ((i + j + shift) % 220) + 16;
                data[j * w + i] = v as u8;
            }
        }

        // Interleaved V/U plane, half resolution in both directions
        let chroma = &mut data[frame_size..];
        match self.effect {
            ColorEffect::Mono => chroma.fill(128),
            ColorEffect::Color => {
                let sweep = (self.tick % 128) as usize;
                for j in 0..h / 2 {
                    for i in 0..w / 2 {
                        let base = (j * w / 2 + i) * 2;
                        chroma[base] = (96 + ((i + sweep) % 64)) as u8; // V
                        chroma[base + 1] = (96 + ((j + sweep) % 64)) as u8; // U
                    }
                }
            }
        }
    }
}

impl FrameSource for SyntheticSource {
    fn open(&mut self, effect: ColorEffect) -> Result<(), SourceError> {
        if self.width == 0 || self.height == 0 {
            return Err(SourceError::OpenFailed(format!(
                "zero-area frame size {}x{}",
                self.width, self.height
            )));
        }
        self.effect = effect;
        self.opened = true;
        Ok(())
    }

    fn next_frame(&mut self) -> Result<RawFrame, SourceError> {
        if !self.opened {
            return Err(SourceError::NoFrameSource);
        }
        let mut data = vec![0u8; RawFrame::expected_len(self.width, self.height)];
        self.fill(&mut data);
        self.tick += 1;
        Ok(RawFrame {
            data,
            width: self.width,
            height: self.height,
        })
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width, self.height))
    }
}
