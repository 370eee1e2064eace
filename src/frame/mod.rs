//! Raw frame types and frame sources.
//!
//! This module defines the boundary between frame acquisition and the
//! processing pipeline:
//! - Raw frame data via [`RawFrame`] (YUV420SP layout)
//! - Acquisition via the [`FrameSource`] trait
//! - A deterministic generator via [`SyntheticSource`]

mod source;
mod synthetic;
mod types;

pub use source::FrameSource;
pub use synthetic::SyntheticSource;
pub use types::{ColorEffect, RawFrame, SourceError};
