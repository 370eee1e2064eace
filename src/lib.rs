//! histoscope library crate.
//!
//! Real-time camera-preview histogram overlay: decodes raw YUV420SP frames
//! into packed RGB pixels, accumulates per-channel intensity histograms,
//! derives mean and standard deviation, and publishes the results for a
//! renderer to draw as a live bar-chart overlay.

pub mod cli;
pub mod config;
pub mod frame;
pub mod overlay;
pub mod pipeline;
