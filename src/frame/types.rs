//! Frame types and data structures.

use std::fmt;

/// Color-effect mode requested from the frame source at session start.
///
/// Chosen once when the session is built; the pipeline is not reconfigured
/// mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorEffect {
    /// Full-color decode (chroma applied).
    #[default]
    Color,
    /// Monochrome: luma only, replicated into all three channels.
    Mono,
}

/// A raw sensor frame in YUV420SP layout.
///
/// The byte layout is one luma byte per pixel (`width * height` bytes),
/// followed by interleaved V/U chroma pairs at half horizontal and half
/// vertical resolution (`width * height / 2` bytes).
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Raw YUV420SP bytes
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl RawFrame {
    /// Expected byte length of a YUV420SP frame of the given dimensions.
    ///
    /// Only meaningful for even width and height (4:2:0 subsampling).
    pub fn expected_len(width: u32, height: u32) -> usize {
        let pixels = width as usize * height as usize;
        pixels + pixels / 2
    }

    /// Number of pixels in the frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Errors that can occur while acquiring frames.
///
/// Acquisition failure is fatal to the session: there is nothing to process
/// without a source, and retry policy belongs to the source itself.
#[derive(Debug)]
pub enum SourceError {
    /// No frame source is available on the system
    NoFrameSource,
    /// Failed to open the frame source
    OpenFailed(String),
    /// The source stopped delivering frames
    StreamEnded,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NoFrameSource => write!(f, "No frame source available"),
            SourceError::OpenFailed(msg) => write!(f, "Failed to open frame source: {}", msg),
            SourceError::StreamEnded => write!(f, "Frame source stopped delivering frames"),
        }
    }
}

impl std::error::Error for SourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len_640x480() {
        // 640*480 luma + 640*240 chroma
        assert_eq!(RawFrame::expected_len(640, 480), 640 * 480 * 3 / 2);
    }

    #[test]
    fn test_expected_len_4x2() {
        // 8 luma bytes + 4 chroma bytes
        assert_eq!(RawFrame::expected_len(4, 2), 12);
    }

    #[test]
    fn test_pixel_count() {
        let frame = RawFrame {
            data: vec![0; 12],
            width: 4,
            height: 2,
        };
        assert_eq!(frame.pixel_count(), 8);
    }

    #[test]
    fn test_source_error_display() {
        assert_eq!(
            format!("{}", SourceError::NoFrameSource),
            "No frame source available"
        );
        assert_eq!(
            format!("{}", SourceError::OpenFailed("busy".to_string())),
            "Failed to open frame source: busy"
        );
        assert_eq!(
            format!("{}", SourceError::StreamEnded),
            "Frame source stopped delivering frames"
        );
    }

    #[test]
    fn test_color_effect_default() {
        assert_eq!(ColorEffect::default(), ColorEffect::Color);
    }
}
