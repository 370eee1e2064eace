//! Per-channel intensity histogram accumulation.

/// Number of intensity bins (one per 8-bit level).
pub const BIN_COUNT: usize = 256;

/// Stride through the pixel array while sampling.
///
/// The reference implementation advances 3 pixel slots per sample, so the
/// histogram is built from roughly every third pixel in linear buffer
/// order rather than the full population. Preserved as-is for behavioral
/// fidelity; see DESIGN.md.
pub const SAMPLE_STRIDE: usize = 3;

/// Color channel selector for histogram accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, in the order they are processed each frame.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Bit offset of this channel inside a packed `0xAARRGGBB` pixel.
    pub fn shift(self) -> u32 {
        match self {
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    /// Index of this channel in per-channel arrays.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// A 256-bin count distribution for one color channel.
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: [u32; BIN_COUNT],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// An all-zero histogram.
    pub fn new() -> Self {
        Self {
            bins: [0; BIN_COUNT],
        }
    }

    /// Rebuild this histogram from the packed RGB buffer.
    ///
    /// Zeroes every bin, then samples the buffer at [`SAMPLE_STRIDE`]
    /// intervals, binning the 8-bit value of the selected channel.
    pub fn accumulate(&mut self, rgb: &[u32], channel: Channel) {
        self.bins = [0; BIN_COUNT];

        let shift = channel.shift();
        let mut pix = 0;
        while pix < rgb.len() {
            let value = ((rgb[pix] >> shift) & 0xff) as usize;
            self.bins[value] += 1;
            pix += SAMPLE_STRIDE;
        }
    }

    /// Bin counts, indexed by intensity level.
    pub fn bins(&self) -> &[u32; BIN_COUNT] {
        &self.bins
    }

    /// Count in a single bin.
    pub fn bin(&self, level: u8) -> u32 {
        self.bins[level as usize]
    }

    /// Total number of samples counted.
    pub fn sample_count(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// How many samples a stride-3 scan takes from `pixel_count` pixels.
    pub fn samples_for(pixel_count: usize) -> usize {
        pixel_count.div_ceil(SAMPLE_STRIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_shifts() {
        let pixel: u32 = 0xff_12_34_56;
        assert_eq!((pixel >> Channel::Red.shift()) & 0xff, 0x12);
        assert_eq!((pixel >> Channel::Green.shift()) & 0xff, 0x34);
        assert_eq!((pixel >> Channel::Blue.shift()) & 0xff, 0x56);
    }

    #[test]
    fn test_accumulate_uniform_buffer() {
        // 9 identical pixels, stride 3 => 3 samples in one bin
        let rgb = [0xff_80_40_20u32; 9];
        let mut hist = Histogram::new();
        hist.accumulate(&rgb, Channel::Red);
        assert_eq!(hist.bin(0x80), 3);
        assert_eq!(hist.sample_count(), 3);
    }

    #[test]
    fn test_accumulate_resets_previous_counts() {
        let mut hist = Histogram::new();
        hist.accumulate(&[0xff_ff_ff_ffu32; 6], Channel::Blue);
        assert_eq!(hist.bin(255), 2);
        hist.accumulate(&[0xff_00_00_00u32; 6], Channel::Blue);
        assert_eq!(hist.bin(255), 0);
        assert_eq!(hist.bin(0), 2);
    }

    #[test]
    fn test_stride_skips_intermediate_pixels() {
        // Only indices 0 and 3 are sampled
        let rgb = [
            0xff_01_00_00u32,
            0xff_02_00_00,
            0xff_03_00_00,
            0xff_04_00_00,
            0xff_05_00_00,
        ];
        let mut hist = Histogram::new();
        hist.accumulate(&rgb, Channel::Red);
        assert_eq!(hist.bin(1), 1);
        assert_eq!(hist.bin(4), 1);
        assert_eq!(hist.bin(2), 0);
        assert_eq!(hist.bin(3), 0);
        assert_eq!(hist.bin(5), 0);
    }

    #[test]
    fn test_sample_count_matches_ceiling() {
        for n in 0..32usize {
            let rgb = vec![0xff_00_00_00u32; n];
            let mut hist = Histogram::new();
            hist.accumulate(&rgb, Channel::Green);
            assert_eq!(hist.sample_count() as usize, Histogram::samples_for(n));
        }
    }

    #[test]
    fn test_empty_buffer_yields_empty_histogram() {
        let mut hist = Histogram::new();
        hist.accumulate(&[], Channel::Red);
        assert_eq!(hist.sample_count(), 0);
    }
}
