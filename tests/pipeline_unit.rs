//! Unit tests for the frame-processing pipeline.
//!
//! These tests verify the core per-frame algorithms:
//! - YUV420SP color conversion (saturation, chroma reuse)
//! - Grayscale fallback decoding
//! - Stride-sampled histogram accumulation
//! - Mean / standard deviation reduction

use histoscope::pipeline::convert::{yuv420sp_to_gray, yuv420sp_to_rgb};
use histoscope::pipeline::{BinWeights, Channel, ChannelStats, Histogram};

/// Build a YUV420SP byte buffer from a uniform luma value and one chroma
/// pair replicated over the frame.
fn make_yuv(width: usize, height: usize, y: u8, v: u8, u: u8) -> Vec<u8> {
    let mut data = vec![y; width * height];
    for _ in 0..(width * height / 4) {
        data.push(v);
        data.push(u);
    }
    data
}

fn channels(pixel: u32) -> (u32, u32, u32) {
    ((pixel >> 16) & 0xff, (pixel >> 8) & 0xff, pixel & 0xff)
}

// ==================== Color Conversion Tests ====================

#[test]
fn test_conversion_saturates_on_extreme_inputs() {
    // Sweep extreme luma/chroma corners; every channel must stay in 0..=255
    for &y in &[0u8, 16, 255] {
        for &v in &[0u8, 255] {
            for &u in &[0u8, 255] {
                let yuv = make_yuv(4, 4, y, v, u);
                let mut rgb = vec![0u32; 16];
                yuv420sp_to_rgb(&mut rgb, &yuv, 4, 4);
                for &pixel in &rgb {
                    let (r, g, b) = channels(pixel);
                    assert!(r <= 255 && g <= 255 && b <= 255);
                    assert_eq!(pixel >> 24, 0xff);
                }
            }
        }
    }
}

#[test]
fn test_conversion_peak_luma_neutral_chroma_is_near_white() {
    let yuv = make_yuv(2, 2, 255, 128, 128);
    let mut rgb = vec![0u32; 4];
    yuv420sp_to_rgb(&mut rgb, &yuv, 2, 2);
    // Y'=239, 1192*239 >> 10 = 278 clamps at the 18-bit stage to 255
    let (r, g, b) = channels(rgb[0]);
    assert_eq!((r, g, b), (255, 255, 255));
}

#[test]
fn test_conversion_red_push() {
    // Neutral luma with V maxed pushes red up and green down
    let yuv = make_yuv(2, 2, 128, 255, 128);
    let mut rgb = vec![0u32; 4];
    yuv420sp_to_rgb(&mut rgb, &yuv, 2, 2);
    let (r, g, b) = channels(rgb[0]);
    assert!(r > b, "expected red {} > blue {}", r, b);
    assert!(g < r, "expected green {} < red {}", g, r);
}

#[test]
fn test_grayscale_fallback_equal_channels() {
    // Arbitrary luma and deliberately extreme chroma the fallback ignores
    let mut yuv = vec![0u8, 30, 100, 200, 250, 16, 40, 255];
    yuv.extend([0u8, 255, 255, 0]);
    let mut rgb = vec![0u32; 8];
    yuv420sp_to_gray(&mut rgb, &yuv, 4, 2);
    for &pixel in &rgb {
        let (r, g, b) = channels(pixel);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}

#[test]
fn test_grayscale_bias_correction() {
    let yuv = make_yuv(2, 2, 116, 128, 128);
    let mut rgb = vec![0u32; 4];
    yuv420sp_to_gray(&mut rgb, &yuv, 2, 2);
    assert_eq!(channels(rgb[0]).0, 100); // 116 - 16
}

// ==================== Histogram Tests ====================

#[test]
fn test_histogram_sum_bound() {
    // For any pixel count, total samples equal ceil(n / 3) and never more
    for n in [0usize, 1, 2, 3, 8, 100, 301, 640 * 480] {
        let rgb = vec![0xff_7f_7f_7fu32; n];
        let mut hist = Histogram::new();
        hist.accumulate(&rgb, Channel::Green);
        assert_eq!(hist.sample_count() as usize, n.div_ceil(3));
    }
}

#[test]
fn test_histogram_channel_independence() {
    // Distinct channel values land in distinct bins per pass
    let rgb = vec![0xff_0a_14_1eu32; 3];
    let mut hist = Histogram::new();

    hist.accumulate(&rgb, Channel::Red);
    assert_eq!(hist.bin(0x0a), 1);

    hist.accumulate(&rgb, Channel::Green);
    assert_eq!(hist.bin(0x14), 1);
    assert_eq!(hist.bin(0x0a), 0);

    hist.accumulate(&rgb, Channel::Blue);
    assert_eq!(hist.bin(0x1e), 1);
}

// ==================== Statistics Tests ====================

#[test]
fn test_mean_bounded_for_any_histogram() {
    let weights = BinWeights::new();
    // A handful of synthetic distributions
    let buffers: Vec<Vec<u32>> = vec![
        vec![0xff_00_00_00; 12],
        vec![0xff_ff_ff_ff; 12],
        (0..=255u32).map(|v| 0xff00_0000 | (v << 16) | (v << 8) | v).collect(),
    ];
    for rgb in buffers {
        let mut hist = Histogram::new();
        hist.accumulate(&rgb, Channel::Red);
        let stats = ChannelStats::reduce(&hist, &weights);
        assert!(stats.mean >= 0.0 && stats.mean <= 255.0);
    }
}

#[test]
fn test_variance_radicand_non_negative() {
    let weights = BinWeights::new();
    // Wide spreads, single spikes, and bimodal cases must never produce a
    // negative radicand given exact integer counts
    let buffers: Vec<Vec<u32>> = vec![
        (0..=255u32).map(|v| 0xff00_0000 | (v << 16)).collect(),
        vec![0xff_ff_00_00; 30],
        [vec![0xff_00_00_00u32; 150], vec![0xff_ff_00_00u32; 150]].concat(),
    ];
    for rgb in buffers {
        let mut hist = Histogram::new();
        hist.accumulate(&rgb, Channel::Red);
        let stats = ChannelStats::reduce(&hist, &weights);
        assert!(
            stats.std_dev.is_finite() && stats.std_dev >= 0.0,
            "std_dev {} for {} samples",
            stats.std_dev,
            hist.sample_count()
        );
    }
}

#[test]
fn test_degenerate_histogram_yields_nan() {
    let stats = ChannelStats::reduce(&Histogram::new(), &BinWeights::new());
    assert!(stats.mean.is_nan());
    assert!(stats.std_dev.is_nan());
}
