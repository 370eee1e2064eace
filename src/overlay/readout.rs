//! Numeric readout formatting.
//!
//! The overlay prints per-channel mean and standard deviation to four
//! significant digits, one line each, in the form
//! `Mean (R,G,B): 127.5, 98.30, 45.67`.

use crate::pipeline::ChannelStats;

/// Significant digits in the numeric readout.
pub const READOUT_DIGITS: usize = 4;

/// Format a value to [`READOUT_DIGITS`] significant digits.
///
/// Fixed notation for magnitudes that fit, scientific otherwise; NaN is
/// printed as `NaN` (the degenerate-histogram case).
pub fn format_sig(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value == 0.0 {
        return format!("{:.*}", READOUT_DIGITS - 1, 0.0);
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= READOUT_DIGITS as i32 {
        format!("{:.*e}", READOUT_DIGITS - 1, value)
    } else {
        let decimals = (READOUT_DIGITS as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// The `Mean (R,G,B): ...` readout line.
pub fn mean_line(stats: &[ChannelStats; 3]) -> String {
    format!(
        "Mean (R,G,B): {}, {}, {}",
        format_sig(stats[0].mean),
        format_sig(stats[1].mean),
        format_sig(stats[2].mean)
    )
}

/// The `Std Dev (R,G,B): ...` readout line.
pub fn std_dev_line(stats: &[ChannelStats; 3]) -> String {
    format!(
        "Std Dev (R,G,B): {}, {}, {}",
        format_sig(stats[0].std_dev),
        format_sig(stats[1].std_dev),
        format_sig(stats[2].std_dev)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sig_fixed_range() {
        assert_eq!(format_sig(127.5), "127.5");
        assert_eq!(format_sig(5.0), "5.000");
        assert_eq!(format_sig(255.0), "255.0");
        assert_eq!(format_sig(0.05), "0.05000");
    }

    #[test]
    fn test_format_sig_zero() {
        assert_eq!(format_sig(0.0), "0.000");
    }

    #[test]
    fn test_format_sig_nan() {
        assert_eq!(format_sig(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_sig_large_goes_scientific() {
        assert_eq!(format_sig(12340.0), "1.234e4");
    }

    #[test]
    fn test_mean_line_shape() {
        let stats = [
            ChannelStats {
                mean: 100.0,
                std_dev: 0.0,
            },
            ChannelStats {
                mean: 50.25,
                std_dev: 0.0,
            },
            ChannelStats {
                mean: 0.0,
                std_dev: 0.0,
            },
        ];
        assert_eq!(mean_line(&stats), "Mean (R,G,B): 100.0, 50.25, 0.000");
    }

    #[test]
    fn test_std_dev_line_with_nan() {
        let stats = [ChannelStats {
            mean: f64::NAN,
            std_dev: f64::NAN,
        }; 3];
        assert_eq!(std_dev_line(&stats), "Std Dev (R,G,B): NaN, NaN, NaN");
    }
}
