//! YUV420SP to packed RGB conversion.
//!
//! Integer fixed-point decode of the semi-planar 4:2:0 layout: a full
//! luma plane followed by interleaved V/U pairs at half resolution in both
//! directions. The transform uses the classic coefficients
//!
//! ```text
//! R = 1192*Y' + 1634*V'
//! G = 1192*Y' -  833*V' - 400*U'
//! B = 1192*Y' + 2066*U'
//! ```
//!
//! with Y' = max(Y - 16, 0) and U'/V' = U/V - 128, each channel clamped to
//! 0..=262143 (18 bits) and then taken down to 8 bits. All arithmetic is
//! saturating; the decode never fails.

/// Fully opaque alpha byte in the packed output.
const ALPHA_OPAQUE: u32 = 0xff00_0000;

/// Upper clamp for the 18-bit intermediate channel values.
const CHANNEL_MAX: i32 = 262_143;

/// Decode a YUV420SP frame into packed `0xAARRGGBB` pixels.
///
/// `rgb` must hold exactly `width * height` elements and `yuv` at least
/// `width * height * 3 / 2` bytes; the caller validates lengths before
/// dispatching here.
///
/// Width and height must be even (4:2:0 subsampling); odd dimensions are a
/// precondition violation and are not defended against.
pub fn yuv420sp_to_rgb(rgb: &mut [u32], yuv: &[u8], width: usize, height: usize) {
    let frame_size = width * height;

    for j in 0..height {
        // Chroma row advances every 2 luma rows
        let mut uvp = frame_size + (j >> 1) * width;
        let mut u: i32 = 0;
        let mut v: i32 = 0;

        for i in 0..width {
            let yp = j * width + i;
            let y = (yuv[yp] as i32 - 16).max(0);

            // One V/U pair per 2x1 luma block, reused across the block
            if i & 1 == 0 {
                v = yuv[uvp] as i32 - 128;
                u = yuv[uvp + 1] as i32 - 128;
                uvp += 2;
            }

            let y1192 = 1192 * y;
            let r = (y1192 + 1634 * v).clamp(0, CHANNEL_MAX) as u32;
            let g = (y1192 - 833 * v - 400 * u).clamp(0, CHANNEL_MAX) as u32;
            let b = (y1192 + 2066 * u).clamp(0, CHANNEL_MAX) as u32;

            rgb[yp] = ALPHA_OPAQUE | ((r >> 10) << 16) | ((g >> 10) << 8) | (b >> 10);
        }
    }
}

/// Decode only the luma plane, replicating each sample into R, G and B.
///
/// Fallback for when chroma is unavailable or irrelevant (mono effect).
pub fn yuv420sp_to_gray(rgb: &mut [u32], yuv: &[u8], width: usize, height: usize) {
    let frame_size = width * height;

    for pix in 0..frame_size {
        let v = (yuv[pix] as i32 - 16).clamp(0, 255) as u32;
        rgb[pix] = ALPHA_OPAQUE | (v << 16) | (v << 8) | v;
    }
}
