//! Floating point HSV used for hue math.
//!
//! `Rgb` stays the surface representation; `Hsv` is only ever derived from
//! it for a single frame and converted back before anything is written.

use crate::{color::Rgb, math::clamp01};

/// HSV color with hue in degrees (`0.0..360.0`), saturation and value
/// in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: f32,
    pub sat: f32,
    pub val: f32,
}

/// Convert RGB to HSV using the max/min/delta formulas.
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    #[allow(clippy::float_cmp)]
    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * libm::fmodf((g - b) / delta, 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let sat = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue,
        sat,
        val: max,
    }
}

/// Convert HSV back to RGB.
///
/// Hue wraps into `0.0..360.0`; saturation and value are clamped.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let mut hue = libm::fmodf(hsv.hue, 360.0);
    if hue < 0.0 {
        hue += 360.0;
    }
    let sat = clamp01(hsv.sat);
    let val = clamp01(hsv.val);

    let c = val * sat;
    let x = c * (1.0 - libm::fabsf(libm::fmodf(hue / 60.0, 2.0) - 1.0));
    let m = val - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |v: f32| libm::roundf((v + m) * 255.0).clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}
