//! Hue wobble overlay
//!
//! A cosmetic hue oscillation layered over the tracker's brightness
//! output. It only depends on time, row and physical LED index, never on
//! row progress.

use crate::{
    color::{BLACK, Hsv, Rgb, hsv2rgb, rgb2hsv, scale_color},
    config::RuntimeConfig,
    math::{clamp01, sin_deg, smoothstep},
};

/// Value at which the wobble starts ramping in
const WOBBLE_V_MIN: f32 = 0.15;
/// Value at which the wobble reaches full amplitude
const WOBBLE_V_MAX: f32 = 0.60;
/// Phase spread between neighbouring rows, in degrees
const ROW_PHASE_DEG: f32 = 9.5;
/// Phase spread between neighbouring LEDs, in degrees
const LED_PHASE_DEG: f32 = 0.5;
/// Intensity treated as fully on
const FULL_INTENSITY: f32 = 0.999;

/// Base color with its HSV view, computed once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColorState {
    pub rgb: Rgb,
    pub hsv: Hsv,
}

impl BaseColorState {
    pub fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsv: rgb2hsv(rgb),
        }
    }
}

/// Sample the wobbled base color for one LED at `t_sec`.
///
/// Returns the base color untouched when the wobble is disabled or the
/// base color is too dark to carry it.
pub fn wobble_sample(
    base: &BaseColorState,
    config: &RuntimeConfig,
    row: usize,
    phys: usize,
    t_sec: f32,
) -> Rgb {
    if !config.wobble_active() || base.hsv.val <= 0.0 {
        return base.rgb;
    }
    let amp_scale = smoothstep(WOBBLE_V_MIN, WOBBLE_V_MAX, base.hsv.val);
    if amp_scale <= 0.0 {
        return base.rgb;
    }

    let hue_amp = config.wobble_amp_deg * amp_scale;
    #[allow(clippy::cast_precision_loss)]
    let phase = t_sec * config.wobble_freq_deg
        + phys as f32 * LED_PHASE_DEG
        + row as f32 * ROW_PHASE_DEG;

    hsv2rgb(Hsv {
        hue: base.hsv.hue + sin_deg(phase) * hue_amp,
        ..base.hsv
    })
}

/// Final pixel color: base (wobbled if enabled) scaled by `intensity`
pub fn color_with_wobble(
    base: &BaseColorState,
    config: &RuntimeConfig,
    row: usize,
    phys: usize,
    intensity: f32,
    t_sec: f32,
) -> Rgb {
    let intensity = clamp01(intensity);
    if intensity <= 0.0 {
        return BLACK;
    }
    let color = wobble_sample(base, config, row, phys, t_sec);
    if intensity >= FULL_INTENSITY {
        return color;
    }
    scale_color(color, intensity)
}
