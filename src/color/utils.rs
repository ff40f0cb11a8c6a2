use crate::{color::Rgb, math::clamp01};

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Brightest channel of a color
#[inline]
pub fn peak(color: Rgb) -> u8 {
    color.r.max(color.g).max(color.b)
}

/// Scale every channel by `factor`, rounding to the nearest channel value.
///
/// The factor is clamped to `0.0..=1.0`, so the hue is preserved.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    let factor = clamp01(factor);
    let apply = |channel: u8| -> u8 {
        libm::roundf(f32::from(channel) * factor).clamp(0.0, 255.0) as u8
    };
    Rgb {
        r: apply(color.r),
        g: apply(color.g),
        b: apply(color.b),
    }
}
