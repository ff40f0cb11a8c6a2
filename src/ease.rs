//! Easing curves for the partially lit LED at a row's boundary

const EASE_NAME_LINEAR: &str = "Linear";
const EASE_NAME_CUBIC_IN_OUT: &str = "Cubic InOut";
const EASE_NAME_QUINT_IN_OUT: &str = "Quint InOut";

/// Easing profile applied to the fractional boundary LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EaseProfile {
    Linear,
    #[default]
    CubicInOut,
    QuintInOut,
}

impl EaseProfile {
    /// Map `t` through the curve. `t` is clamped to `0.0..=1.0` first.
    pub fn apply(self, t: f32) -> f32 {
        apply_ease(self, t)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => EASE_NAME_LINEAR,
            Self::CubicInOut => EASE_NAME_CUBIC_IN_OUT,
            Self::QuintInOut => EASE_NAME_QUINT_IN_OUT,
        }
    }

    /// Parse the option label used by host select controls
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EASE_NAME_LINEAR => Some(Self::Linear),
            EASE_NAME_CUBIC_IN_OUT => Some(Self::CubicInOut),
            EASE_NAME_QUINT_IN_OUT => Some(Self::QuintInOut),
            _ => None,
        }
    }
}

/// Symmetric in-out power curve: `t < 0.5 ? k·t^n : 1 - (-2t + 2)^n / 2`
#[inline]
fn in_out_pow(t: f32, n: f32) -> f32 {
    if t < 0.5 {
        // k = 2^(n-1) keeps both halves meeting at 0.5
        libm::powf(2.0, n - 1.0) * libm::powf(t, n)
    } else {
        1.0 - libm::powf(-2.0 * t + 2.0, n) / 2.0
    }
}

/// Apply an easing profile to a `0.0..=1.0` progress value
pub fn apply_ease(ease: EaseProfile, t: f32) -> f32 {
    let t = crate::math::clamp01(t);
    match ease {
        EaseProfile::Linear => t,
        EaseProfile::CubicInOut => in_out_pow(t, 3.0),
        EaseProfile::QuintInOut => in_out_pow(t, 5.0),
    }
}
