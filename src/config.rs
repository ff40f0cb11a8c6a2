//! Per-frame runtime configuration
//!
//! The host owns the controls; it hands over fresh values every frame.

use crate::ease::EaseProfile;

const DEFAULT_PER_LED_MS: u32 = 24;
const DEFAULT_FADE_STEPS: u16 = 1;
const DEFAULT_ROW_THRESHOLD: f32 = 0.2;
const DEFAULT_WOBBLE_FREQ_DEG: f32 = 12.0;

/// Knobs read by the tracker on every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeConfig {
    /// Time budget for one LED to fully change state
    pub per_led_ms: u32,
    /// Number of sub-steps per LED
    pub fade_steps: u16,
    /// Fraction of a row that must be done before its neighbor unlocks
    pub row_threshold: f32,
    /// Zig-zag wiring: odd rows run in reverse
    pub snake: bool,
    /// Curve for the partially lit boundary LED
    pub ease: EaseProfile,
    pub wobble_enabled: bool,
    /// Hue swing in degrees
    pub wobble_amp_deg: f32,
    /// Phase speed in degrees per second
    pub wobble_freq_deg: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            per_led_ms: DEFAULT_PER_LED_MS,
            fade_steps: DEFAULT_FADE_STEPS,
            row_threshold: DEFAULT_ROW_THRESHOLD,
            snake: false,
            ease: EaseProfile::default(),
            wobble_enabled: false,
            wobble_amp_deg: 0.0,
            wobble_freq_deg: DEFAULT_WOBBLE_FREQ_DEG,
        }
    }
}

/// Raw control readings as exposed by the host
///
/// Every control is optional; a missing control keeps the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlValues<'a> {
    pub per_led_ms: Option<f32>,
    pub fade_steps: Option<f32>,
    pub row_threshold: Option<f32>,
    pub snake: Option<bool>,
    pub wobble_enabled: Option<bool>,
    pub wobble_strength: Option<f32>,
    pub wobble_frequency: Option<f32>,
    /// Label of the easing select
    pub easing: Option<&'a str>,
}

impl RuntimeConfig {
    /// Build a config from control readings, clamping each to a safe range
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_controls(controls: &ControlValues<'_>) -> Self {
        let mut config = Self::default();

        if let Some(per_led) = controls.per_led_ms {
            config.per_led_ms = per_led.max(1.0) as u32;
        }
        if let Some(steps) = controls.fade_steps {
            config.fade_steps = (steps as i32).clamp(1, i32::from(u16::MAX)) as u16;
        }
        if let Some(threshold) = controls.row_threshold {
            config.row_threshold = threshold.clamp(0.0, 1.0);
        }
        config.snake = controls.snake.unwrap_or(false);
        config.wobble_enabled = controls.wobble_enabled.unwrap_or(false);
        if let Some(strength) = controls.wobble_strength {
            config.wobble_amp_deg = strength;
        }
        if let Some(frequency) = controls.wobble_frequency {
            config.wobble_freq_deg = frequency;
        }
        if let Some(label) = controls.easing {
            config.ease = EaseProfile::parse_from_str(label).unwrap_or_default();
        }

        config
    }

    /// Whether the wobble overlay should run at all
    pub fn wobble_active(&self) -> bool {
        self.wobble_enabled && self.wobble_amp_deg > 0.0 && self.wobble_freq_deg != 0.0
    }
}
