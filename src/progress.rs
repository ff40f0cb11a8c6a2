//! Per-row progress state and the timing/unlock rules

use crate::{math::clamp01, plan::FlowMode};

/// Tolerance used when comparing fractional lit counts
pub const EPSILON: f32 = 0.0001;

/// Smallest sub-step interval in milliseconds
pub const MIN_STEP_MS: u32 = 2;

/// Animation state of one row
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowProgress {
    pub(crate) row_len: usize,
    pub(crate) lit_count: f32,
    pub(crate) substep_acc: f32,
    pub(crate) active: bool,
    pub(crate) finished: bool,
}

impl RowProgress {
    /// Number of LEDs in the row
    pub const fn row_len(&self) -> usize {
        self.row_len
    }

    /// Fractional count of lit LEDs from the row's logical start
    pub const fn lit_count(&self) -> f32 {
        self.lit_count
    }

    /// Leftover sub-step time in milliseconds
    pub const fn substep_acc(&self) -> f32 {
        self.substep_acc
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Full LEDs, i.e. `floor(lit_count + EPSILON)`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lit_whole(&self) -> usize {
        let whole = libm::floorf(self.lit_count + EPSILON).max(0.0) as usize;
        whole.min(self.row_len)
    }

    /// Row length as a float upper bound for the lit count
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn len_f32(&self) -> f32 {
        self.row_len as f32
    }

    /// Clamp the lit count into `0..=row_len`
    pub(crate) fn clamp_lit(&mut self) {
        self.lit_count = self.lit_count.clamp(0.0, self.len_f32());
    }

    /// Whether the row sits at the rest state of `flow`
    pub(crate) fn is_complete(&self, flow: FlowMode) -> bool {
        if self.row_len == 0 {
            return true;
        }
        match flow {
            FlowMode::Fill => self.lit_count >= self.len_f32() - EPSILON,
            FlowMode::Off => self.lit_count <= EPSILON,
        }
    }

    /// Move the lit count by one sub-step in the direction of `flow`
    ///
    /// Returns `true` when the row reached its bound; the row is then
    /// snapped to the bound and deactivated.
    pub(crate) fn step(&mut self, flow: FlowMode, substep: f32) -> bool {
        match flow {
            FlowMode::Fill => self.lit_count += substep,
            FlowMode::Off => self.lit_count -= substep,
        }
        if !self.is_complete(flow) {
            return false;
        }
        self.lit_count = match flow {
            FlowMode::Fill => self.len_f32(),
            FlowMode::Off => 0.0,
        };
        self.finished = true;
        self.active = false;
        self.substep_acc = 0.0;
        true
    }
}

/// Sub-step interval for a per-LED budget split into `fade_steps`
///
/// `fade_steps == 0` counts as 1 and the result never drops below
/// [`MIN_STEP_MS`].
pub const fn compute_step_ms(per_led_ms: u32, fade_steps: u16) -> u32 {
    let steps = if fade_steps == 0 { 1 } else { fade_steps as u32 };
    let step = per_led_ms / steps;
    if step < MIN_STEP_MS { MIN_STEP_MS } else { step }
}

/// Add `dt_ms` to an accumulator and count how many whole steps fit.
///
/// Each consumed step is subtracted, so the fractional carry survives.
/// `dt_ms` is capped to two steps.
pub fn advance_substeps(acc_ms: &mut f32, step_ms: u32, dt_ms: u32) -> u32 {
    if step_ms == 0 {
        return 0;
    }
    let dt = dt_ms.min(step_ms.saturating_mul(2));
    #[allow(clippy::cast_precision_loss)]
    let (dt, step) = (dt as f32, step_ms as f32);
    *acc_ms += dt;
    let mut steps = 0;
    while *acc_ms >= step {
        *acc_ms -= step;
        steps += 1;
    }
    steps
}

/// Decide whether a row has progressed far enough to unlock its neighbor.
///
/// The gate is `ceil(threshold · len)` LEDs. Fill counts lit LEDs against
/// it, clear counts cleared ones (`len - progress`).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn should_unlock(len: usize, progress: usize, threshold: f32, off_mode: bool) -> bool {
    if len == 0 {
        return false;
    }
    let gate = libm::ceilf(clamp01(threshold) * len as f32).max(0.0) as usize;
    if off_mode {
        len.saturating_sub(progress) >= gate
    } else {
        progress >= gate
    }
}

/// Unlock check for the fill direction
pub fn should_unlock_on(len: usize, progress: usize, threshold: f32) -> bool {
    should_unlock(len, progress, threshold, false)
}

/// Unlock check for the clear direction
pub fn should_unlock_off(len: usize, progress: usize, threshold: f32) -> bool {
    should_unlock(len, progress, threshold, true)
}
