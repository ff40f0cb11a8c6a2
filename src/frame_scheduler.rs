//! Frame scheduling and timing utilities.
//!
//! Drives a [`StairsEffect`] at a fixed frame rate without async/await or
//! platform-specific timers. The caller is responsible for sleeping
//! between frames.

use embassy_time::{Duration, Instant};

use crate::{
    OutputDriver,
    color::Rgb,
    config::RuntimeConfig,
    effect::{ApplyOutcome, StairsEffect},
    map::LedMap,
};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the effect asked for on this frame.
    pub outcome: ApplyOutcome,
}

/// Portable frame scheduler that owns the strip buffer.
///
/// The buffer persists between frames, so a restarted effect can resume
/// from what the strip currently shows.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(effect, driver);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = scheduler.tick(Some(map), &config, color, now);
///     if result.outcome == ApplyOutcome::PowerOff {
///         turn_light_off();
///     }
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const MAX_ROWS: usize> {
    output: O,
    effect: StairsEffect<'a, MAX_ROWS>,
    frame_buffer: [Rgb; MAX_LEDS],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const MAX_ROWS: usize>
    FrameScheduler<'a, O, MAX_LEDS, MAX_ROWS>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(effect: StairsEffect<'a, MAX_ROWS>, driver: O) -> Self {
        Self::with_frame_duration(effect, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        effect: StairsEffect<'a, MAX_ROWS>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            effect,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Applies the effect to the strip buffer
    /// 3. Writes the buffer to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(
        &mut self,
        map: Option<LedMap<'a>>,
        config: &RuntimeConfig,
        color: Rgb,
        now: Instant,
    ) -> FrameResult {
        // Skip the backlog after a stall instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let outcome = self
            .effect
            .apply(map, &mut self.frame_buffer, config, color, now);
        self.output.write(&self.frame_buffer);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            outcome,
        }
    }

    /// Swap in another effect, e.g. when the host selects a new variant.
    ///
    /// The strip buffer is kept so the new effect resumes from it.
    pub fn set_effect(&mut self, mut effect: StairsEffect<'a, MAX_ROWS>) {
        effect.start();
        self.effect = effect;
    }

    pub fn effect(&self) -> &StairsEffect<'a, MAX_ROWS> {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut StairsEffect<'a, MAX_ROWS> {
        &mut self.effect
    }

    /// Last frame written to the output
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Mutable access to the strip buffer, e.g. to seed it on boot
    pub fn frame_mut(&mut self) -> &mut [Rgb] {
        &mut self.frame_buffer
    }
}
