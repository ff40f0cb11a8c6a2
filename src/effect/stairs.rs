//! Fill/clear sweep effect bound to a host light
//!
//! Decides when to (re)start the tracker and when a finished clear
//! should switch the load off.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::{BLACK, Rgb},
    config::RuntimeConfig,
    map::LedMap,
    plan::EffectPlan,
    surface::PixelSurface,
    tracker::ProgressTracker,
};

/// Delay between a clear sweep finishing and the power-off request
pub const DEFAULT_SHUTDOWN_DELAY: Duration = Duration::from_millis(50);

/// What the caller should do after [`StairsEffect::apply`]
///
/// In every case the surface holds a frame to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No usable map; every pixel was blanked
    Blanked,
    /// A sweep frame was rendered
    Rendered,
    /// The clear sweep is done; switch the light off after presenting
    PowerOff,
}

/// Stairs sweep effect
#[derive(Debug, Clone)]
pub struct StairsEffect<'a, const MAX_ROWS: usize> {
    plan: EffectPlan,
    tracker: ProgressTracker<'a, MAX_ROWS>,
    shutdown_delay: Duration,
    initialized: bool,
    snake: bool,
    shutdown_at: Option<Instant>,
}

impl<'a, const MAX_ROWS: usize> StairsEffect<'a, MAX_ROWS> {
    pub const fn new(plan: EffectPlan) -> Self {
        Self {
            plan,
            tracker: ProgressTracker::new(),
            shutdown_delay: DEFAULT_SHUTDOWN_DELAY,
            initialized: false,
            snake: false,
            shutdown_at: None,
        }
    }

    /// Set the delay before a finished clear sweep requests power-off
    #[must_use]
    pub fn with_shutdown_delay(mut self, delay: Duration) -> Self {
        self.shutdown_delay = delay;
        self
    }

    pub const fn plan(&self) -> EffectPlan {
        self.plan
    }

    pub const fn tracker(&self) -> &ProgressTracker<'a, MAX_ROWS> {
        &self.tracker
    }

    pub const fn tracker_mut(&mut self) -> &mut ProgressTracker<'a, MAX_ROWS> {
        &mut self.tracker
    }

    /// Re-arm the effect; the next apply rescans the strip and restarts
    pub fn start(&mut self) {
        self.initialized = false;
        self.shutdown_at = None;
    }

    /// Render one frame of the effect
    pub fn apply<S: PixelSurface + ?Sized>(
        &mut self,
        map: Option<LedMap<'a>>,
        surface: &mut S,
        config: &RuntimeConfig,
        color: Rgb,
        now: Instant,
    ) -> ApplyOutcome {
        let Some(map) = map.filter(|map| !map.is_empty()) else {
            surface.fill(BLACK);
            return ApplyOutcome::Blanked;
        };

        self.tracker.bind_map(map);
        if !self.initialized || config.snake != self.snake {
            #[cfg(feature = "esp32-log")]
            println!(
                "[StairsEffect.apply] restarting {:?} (snake {})",
                self.plan, config.snake
            );
            // Resume from whatever the strip shows right now
            self.tracker.sync_from_strip(&*surface, config.snake);
            self.tracker.start_effect(self.plan, true);
            self.snake = config.snake;
            self.initialized = true;
            self.shutdown_at = None;
        }

        self.tracker.render_frame(surface, config, color, now);

        if !self.plan.is_off() {
            return ApplyOutcome::Rendered;
        }
        if !self.tracker.finished() {
            self.shutdown_at = None;
            return ApplyOutcome::Rendered;
        }

        match self.shutdown_at {
            None => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[StairsEffect.apply] clear finished, power-off in {}ms",
                    self.shutdown_delay.as_millis()
                );
                self.shutdown_at = Some(now + self.shutdown_delay);
                ApplyOutcome::Rendered
            }
            Some(deadline) if now >= deadline => {
                self.shutdown_at = None;
                ApplyOutcome::PowerOff
            }
            Some(_) => ApplyOutcome::Rendered,
        }
    }
}
