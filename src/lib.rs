#![no_std]

pub mod color;
pub mod config;
pub mod ease;
pub mod effect;
pub mod frame_scheduler;
pub mod map;
pub mod math;
pub mod plan;
pub mod progress;
pub mod surface;
pub mod tracker;
pub mod wobble;

pub use config::{ControlValues, RuntimeConfig};
pub use ease::EaseProfile;
pub use effect::{ApplyOutcome, EffectFlavor, StairsEffect};
pub use frame_scheduler::FrameScheduler;
pub use map::LedMap;
pub use plan::{EffectPlan, FlowMode, RowOrder};
pub use progress::RowProgress;
pub use surface::PixelSurface;
pub use tracker::{ProgressTracker, ResumeSnapshot};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
