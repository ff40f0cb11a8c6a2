//! Stairs effect shell
//!
//! The four sweep variants are one effect type parameterized by an
//! [`EffectPlan`]; [`EffectFlavor`] names them for host-side selection.

mod stairs;

pub use stairs::{ApplyOutcome, DEFAULT_SHUTDOWN_DELAY, StairsEffect};

use crate::plan::{EffectPlan, FlowMode, RowOrder};

const EFFECT_NAME_FILL_BOTTOM_TO_TOP: &str = "fill_bottom_to_top";
const EFFECT_NAME_FILL_TOP_TO_BOTTOM: &str = "fill_top_to_bottom";
const EFFECT_NAME_OFF_BOTTOM_TO_TOP: &str = "off_bottom_to_top";
const EFFECT_NAME_OFF_TOP_TO_BOTTOM: &str = "off_top_to_bottom";

const EFFECT_ID_FILL_BOTTOM_TO_TOP: u8 = 0;
const EFFECT_ID_FILL_TOP_TO_BOTTOM: u8 = 1;
const EFFECT_ID_OFF_BOTTOM_TO_TOP: u8 = 2;
const EFFECT_ID_OFF_TOP_TO_BOTTOM: u8 = 3;

/// Known sweep variants that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectFlavor {
    FillBottomToTop = EFFECT_ID_FILL_BOTTOM_TO_TOP,
    FillTopToBottom = EFFECT_ID_FILL_TOP_TO_BOTTOM,
    OffBottomToTop = EFFECT_ID_OFF_BOTTOM_TO_TOP,
    OffTopToBottom = EFFECT_ID_OFF_TOP_TO_BOTTOM,
}

impl EffectFlavor {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FILL_BOTTOM_TO_TOP => Self::FillBottomToTop,
            EFFECT_ID_FILL_TOP_TO_BOTTOM => Self::FillTopToBottom,
            EFFECT_ID_OFF_BOTTOM_TO_TOP => Self::OffBottomToTop,
            EFFECT_ID_OFF_TOP_TO_BOTTOM => Self::OffTopToBottom,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FillBottomToTop => EFFECT_NAME_FILL_BOTTOM_TO_TOP,
            Self::FillTopToBottom => EFFECT_NAME_FILL_TOP_TO_BOTTOM,
            Self::OffBottomToTop => EFFECT_NAME_OFF_BOTTOM_TO_TOP,
            Self::OffTopToBottom => EFFECT_NAME_OFF_TOP_TO_BOTTOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FILL_BOTTOM_TO_TOP => Some(Self::FillBottomToTop),
            EFFECT_NAME_FILL_TOP_TO_BOTTOM => Some(Self::FillTopToBottom),
            EFFECT_NAME_OFF_BOTTOM_TO_TOP => Some(Self::OffBottomToTop),
            EFFECT_NAME_OFF_TOP_TO_BOTTOM => Some(Self::OffTopToBottom),
            _ => None,
        }
    }

    /// Flow and order this variant runs with
    pub const fn plan(self) -> EffectPlan {
        match self {
            Self::FillBottomToTop => EffectPlan::new(FlowMode::Fill, RowOrder::BottomToTop),
            Self::FillTopToBottom => EffectPlan::new(FlowMode::Fill, RowOrder::TopToBottom),
            Self::OffBottomToTop => EffectPlan::new(FlowMode::Off, RowOrder::BottomToTop),
            Self::OffTopToBottom => EffectPlan::new(FlowMode::Off, RowOrder::TopToBottom),
        }
    }

    /// Build the effect for this variant
    pub const fn to_effect<'a, const MAX_ROWS: usize>(self) -> StairsEffect<'a, MAX_ROWS> {
        StairsEffect::new(self.plan())
    }
}
