/// Direction of the LED state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowMode {
    /// LEDs turn on in sequence
    #[default]
    Fill,
    /// LEDs turn off in sequence
    Off,
}

/// Which end of the row sequence starts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Row 0 first
    #[default]
    BottomToTop,
    /// Last row first
    TopToBottom,
}

/// Plan of a running effect, fixed for the life of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectPlan {
    pub flow: FlowMode,
    pub order: RowOrder,
}

impl EffectPlan {
    pub const fn new(flow: FlowMode, order: RowOrder) -> Self {
        Self { flow, order }
    }

    pub const fn is_off(self) -> bool {
        matches!(self.flow, FlowMode::Off)
    }

    pub const fn from_top(self) -> bool {
        matches!(self.order, RowOrder::TopToBottom)
    }
}
