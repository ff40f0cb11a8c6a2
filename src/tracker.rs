//! Row progress tracker
//!
//! Owns the per-row progress collection, advances the fill/clear sweep
//! from elapsed time, unlocks neighbouring rows and paints the mapped LEDs.

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::Rgb,
    config::RuntimeConfig,
    ease::apply_ease,
    map::{LedMap, row_len, row_phys_at, scan_resume_row_prefix},
    math::clamp01,
    plan::{EffectPlan, FlowMode, RowOrder},
    progress::{RowProgress, advance_substeps, compute_step_ms, should_unlock},
    surface::PixelSurface,
    wobble::{BaseColorState, color_with_wobble},
};

/// Per-row lit counts captured from a tracker
///
/// One entry per row, no header. Loading a snapshot of a different length
/// only touches the common prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeSnapshot<const N: usize> {
    lit_rows: Vec<f32, N>,
}

impl<const N: usize> ResumeSnapshot<N> {
    pub const fn new() -> Self {
        Self {
            lit_rows: Vec::new(),
        }
    }

    /// Build a snapshot from raw values, dropping whatever exceeds `N`
    pub fn from_slice(values: &[f32]) -> Self {
        let mut lit_rows = Vec::new();
        for &value in values.iter().take(N) {
            let _ = lit_rows.push(value);
        }
        Self { lit_rows }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.lit_rows
    }

    pub fn len(&self) -> usize {
        self.lit_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lit_rows.is_empty()
    }
}

/// Frame-driven progress tracker over a borrowed LED map
///
/// `MAX_ROWS` bounds the row collection. Rows of the map past it are
/// neither animated nor painted, and [`Self::finished`] only covers the
/// tracked rows.
#[derive(Debug, Clone)]
pub struct ProgressTracker<'a, const MAX_ROWS: usize> {
    map: Option<LedMap<'a>>,
    plan: EffectPlan,
    rows: Vec<RowProgress, MAX_ROWS>,
    finished: bool,
    first_frame: bool,
    last_frame: Instant,
}

impl<const MAX_ROWS: usize> Default for ProgressTracker<'_, MAX_ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const MAX_ROWS: usize> ProgressTracker<'a, MAX_ROWS> {
    /// Create an idle tracker with no map bound
    pub const fn new() -> Self {
        Self {
            map: None,
            plan: EffectPlan::new(FlowMode::Fill, RowOrder::BottomToTop),
            rows: Vec::new(),
            finished: true,
            first_frame: true,
            last_frame: Instant::from_millis(0),
        }
    }

    /// Attach or replace the LED map
    ///
    /// Safe to call every frame; row lengths are re-derived each time.
    pub fn bind_map(&mut self, map: LedMap<'a>) {
        self.map = Some(map);
        self.ensure_row_cache();
        self.refresh_row_lengths();
    }

    pub const fn map(&self) -> Option<LedMap<'a>> {
        self.map
    }

    /// Whether all tracked rows are finished (or there is nothing to animate)
    pub const fn finished(&self) -> bool {
        self.finished
    }

    pub const fn plan(&self) -> EffectPlan {
        self.plan
    }

    pub fn rows(&self) -> &[RowProgress] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&RowProgress> {
        self.rows.get(idx)
    }

    /// Stop every row.
    ///
    /// Lit counts drop to zero when `clear_resume` is set or the plan
    /// fills; with `clear_resume` a clearing plan restarts from full rows.
    pub fn reset(&mut self, clear_resume: bool) {
        self.finished = true;
        self.first_frame = true;
        self.last_frame = Instant::from_millis(0);
        if self.map.is_none() {
            self.rows.clear();
            return;
        }
        self.ensure_row_cache();
        self.refresh_row_lengths();

        let flow = self.plan.flow;
        for row in &mut self.rows {
            row.active = false;
            row.substep_acc = 0.0;
            if clear_resume || flow == FlowMode::Fill {
                row.lit_count = 0.0;
            }
            if clear_resume && flow == FlowMode::Off {
                row.lit_count = row.len_f32();
            }
            row.finished = row.row_len == 0;
        }
    }

    /// Re-derive lit counts from what the surface currently shows
    #[allow(clippy::cast_precision_loss)]
    pub fn sync_from_strip<S: PixelSurface + ?Sized>(&mut self, surface: &S, snake: bool) {
        let Some(map) = self.map else {
            return;
        };
        self.ensure_row_cache();
        self.refresh_row_lengths();

        for (idx, row) in self.rows.iter_mut().enumerate() {
            row.lit_count = scan_resume_row_prefix(surface, map, idx, snake) as f32;
            row.active = false;
            row.substep_acc = 0.0;
            row.finished = row.is_complete(FlowMode::Fill);
        }
    }

    /// Restore lit counts from a snapshot, clamped to current row lengths
    pub fn load_snapshot<const N: usize>(&mut self, snapshot: &ResumeSnapshot<N>) {
        if self.map.is_none() {
            return;
        }
        self.ensure_row_cache();
        self.refresh_row_lengths();

        for (row, &value) in self.rows.iter_mut().zip(snapshot.as_slice()) {
            let value = if value.is_nan() { 0.0 } else { value };
            row.lit_count = value;
            row.clamp_lit();
            row.active = false;
            row.substep_acc = 0.0;
            row.finished = row.is_complete(FlowMode::Fill);
        }
    }

    /// Capture the current lit count of every row
    pub fn snapshot(&self) -> ResumeSnapshot<MAX_ROWS> {
        ResumeSnapshot {
            lit_rows: self.rows.iter().map(RowProgress::lit_count).collect(),
        }
    }

    /// Start a new run of `plan`.
    ///
    /// Without `resume` every row starts from the plan's rest state; with
    /// it the current lit counts are kept.
    pub fn start_effect(&mut self, plan: EffectPlan, resume: bool) {
        self.plan = plan;
        self.finished = false;
        self.first_frame = true;
        self.last_frame = Instant::from_millis(0);
        if self.map.is_none() {
            self.rows.clear();
            self.finished = true;
            return;
        }
        self.ensure_row_cache();
        self.refresh_row_lengths();

        for row in &mut self.rows {
            row.active = false;
            row.substep_acc = 0.0;
            if !resume {
                row.lit_count = match plan.flow {
                    FlowMode::Fill => 0.0,
                    FlowMode::Off => row.len_f32(),
                };
            }
            row.finished = row.is_complete(plan.flow);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[ProgressTracker.start_effect] plan {:?}, resume {}, rows {}",
            plan,
            resume,
            self.rows.len()
        );

        self.ensure_active_row();
        self.update_finished_flag();
    }

    /// Advance the sweep by the time elapsed since the previous frame and
    /// repaint every mapped LED.
    ///
    /// Returns `false` when nothing was rendered: no map, or an empty one.
    pub fn render_frame<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &RuntimeConfig,
        base_color: Rgb,
        now: Instant,
    ) -> bool {
        let Some(map) = self.map else {
            return false;
        };
        self.ensure_row_cache();
        self.refresh_row_lengths();
        if self.rows.is_empty() {
            return false;
        }
        self.ensure_active_row();

        if self.first_frame {
            self.first_frame = false;
            self.last_frame = now;
        }
        let elapsed = now.saturating_duration_since(self.last_frame).as_millis();
        self.last_frame = now;

        let step_ms = compute_step_ms(config.per_led_ms, config.fade_steps);
        let dt_ms = u32::try_from(elapsed)
            .unwrap_or(u32::MAX)
            .min(step_ms.saturating_mul(2));

        let base = BaseColorState::new(base_color);
        #[allow(clippy::cast_precision_loss)]
        let t_sec = now.as_millis() as f32 / 1000.0;

        for idx in 0..self.rows.len() {
            self.advance_row(idx, config, step_ms, dt_ms);
            self.paint_row(map, idx, surface, config, &base, t_sec);
        }

        self.update_finished_flag();
        true
    }

    /// Progress one row and unlock its neighbour if it went far enough
    fn advance_row(&mut self, idx: usize, config: &RuntimeConfig, step_ms: u32, dt_ms: u32) {
        let flow = self.plan.flow;
        let substep = 1.0 / f32::from(config.fade_steps.max(1));

        let row = &mut self.rows[idx];
        if row.row_len == 0 {
            row.finished = true;
            row.active = false;
            return;
        }
        if !row.active || row.finished {
            return;
        }

        let steps = advance_substeps(&mut row.substep_acc, step_ms, dt_ms);
        for _ in 0..steps {
            if row.step(flow, substep) {
                break;
            }
        }
        if !row.active || row.finished {
            return;
        }

        let unlock = should_unlock(
            row.row_len,
            row.lit_whole(),
            config.row_threshold,
            self.plan.is_off(),
        );
        if unlock {
            if let Some(next) = self.neighbor_row(idx) {
                self.activate_row(next);
            }
        }
    }

    /// Write the current state of one row into the surface
    #[allow(clippy::cast_precision_loss)]
    fn paint_row<S: PixelSurface + ?Sized>(
        &self,
        map: LedMap<'_>,
        idx: usize,
        surface: &mut S,
        config: &RuntimeConfig,
        base: &BaseColorState,
        t_sec: f32,
    ) {
        let row = &self.rows[idx];
        let full = row.lit_whole();
        let frac = clamp01(row.lit_count - full as f32);

        for i in 0..row.row_len {
            let Some(phys) = row_phys_at(map, idx, i, config.snake) else {
                continue;
            };
            if phys >= surface.len() {
                continue;
            }
            let intensity = if i < full {
                1.0
            } else if i == full {
                apply_ease(config.ease, frac)
            } else {
                0.0
            };
            surface.set(
                phys,
                color_with_wobble(base, config, idx, phys, intensity, t_sec),
            );
        }
    }

    /// Make the row collection match the bound map's row count
    fn ensure_row_cache(&mut self) {
        let Some(map) = self.map else {
            self.rows.clear();
            return;
        };
        let rows = map.rows().min(MAX_ROWS);
        if self.rows.len() == rows {
            return;
        }

        if map.rows() > MAX_ROWS {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ProgressTracker.ensure_row_cache] map has {} rows, tracking {}",
                map.rows(),
                MAX_ROWS
            );
        }

        // `rows` never exceeds the capacity
        let _ = self.rows.resize_default(rows);
    }

    /// Re-read row lengths from the map and clamp lit counts to them
    ///
    /// A row whose length changed gets its finished flag re-derived, so a
    /// grown row resumes animating and a shrunk one may complete.
    fn refresh_row_lengths(&mut self) {
        let Some(map) = self.map else {
            return;
        };
        let flow = self.plan.flow;
        for (idx, row) in self.rows.iter_mut().enumerate() {
            let len = row_len(map, idx);
            if len == row.row_len {
                row.clamp_lit();
                continue;
            }
            row.row_len = len;
            row.clamp_lit();
            row.finished = row.is_complete(flow);
            if row.finished {
                row.active = false;
                row.substep_acc = 0.0;
            }
        }
    }

    /// Activate the first unfinished row if no row is animating
    fn ensure_active_row(&mut self) {
        if self.rows.iter().any(|row| row.active && !row.finished) {
            return;
        }
        if let Some(idx) = self.first_available_row() {
            self.rows[idx].active = true;
        }
    }

    /// First unfinished row, counted from the plan's starting end
    fn first_available_row(&self) -> Option<usize> {
        if self.plan.from_top() {
            self.rows.iter().rposition(|row| !row.finished)
        } else {
            self.rows.iter().position(|row| !row.finished)
        }
    }

    /// Nearest unfinished row after `current` in the plan's direction
    fn neighbor_row(&self, current: usize) -> Option<usize> {
        if self.plan.from_top() {
            self.rows[..current].iter().rposition(|row| !row.finished)
        } else {
            self.rows
                .iter()
                .enumerate()
                .skip(current + 1)
                .find(|(_, row)| !row.finished)
                .map(|(idx, _)| idx)
        }
    }

    /// Arm a row, restarting its sub-step timer
    fn activate_row(&mut self, idx: usize) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        if row.finished || row.active {
            return;
        }
        row.active = true;
        row.substep_acc = 0.0;
    }

    fn update_finished_flag(&mut self) {
        self.finished = self.rows.iter().all(|row| row.finished);
    }
}
