//! Row to physical LED mapping
//!
//! A map is a list of rows, each row an ordered list of physical LED
//! indices. The map is owned by the host and only borrowed here.

use crate::{color::peak, surface::PixelSurface};

/// Peak channel value at which a pixel counts as lit when scanning
pub const MIN_LIT_CHANNEL: u8 = 6;

/// Borrowed read-only view over a row-major LED map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedMap<'a> {
    rows: &'a [&'a [u16]],
}

impl<'a> LedMap<'a> {
    pub const fn new(rows: &'a [&'a [u16]]) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub const fn rows(self) -> usize {
        self.rows.len()
    }

    pub const fn is_empty(self) -> bool {
        self.rows.is_empty()
    }

    /// Physical indices of a row, `None` when out of range
    pub fn row(self, row: usize) -> Option<&'a [u16]> {
        self.rows.get(row).copied()
    }
}

/// Number of LEDs in a row, 0 for an out of range row
pub fn row_len(map: LedMap<'_>, row: usize) -> usize {
    map.row(row).map_or(0, <[u16]>::len)
}

/// Whether a row is traversed backwards because of zig-zag wiring
#[inline]
pub const fn is_row_reversed(row: usize, snake: bool) -> bool {
    snake && row % 2 == 1
}

/// Physical LED at logical position `i` of `row`
///
/// With `snake` enabled odd rows run in reverse. Returns `None` when the
/// row or position is out of range.
pub fn row_phys_at(map: LedMap<'_>, row: usize, i: usize, snake: bool) -> Option<usize> {
    let leds = map.row(row)?;
    if i >= leds.len() {
        return None;
    }
    let logical = if is_row_reversed(row, snake) {
        leds.len() - 1 - i
    } else {
        i
    };
    leds.get(logical).map(|&phys| usize::from(phys))
}

/// Physical LED under the fill head when `pos` LEDs are lit
pub fn row_head_index_fill(map: LedMap<'_>, row: usize, pos: usize, snake: bool) -> Option<usize> {
    row_phys_at(map, row, pos, snake)
}

/// Physical LED under the clear head when `pos` LEDs are still lit
pub fn row_head_index_off(map: LedMap<'_>, row: usize, pos: usize, snake: bool) -> Option<usize> {
    let pos = pos.checked_sub(1)?;
    row_phys_at(map, row, pos, snake)
}

/// Check a pixel against the lit floor
pub fn is_led_lit_soft<S: PixelSurface + ?Sized>(surface: &S, phys: usize) -> bool {
    surface
        .get(phys)
        .is_some_and(|color| peak(color) >= MIN_LIT_CHANNEL)
}

/// Count the contiguous lit prefix of a row, starting at its logical start
///
/// The scan stops at the first unlit LED, or as soon as the mapping
/// points past the end of the surface.
pub fn scan_resume_row_prefix<S: PixelSurface + ?Sized>(
    surface: &S,
    map: LedMap<'_>,
    row: usize,
    snake: bool,
) -> usize {
    let len = row_len(map, row);
    let mut lit = 0;
    for i in 0..len {
        let Some(phys) = row_phys_at(map, row, i, snake) else {
            break;
        };
        if phys >= surface.len() || !is_led_lit_soft(surface, phys) {
            break;
        }
        lit = i + 1;
    }
    lit
}
