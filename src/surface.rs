//! Read/write pixel surface the tracker paints into

use crate::color::Rgb;

/// Indexed pixel buffer
///
/// The tracker reads it back when resynchronizing from physical state,
/// so implementations must return what was last written.
pub trait PixelSurface {
    /// Number of addressable pixels
    fn len(&self) -> usize;

    /// Returns `true` if the surface has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a pixel, `None` when out of bounds
    fn get(&self, index: usize) -> Option<Rgb>;

    /// Write a pixel. Out of bounds writes are ignored.
    fn set(&mut self, index: usize, color: Rgb);

    /// Paint every pixel with one color
    fn fill(&mut self, color: Rgb) {
        for i in 0..self.len() {
            self.set(i, color);
        }
    }
}

impl PixelSurface for [Rgb] {
    fn len(&self) -> usize {
        <[Rgb]>::len(self)
    }

    fn get(&self, index: usize) -> Option<Rgb> {
        <[Rgb]>::get(self, index).copied()
    }

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }
}

impl<const N: usize> PixelSurface for [Rgb; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<Rgb> {
        self.as_slice().get(index).copied()
    }

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }
}
