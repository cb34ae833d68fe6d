//! Row-major pixel grid.

use alloc::vec;
use alloc::vec::Vec;

use rgb::RGB8;

use crate::error::BmpError;

/// Rectangular pixel buffer in row-major order. Row 0 is the TOP display
/// row: the codec performs the bottom-up reorder during decode, so callers
/// always see the image in natural reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    pub(crate) pixels: Vec<RGB8>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl PixelGrid {
    /// Create a grid of the given dimensions filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![RGB8::default(); width * height],
            width,
            height,
        }
    }

    /// Build a grid from a row-major pixel buffer.
    ///
    /// Returns [`BmpError::BufferTooSmall`] unless
    /// `pixels.len() == width * height`.
    pub fn from_pixels(pixels: Vec<RGB8>, width: usize, height: usize) -> Result<Self, BmpError> {
        let needed = width * height;
        if pixels.len() != needed {
            return Err(BmpError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat row-major pixel data.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Mutable flat pixel data. The grid shape cannot change through this.
    pub fn pixels_mut(&mut self) -> &mut [RGB8] {
        &mut self.pixels
    }

    /// Pixel at column `x`, row `y`, with (0, 0) the top-left corner.
    pub fn pixel(&self, x: usize, y: usize) -> Option<RGB8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Iterate rows top-down. A zero-width grid yields no rows.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[RGB8]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Iterate rows top-down, mutably.
    pub fn rows_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut [RGB8]> {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }
}

#[cfg(feature = "imgref")]
impl PixelGrid {
    /// Zero-copy view as an [`imgref::ImgRef`] — borrows this grid's buffer.
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels, self.width, self.height)
    }

    /// Convert to an owned [`imgref::ImgVec`].
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGB8> {
        imgref::ImgVec::new(self.pixels.clone(), self.width, self.height)
    }
}
