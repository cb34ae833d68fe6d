//! Flip, transpose, rotate, and crop.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use rgb::RGB8;

use crate::document::Document;
use crate::error::BmpError;
use crate::grid::PixelGrid;

impl Document {
    /// Mirror the image left-to-right. Dimensions unchanged.
    pub fn flip_horizontal(&mut self) {
        for row in self.grid.rows_mut() {
            row.reverse();
        }
    }

    /// Mirror the image top-to-bottom. Dimensions unchanged.
    pub fn flip_vertical(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        let px = &mut self.grid.pixels;
        for row in 0..h / 2 {
            let (upper, lower) = px.split_at_mut((h - 1 - row) * w);
            upper[row * w..row * w + w].swap_with_slice(&mut lower[..w]);
        }
    }

    /// Swap rows and columns: the nth row becomes the nth column. Width and
    /// height trade places, so padding and file size are recomputed.
    pub fn transpose(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        let old = &self.grid.pixels;
        let mut transposed = vec![RGB8::default(); w * h];
        for row in 0..h {
            for col in 0..w {
                transposed[col * h + row] = old[row * w + col];
            }
        }
        self.grid = PixelGrid {
            pixels: transposed,
            width: h,
            height: w,
        };
        self.sync_dimensions();
    }

    /// Rotate 90 degrees counterclockwise.
    pub fn rotate90_left(&mut self) {
        self.transpose();
        self.flip_vertical();
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate90_right(&mut self) {
        self.transpose();
        self.flip_horizontal();
    }

    /// Crop to the rectangle starting at `(x_begin, y_begin)` spanning
    /// `x_end - x_begin` columns and `y_end - y_begin` rows.
    ///
    /// All four bounds must lie strictly inside the current dimensions and
    /// each begin must not exceed its end; any violation fails with
    /// [`BmpError::OutOfRange`] naming the bound, and the document is left
    /// unmodified. Note the selected span excludes the `end` column and row
    /// even though the bounds themselves are validated inclusively — this
    /// matches the long-standing behavior of existing consumers and is kept
    /// for output compatibility.
    pub fn crop(
        &mut self,
        x_begin: u32,
        y_begin: u32,
        x_end: u32,
        y_end: u32,
    ) -> Result<(), BmpError> {
        let width = self.info.width;
        let height = self.info.height;
        if x_begin >= width || x_end >= width {
            return Err(BmpError::OutOfRange(format!(
                "x_begin {x_begin} and x_end {x_end} must be smaller than width {width}"
            )));
        }
        if x_begin > x_end {
            return Err(BmpError::OutOfRange(format!(
                "x_begin {x_begin} must not exceed x_end {x_end}"
            )));
        }
        if y_begin >= height || y_end >= height {
            return Err(BmpError::OutOfRange(format!(
                "y_begin {y_begin} and y_end {y_end} must be smaller than height {height}"
            )));
        }
        if y_begin > y_end {
            return Err(BmpError::OutOfRange(format!(
                "y_begin {y_begin} must not exceed y_end {y_end}"
            )));
        }

        let new_w = (x_end - x_begin) as usize;
        let new_h = (y_end - y_begin) as usize;
        let old_w = width as usize;
        let x0 = x_begin as usize;
        let y0 = y_begin as usize;

        let mut cropped = Vec::with_capacity(new_w * new_h);
        for row in y0..y0 + new_h {
            let start = row * old_w + x0;
            cropped.extend_from_slice(&self.grid.pixels[start..start + new_w]);
        }
        self.grid = PixelGrid {
            pixels: cropped,
            width: new_w,
            height: new_h,
        };
        self.sync_dimensions();
        Ok(())
    }
}
