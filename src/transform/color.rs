//! Per-pixel color maps. None of these change the grid shape, so the
//! header metadata is untouched.

use crate::document::Document;

impl Document {
    /// Invert every channel: `c` becomes `255 - c`.
    pub fn invert_colors(&mut self) {
        for px in self.grid.pixels.iter_mut() {
            px.r = 255 - px.r;
            px.g = 255 - px.g;
            px.b = 255 - px.b;
        }
    }

    /// Average-method grayscale.
    ///
    /// Computes `r/3 + g/3 + b/3 + ((r%3 + g%3 + b%3) / 3)` in integer
    /// arithmetic. The remainder term recovers most of the rounding loss
    /// from per-channel truncation without risking overflow; existing
    /// output depends on this exact formula.
    pub fn grayscale(&mut self) {
        for px in self.grid.pixels.iter_mut() {
            let (r, g, b) = (u32::from(px.r), u32::from(px.g), u32::from(px.b));
            let avg = (r / 3 + g / 3 + b / 3 + (r % 3 + g % 3 + b % 3) / 3) as u8;
            px.r = avg;
            px.g = avg;
            px.b = avg;
        }
    }

    /// Sepia tone using the standard weight matrix, clamped to 255 per
    /// channel and truncated. The weights are non-negative, so no lower
    /// clamp is needed.
    pub fn sepia(&mut self) {
        const MAX: f64 = 255.0;
        for px in self.grid.pixels.iter_mut() {
            let (r, g, b) = (f64::from(px.r), f64::from(px.g), f64::from(px.b));
            let new_r = 0.393 * r + 0.769 * g + 0.189 * b;
            let new_g = 0.349 * r + 0.686 * g + 0.168 * b;
            let new_b = 0.272 * r + 0.534 * g + 0.131 * b;
            px.r = new_r.min(MAX) as u8;
            px.g = new_g.min(MAX) as u8;
            px.b = new_b.min(MAX) as u8;
        }
    }

    /// Zero the green and blue channels, keeping red as-is.
    pub fn isolate_red(&mut self) {
        for px in self.grid.pixels.iter_mut() {
            px.g = 0;
            px.b = 0;
        }
    }

    /// Zero the red and blue channels, keeping green as-is.
    pub fn isolate_green(&mut self) {
        for px in self.grid.pixels.iter_mut() {
            px.r = 0;
            px.b = 0;
        }
    }

    /// Zero the red and green channels, keeping blue as-is.
    pub fn isolate_blue(&mut self) {
        for px in self.grid.pixels.iter_mut() {
            px.r = 0;
            px.g = 0;
        }
    }
}
