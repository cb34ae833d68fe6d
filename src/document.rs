//! The in-memory document: headers, cached row padding, and pixel grid,
//! always mutated together.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::header::{
    BITS_PER_PIXEL, BYTES_PER_PIXEL, DEFAULT_RESOLUTION, FileHeader, FormatInfo, INFO_HEADER_SIZE,
    PLANES, SIGNATURE, TOTAL_HEADER_SIZE,
};
use crate::limits::Limits;

/// Number of zero filler bytes appended to each encoded scanline so that its
/// byte length is a multiple of 4. Always in `0..=3`.
pub fn row_padding(width: u32) -> u32 {
    ((4 - (u64::from(width) * u64::from(BYTES_PER_PIXEL)) % 4) % 4) as u32
}

/// Total encoded byte length for an image of the given dimensions: 54 header
/// bytes plus `height` padded scanlines.
pub fn calculate_size(width: u32, height: u32) -> u64 {
    let row = u64::from(width) * u64::from(BYTES_PER_PIXEL) + u64::from(row_padding(width));
    u64::from(TOTAL_HEADER_SIZE) + u64::from(height) * row
}

/// A decoded (or programmatically built) BMP image.
///
/// Owns the file header, info header, cached row padding, and pixel grid as
/// one unit. Transforms that change the grid shape re-sync the metadata;
/// replacing the grid goes through [`Document::replace_grid`] for the same
/// reason. The `header` and `info` fields are public for pass-through edits
/// (reserved bits, resolution), but width/height edits that disagree with
/// the grid produce a document that will corrupt on encode.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub header: FileHeader,
    pub info: FormatInfo,
    pub(crate) padding: u32,
    pub(crate) grid: PixelGrid,
}

impl Document {
    /// Build a document around an existing grid, with headers filled in for
    /// the supported subset (24-bit, uncompressed, no palette, 72 DPI).
    pub fn new(grid: PixelGrid) -> Self {
        let width = grid.width() as u32;
        let height = grid.height() as u32;
        let header = FileHeader {
            signature: SIGNATURE,
            file_size: calculate_size(width, height) as u32,
            reserved: 0,
            data_offset: TOTAL_HEADER_SIZE,
        };
        let info = FormatInfo {
            header_size: INFO_HEADER_SIZE,
            width,
            height,
            planes: PLANES,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            // Uncompressed files may declare zero here.
            image_size: 0,
            x_resolution: DEFAULT_RESOLUTION,
            y_resolution: DEFAULT_RESOLUTION,
            colors_used: 0,
            important_colors: 0,
        };
        Self {
            header,
            info,
            padding: row_padding(width),
            grid,
        }
    }

    /// Decode a BMP byte buffer.
    ///
    /// Fails with [`BmpError::Incompatible`] before any pixel data is read
    /// if the headers fall outside the supported subset, and with
    /// [`BmpError::UnexpectedEof`] if the buffer is shorter than the
    /// headers demand. Extra trailing bytes are accepted.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        crate::decode::decode(data, None)
    }

    /// Decode with resource limits checked before the grid is allocated.
    pub fn from_bytes_with_limits(data: &[u8], limits: &Limits) -> Result<Self, BmpError> {
        crate::decode::decode(data, Some(limits))
    }

    /// Encode to a BMP byte buffer. Header fields are written verbatim;
    /// scanlines are emitted bottom-up with zeroed row padding.
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::encode::encode(self)
    }

    /// The pixel grid, in top-down row order.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Mutable pixel access. The grid shape cannot change through this, so
    /// the metadata stays consistent.
    pub fn grid_mut(&mut self) -> &mut PixelGrid {
        &mut self.grid
    }

    /// Replace the grid, re-syncing width, height, padding, and file size.
    pub fn replace_grid(&mut self, grid: PixelGrid) {
        self.grid = grid;
        self.sync_dimensions();
    }

    /// Cached row padding in bytes (0–3), derived from the current width.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Recompute the metadata that depends on the grid shape.
    pub(crate) fn sync_dimensions(&mut self) {
        self.info.width = self.grid.width() as u32;
        self.info.height = self.grid.height() as u32;
        self.padding = row_padding(self.info.width);
        self.header.file_size = calculate_size(self.info.width, self.info.height) as u32;
    }
}

#[cfg(feature = "std")]
impl Document {
    /// Read and decode a BMP file. The file handle is released on every
    /// exit path, including decode failures.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, BmpError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Encode and write to a file, replacing any existing contents.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), BmpError> {
        std::fs::write(path, self.to_bytes())?;
        Ok(())
    }
}
