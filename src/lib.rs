//! # bmpedit
//!
//! Codec and in-memory editor for uncompressed 24-bit BMP images.
//!
//! Decodes a byte buffer into a [`Document`] (typed file header, info header,
//! and a top-down pixel grid), lets you apply geometric and color transforms
//! that keep the metadata consistent, and re-encodes the document bit-exactly.
//!
//! ## Supported Format
//!
//! The narrow classic subset: `BITMAPINFOHEADER` (40 bytes), 24 bits per
//! pixel, uncompressed, single plane, no palette, bottom-up row order.
//! Anything else is rejected up front with [`BmpError::Incompatible`] —
//! partial support is worse than none.
//!
//! ## Transforms
//!
//! Geometric: [`Document::flip_horizontal`], [`Document::flip_vertical`],
//! [`Document::transpose`], [`Document::rotate90_left`],
//! [`Document::rotate90_right`], [`Document::crop`]. Shape changes update
//! width, height, row padding, and file size together.
//!
//! Color: [`Document::invert_colors`], [`Document::grayscale`],
//! [`Document::sepia`], [`Document::isolate_red`] (and green/blue).
//!
//! ## Non-Goals
//!
//! - Compressed BMP (RLE, bitfields), palettes, bit depths other than 24
//! - Color management
//! - Any format other than BMP
//!
//! ## Usage
//!
//! ```
//! use bmpedit::{Document, PixelGrid};
//!
//! let mut doc = Document::new(PixelGrid::new(4, 2));
//! doc.invert_colors();
//! let bytes = doc.to_bytes();
//!
//! let back = Document::from_bytes(&bytes)?;
//! assert_eq!(back, doc);
//! # Ok::<(), bmpedit::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod cursor;
mod decode;
mod document;
mod encode;
mod error;
mod grid;
mod header;
mod limits;
mod transform;

// Re-exports
pub use document::{Document, calculate_size, row_padding};
pub use error::BmpError;
pub use grid::PixelGrid;
pub use header::{
    FileHeader, FormatInfo, INFO_HEADER_SIZE, SIGNATURE, TOTAL_HEADER_SIZE, check_compatible,
};
pub use limits::Limits;
pub use rgb::RGB8;
