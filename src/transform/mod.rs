//! Geometric and color transforms over a decoded [`crate::Document`].
//!
//! Geometric transforms keep the header metadata (width, height, padding,
//! file size) consistent with the new grid shape; color transforms are
//! per-pixel maps that leave the shape alone.

mod color;
mod geometry;
