//! BMP decoder: headers, compatibility check, then the bottom-up pixel scan.

use alloc::vec;

use rgb::RGB8;

use crate::cursor::ByteCursor;
use crate::document::{Document, row_padding};
use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::header::{FileHeader, FormatInfo, check_compatible};
use crate::limits::Limits;

pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Document, BmpError> {
    let mut cur = ByteCursor::new(data);
    let header = FileHeader::parse(&mut cur)?;
    let info = FormatInfo::parse(&mut cur)?;

    // Incompatible files are rejected before any pixel data is touched.
    check_compatible(&header, &info)?;

    let w = info.width as usize;
    let h = info.height as usize;
    let padding = row_padding(info.width);

    let total_pixels = w
        .checked_mul(h)
        .ok_or(BmpError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })?;
    if let Some(limits) = limits {
        limits.check(info.width, info.height)?;
        limits.check_memory(total_pixels.saturating_mul(3))?;
    }

    // Fail fast on truncated input before allocating the grid. Extra
    // trailing bytes are fine (exporters append zeros past the pixel data).
    let row_bytes = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(padding as usize))
        .ok_or(BmpError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })?;
    let needed = row_bytes
        .checked_mul(h)
        .ok_or(BmpError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })?;
    if cur.remaining() < needed {
        return Err(BmpError::UnexpectedEof);
    }

    // Scanlines are stored bottom-up: the first one read is the bottom
    // display row, so it lands at grid row h-1 and the grid comes out in
    // top-down reading order. Pixels are stored blue, green, red.
    let mut pixels = vec![RGB8::default(); total_pixels];
    for row in (0..h).rev() {
        let base = row * w;
        for col in 0..w {
            let b = cur.read_u8()?;
            let g = cur.read_u8()?;
            let r = cur.read_u8()?;
            pixels[base + col] = RGB8 { r, g, b };
        }
        // Padding contents are ignored; they are not guaranteed to be zero.
        cur.skip(padding as usize)?;
    }

    Ok(Document {
        header,
        info,
        padding,
        grid: PixelGrid::from_pixels(pixels, w, h)?,
    })
}
