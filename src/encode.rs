//! BMP encoder: the exact inverse of the decoder.

use alloc::vec::Vec;

use crate::document::{Document, calculate_size};

/// Encode a document to BMP bytes.
///
/// Header fields are written verbatim in the same order and endianness the
/// decoder reads them; grid rows are emitted from the bottom up, blue,
/// green, red per pixel, each scanline followed by zeroed padding.
pub(crate) fn encode(doc: &Document) -> Vec<u8> {
    // Capacity from the actual grid shape; the stored file_size field is
    // pass-through and may disagree on decoded input.
    let mut out = Vec::with_capacity(calculate_size(doc.info.width, doc.info.height) as usize);
    doc.header.write_to(&mut out);
    doc.info.write_to(&mut out);

    let padding = doc.padding as usize;
    for row in doc.grid.rows().rev() {
        for px in row {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(core::iter::repeat_n(0u8, padding));
    }
    out
}
