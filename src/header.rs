//! Typed file header and info header: field-exact decode/encode and the
//! compatibility validator for the supported format subset.

use alloc::format;
use alloc::vec::Vec;

use crate::cursor::ByteCursor;
use crate::error::BmpError;

/// The two magic bytes "BM" combined big-endian.
pub const SIGNATURE: u16 = 0x424D;
/// Size of the fixed file header in bytes.
pub(crate) const FILE_HEADER_SIZE: u32 = 14;
/// Size of the `BITMAPINFOHEADER` in bytes.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Combined header size; pixel data starts at this offset (no palette).
pub const TOTAL_HEADER_SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub(crate) const BYTES_PER_PIXEL: u32 = 3;
pub(crate) const BITS_PER_PIXEL: u16 = 24;
pub(crate) const PLANES: u16 = 1;
/// 72 DPI in pixels per meter, used for programmatically built documents.
pub(crate) const DEFAULT_RESOLUTION: u32 = 2835;

/// The 14-byte BMP file header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic bytes, read big-endian so "BM" appears as `0x424D`.
    pub signature: u16,
    /// Total byte length of the encoded file.
    pub file_size: u32,
    /// Unused; passed through unchanged.
    pub reserved: u32,
    /// Offset from file start to pixel data. Always 54 in this subset.
    pub data_offset: u32,
}

/// The 40-byte `BITMAPINFOHEADER`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatInfo {
    /// Size of this header. Always 40 in this subset.
    pub header_size: u32,
    /// Pixels per row.
    pub width: u32,
    /// Number of rows. Non-negative: only bottom-up files are supported.
    pub height: u32,
    /// Color planes. Always 1.
    pub planes: u16,
    /// Bits per pixel. Always 24 in this subset.
    pub bits_per_pixel: u16,
    /// Compression type. Always 0 (uncompressed).
    pub compression: u32,
    /// Declared compressed-data size; not cross-checked (see
    /// [`check_compatible`]).
    pub image_size: u32,
    /// Horizontal resolution in pixels per meter; passed through.
    pub x_resolution: u32,
    /// Vertical resolution in pixels per meter; passed through.
    pub y_resolution: u32,
    /// Palette colors in use. Always 0 (no palette).
    pub colors_used: u32,
    /// Important palette colors. Always 0.
    pub important_colors: u32,
}

impl FileHeader {
    /// Read exactly 14 bytes from the cursor.
    pub(crate) fn parse(cur: &mut ByteCursor) -> Result<Self, BmpError> {
        // The signature is the only big-endian field: the two magic bytes
        // combine as (byte0 << 8) | byte1 so "BM" reads as 0x424D. All other
        // fields are little-endian.
        Ok(Self {
            signature: cur.get_u16_be()?,
            file_size: cur.get_u32_le()?,
            reserved: cur.get_u32_le()?,
            data_offset: cur.get_u32_le()?,
        })
    }

    /// Write exactly 14 bytes, mirroring [`FileHeader::parse`].
    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature.to_be_bytes());
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }
}

impl FormatInfo {
    /// Read exactly 40 bytes from the cursor.
    pub(crate) fn parse(cur: &mut ByteCursor) -> Result<Self, BmpError> {
        // Only planes and bits_per_pixel are 16-bit fields.
        Ok(Self {
            header_size: cur.get_u32_le()?,
            width: cur.get_u32_le()?,
            height: cur.get_u32_le()?,
            planes: cur.get_u16_le()?,
            bits_per_pixel: cur.get_u16_le()?,
            compression: cur.get_u32_le()?,
            image_size: cur.get_u32_le()?,
            x_resolution: cur.get_u32_le()?,
            y_resolution: cur.get_u32_le()?,
            colors_used: cur.get_u32_le()?,
            important_colors: cur.get_u32_le()?,
        })
    }

    /// Write exactly 40 bytes, mirroring [`FormatInfo::parse`].
    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_resolution.to_le_bytes());
        out.extend_from_slice(&self.y_resolution.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }
}

/// Check a decoded header pair against the supported format subset.
///
/// Accepts only: "BM" signature, pixel data at offset 54 (no palette),
/// 40-byte info header, one plane, no compression, 24 bits per pixel, and
/// zero palette color counts. The first failing check is reported.
///
/// `image_size` and `file_size` are deliberately not cross-checked against
/// the width/height/padding-derived byte count: common exporters (Photoshop
/// among them) append trailing zero bytes past the pixel data, and rejecting
/// those files would reject otherwise-valid images.
pub fn check_compatible(header: &FileHeader, info: &FormatInfo) -> Result<(), BmpError> {
    if header.signature != SIGNATURE {
        return Err(BmpError::Incompatible(format!(
            "signature {:#06x} is not \"BM\" ({SIGNATURE:#06x})",
            header.signature
        )));
    }
    if header.data_offset != TOTAL_HEADER_SIZE {
        return Err(BmpError::Incompatible(format!(
            "data offset {} (expected {TOTAL_HEADER_SIZE}; palettes are unsupported)",
            header.data_offset
        )));
    }
    if info.header_size != INFO_HEADER_SIZE {
        return Err(BmpError::Incompatible(format!(
            "info header size {} (expected {INFO_HEADER_SIZE})",
            info.header_size
        )));
    }
    if info.planes != PLANES {
        return Err(BmpError::Incompatible(format!(
            "{} planes (expected {PLANES})",
            info.planes
        )));
    }
    if info.compression != 0 {
        return Err(BmpError::Incompatible(format!(
            "compression type {} (only uncompressed files are supported)",
            info.compression
        )));
    }
    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BmpError::Incompatible(format!(
            "{} bits per pixel (expected {BITS_PER_PIXEL})",
            info.bits_per_pixel
        )));
    }
    if info.colors_used != 0 {
        return Err(BmpError::Incompatible(format!(
            "{} palette colors used (palettes are unsupported)",
            info.colors_used
        )));
    }
    if info.important_colors != 0 {
        return Err(BmpError::Incompatible(format!(
            "{} important colors (palettes are unsupported)",
            info.important_colors
        )));
    }
    Ok(())
}
