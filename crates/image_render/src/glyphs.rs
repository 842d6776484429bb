//! Bitmap glyph lookup

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};

/// Edge length of a glyph cell, in font pixels
pub(crate) const GLYPH_SIZE: u32 = 8;

/// Rows of an 8x8 glyph, bit 0 is the leftmost pixel
pub(crate) type Glyph = [u8; 8];

/// Look up a glyph, substituting `?` for characters the font lacks
pub(crate) fn glyph(c: char) -> Glyph {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Thicken strokes by lighting each pixel's right neighbour
pub(crate) fn embolden(rows: Glyph) -> Glyph {
    rows.map(|r| r | (r << 1))
}
