use std::collections::BTreeMap;

/// A single visible character of a bitmap font.
///
/// A `GlyphRecord` locates a character inside one of the font's atlas pages
/// and carries the metrics needed to place it relative to the pen position.
/// Coordinates are kept exactly as supplied; negative or out-of-range values
/// are not rejected.
///
/// # Y Offset Convention
///
/// `yoffset` is interpreted according to [`FontMetrics::flipped`]: for a
/// flipped (y-down) font it is the distance from the top of the line cell to
/// the top of the glyph, otherwise it is the y-up offset of the glyph's
/// bottom edge. Conversion to the y-down convention happens when the font is
/// written.
///
/// [`FontMetrics::flipped`]: crate::FontMetrics::flipped
///
/// # Kerning
///
/// Kerning adjustments are stored sparsely, keyed by the codepoint of the
/// *following* character. Zero adjustments are never stored.
///
/// ```
/// use bmfont_data::GlyphRecord;
///
/// let mut a = GlyphRecord::new('A' as u32);
/// a.set_kerning('V' as u32, -2);
/// assert_eq!(a.kerning('V' as u32), -2);
/// assert_eq!(a.kerning('W' as u32), 0);
///
/// a.set_kerning('V' as u32, 0);
/// assert_eq!(a.kerning_entries().count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphRecord {
    /// Unicode codepoint; unique within a font
    pub id: u32,
    /// Left edge of the glyph in the atlas page, in pixels
    pub src_x: i32,
    /// Top edge of the glyph in the atlas page, in pixels
    pub src_y: i32,
    /// Width of the glyph rectangle
    pub width: i32,
    /// Height of the glyph rectangle
    pub height: i32,
    /// Horizontal offset from the pen position
    pub xoffset: i32,
    /// Vertical offset from the pen position, see the type docs
    pub yoffset: i32,
    /// How far the pen advances after drawing this glyph
    pub xadvance: i32,
    /// Index of the atlas page holding this glyph
    pub page: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    kerning: BTreeMap<u32, i32>,
}

impl GlyphRecord {
    /// Creates a glyph with the given codepoint and all geometry zeroed.
    pub fn new(id: u32) -> Self {
        Self { id, ..Self::default() }
    }

    /// Sets the source rectangle of the glyph inside its atlas page.
    #[must_use]
    pub fn with_source_rect(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.src_x = x;
        self.src_y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the pen offsets and the horizontal advance.
    #[must_use]
    pub fn with_offsets(mut self, xoffset: i32, yoffset: i32, xadvance: i32) -> Self {
        self.xoffset = xoffset;
        self.yoffset = yoffset;
        self.xadvance = xadvance;
        self
    }

    /// Sets the owning atlas page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Adds a kerning adjustment for when `second` follows this glyph.
    #[must_use]
    pub fn with_kerning(mut self, second: u32, amount: i32) -> Self {
        self.set_kerning(second, amount);
        self
    }

    /// Stores the kerning adjustment for `second`; an `amount` of zero
    /// removes any existing entry.
    pub fn set_kerning(&mut self, second: u32, amount: i32) {
        if amount == 0 {
            self.kerning.remove(&second);
        } else {
            self.kerning.insert(second, amount);
        }
    }

    /// Returns the kerning adjustment for `second`, or 0 when none is set.
    pub fn kerning(&self, second: u32) -> i32 {
        self.kerning.get(&second).copied().unwrap_or(0)
    }

    /// Iterates over the non-zero kerning entries as `(second, amount)`,
    /// ordered by the following codepoint.
    pub fn kerning_entries(&self) -> impl ExactSizeIterator<Item = (u32, i32)> + '_ {
        self.kerning.iter().map(|(&second, &amount)| (second, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_kerning_is_never_stored() {
        let glyph = GlyphRecord::new(0x41)
            .with_kerning(0x56, 0)
            .with_kerning(0x57, -1);

        assert_eq!(glyph.kerning_entries().collect::<Vec<_>>(), vec![(0x57, -1)]);
    }

    #[test]
    fn kerning_entry_is_replaced_then_removed() {
        let mut glyph = GlyphRecord::new(0x54);
        glyph.set_kerning(0x6F, -3);
        glyph.set_kerning(0x6F, 2);
        assert_eq!(glyph.kerning(0x6F), 2);

        glyph.set_kerning(0x6F, 0);
        assert_eq!(glyph.kerning(0x6F), 0);
        assert_eq!(glyph.kerning_entries().len(), 0);
    }

    #[test]
    fn builders_fill_geometry() {
        let glyph = GlyphRecord::new(0x67)
            .with_source_rect(10, 20, 7, 12)
            .with_offsets(1, -3, 8)
            .with_page(2);

        assert_eq!((glyph.src_x, glyph.src_y), (10, 20));
        assert_eq!((glyph.width, glyph.height), (7, 12));
        assert_eq!((glyph.xoffset, glyph.yoffset, glyph.xadvance), (1, -3, 8));
        assert_eq!(glyph.page, 2);
    }
}
