use crate::GlyphRecord;

/// Whole-font vertical metrics.
///
/// Values are kept as floats the way font rasterizers report them; they are
/// truncated to integers when written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetrics {
    /// Distance between two consecutive baselines
    pub line_height: f32,
    /// Height of capital letters above the baseline
    pub cap_height: f32,
    /// Distance from the cap height to the top of the line cell
    pub ascent: f32,
    /// `true` when glyph y-coordinates grow downward (top origin),
    /// `false` when they grow upward (bottom origin)
    pub flipped: bool,
}

impl FontMetrics {
    /// Distance from the top of a line cell to the baseline, honoring the
    /// y-axis convention of the glyph coordinates.
    ///
    /// ```
    /// use bmfont_data::FontMetrics;
    ///
    /// let y_up = FontMetrics { line_height: 32.0, cap_height: 20.0, ascent: 5.0, flipped: false };
    /// assert_eq!(y_up.base(), 25);
    ///
    /// let y_down = FontMetrics { flipped: true, ..y_up };
    /// assert_eq!(y_down.base(), 15);
    /// ```
    pub fn base(&self) -> i32 {
        let ascent = if self.flipped { -self.ascent } else { self.ascent };
        (self.cap_height + ascent) as i32
    }

    /// The line height, truncated toward zero.
    pub fn line_height_px(&self) -> i32 {
        self.line_height as i32
    }

    /// Re-expresses a glyph's y-offset in the y-down convention used by
    /// BMFont files.
    pub fn top_origin_yoffset(&self, glyph: &GlyphRecord) -> i32 {
        if self.flipped {
            glyph.yoffset
        } else {
            glyph.height.wrapping_add(glyph.yoffset).wrapping_neg()
        }
    }
}

/// Bitmap font glyph data as produced by a rasterizer or packer.
///
/// Glyphs are kept in caller order as optional slots. Empty slots stand for
/// characters that produced no glyph and are skipped when the font is
/// written; the order of the remaining glyphs is preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitmapFontData {
    /// Whole-font metrics
    pub metrics: FontMetrics,
    /// Glyph slots, in emission order
    pub glyph_slots: Vec<Option<GlyphRecord>>,
}

impl BitmapFontData {
    /// Creates font data without any glyphs.
    pub fn new(metrics: FontMetrics) -> Self {
        Self { metrics, glyph_slots: Vec::new() }
    }

    /// Appends a glyph after all existing slots.
    pub fn push_glyph(&mut self, glyph: GlyphRecord) {
        self.glyph_slots.push(Some(glyph));
    }

    /// Iterates over the present glyphs, skipping empty slots.
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphRecord> {
        self.glyph_slots.iter().flatten()
    }

    /// Looks up a glyph by codepoint.
    pub fn glyph(&self, id: u32) -> Option<&GlyphRecord> {
        self.glyphs().find(|g| g.id == id)
    }

    /// Mutable lookup of a glyph by codepoint, e.g. for adding kerning.
    pub fn glyph_mut(&mut self, id: u32) -> Option<&mut GlyphRecord> {
        self.glyph_slots
            .iter_mut()
            .flatten()
            .find(|g| g.id == id)
    }

    /// Number of present glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs().count()
    }
}

impl FromIterator<GlyphRecord> for BitmapFontData {
    fn from_iter<T: IntoIterator<Item = GlyphRecord>>(iter: T) -> Self {
        Self {
            metrics: FontMetrics::default(),
            glyph_slots: iter.into_iter().map(Some).collect(),
        }
    }
}
