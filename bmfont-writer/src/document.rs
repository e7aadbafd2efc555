use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use bmfont_data::{BitmapFontData, FontInfo, FontMetrics, GlyphRecord, PageSet};

use crate::kerning::{KerningPair, kerning_pairs};

/// A bitmap font laid out as a BMFont text document.
///
/// The document borrows all of its inputs and renders them through its
/// [`Display`] implementation, one line per record:
///
/// 1. `info` - descriptive metadata, synthesized from defaults when no
///    [`FontInfo`] is given
/// 2. `common` - line height, baseline, declared page size and page count
/// 3. one `page` line per entry of the [`PageSet`]
/// 4. `chars count=N` followed by one `char` line per glyph, in input order
/// 5. `kernings count=K` followed by one `kerning` line per non-zero pair
///
/// Numeric `char` fields are left-aligned in 5-character columns; the
/// padding is cosmetic.
///
/// # Examples
///
/// ```
/// use bmfont_data::{FontMetrics, GlyphRecord, PageSet};
/// use bmfont_writer::FontDocument;
///
/// let metrics = FontMetrics { line_height: 16.0, cap_height: 10.0, ascent: 2.0, flipped: true };
/// let glyphs = [GlyphRecord::new('A' as u32).with_source_rect(0, 0, 8, 10)];
/// let pages = PageSet::new(["font.png"]);
///
/// let text = FontDocument::new(metrics, &glyphs, &pages)
///     .with_default_face("font")
///     .with_scale(128, 128)
///     .to_string();
///
/// assert!(text.starts_with("info face=\"font\" size=12 "));
/// assert!(text.contains("common lineHeight=16 base=8 scaleW=128 scaleH=128 pages=1 packed=0"));
/// assert!(text.contains("page id=0 file=\"font.png\"\n"));
/// assert!(text.ends_with("kernings count=0\n"));
/// ```
#[derive(Debug, Clone)]
pub struct FontDocument<'a> {
    metrics: FontMetrics,
    glyphs: Vec<&'a GlyphRecord>,
    pages: &'a PageSet,
    info: Cow<'a, FontInfo>,
    scale: (i32, i32),
}

impl<'a> FontDocument<'a> {
    /// Creates a document for `glyphs`, which are emitted in iteration order.
    pub fn new(
        metrics: FontMetrics,
        glyphs: impl IntoIterator<Item = &'a GlyphRecord>,
        pages: &'a PageSet,
    ) -> Self {
        let glyphs: Vec<&GlyphRecord> = glyphs.into_iter().collect();
        warn_on_missing_pages(&glyphs, pages);

        Self {
            metrics,
            glyphs,
            pages,
            info: Cow::Owned(FontInfo::default()),
            scale: (0, 0),
        }
    }

    /// Creates a document for the present glyphs of `font`; empty slots are
    /// skipped.
    pub fn from_font(font: &'a BitmapFontData, pages: &'a PageSet) -> Self {
        Self::new(font.metrics, font.glyphs(), pages)
    }

    /// Uses the caller's metadata for the `info` line.
    #[must_use]
    pub fn with_info(mut self, info: &'a FontInfo) -> Self {
        self.info = Cow::Borrowed(info);
        self
    }

    /// Sets the face name of the synthesized `info` line. Has no effect once
    /// [`with_info`](Self::with_info) supplied caller metadata.
    #[must_use]
    pub fn with_default_face(mut self, face: &str) -> Self {
        if let Cow::Owned(info) = &mut self.info {
            info.face = Some(face.into());
        }
        self
    }

    /// Declares the page dimensions written as `scaleW`/`scaleH`.
    #[must_use]
    pub fn with_scale(mut self, width: i32, height: i32) -> Self {
        self.scale = (width, height);
        self
    }

    /// The `lineHeight` value, truncated.
    pub fn line_height(&self) -> i32 {
        self.metrics.line_height_px()
    }

    /// The `base` value, see [`FontMetrics::base`].
    pub fn base(&self) -> i32 {
        self.metrics.base()
    }

    /// The info record used for the `info` line.
    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    /// Number of `char` lines.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The pairs emitted as `kerning` lines, in emission order.
    pub fn kerning_pairs(&self) -> Vec<KerningPair> {
        kerning_pairs(&self.glyphs)
    }

    fn fmt_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &*self.info;
        let face = quote_safe(info.face.as_deref().unwrap_or_default());
        let charset = info.charset.as_deref().unwrap_or_default();
        let (padding, spacing) = (info.padding, info.spacing);

        write!(
            f,
            "info face=\"{face}\" size={} bold={} italic={} charset=\"{charset}\" unicode={} \
             stretchH={} smooth={} aa={} padding={},{},{},{} spacing={},{}",
            info.size,
            flag(info.bold),
            flag(info.italic),
            flag(info.unicode),
            info.stretch_h,
            flag(info.smooth),
            info.aa,
            padding.up,
            padding.down,
            padding.left,
            padding.right,
            spacing.horizontal,
            spacing.vertical,
        )?;

        if info.outline != 0 {
            write!(f, " outline={}", info.outline)?;
        }

        writeln!(f)
    }

    fn fmt_common(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "common lineHeight={} base={} scaleW={} scaleH={} pages={} packed=0 \
             alphaChnl=0 redChnl=0 greenChnl=0 blueChnl=0",
            self.line_height(),
            self.base(),
            self.scale.0,
            self.scale.1,
            self.pages.len(),
        )
    }

    fn fmt_chars(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "chars count={}", self.glyphs.len())?;

        for g in &self.glyphs {
            writeln!(
                f,
                "char id={:<5}x={:<5}y={:<5}width={:<5}height={:<5}xoffset={:<5}\
                 yoffset={:<5}xadvance={:<5}page={:<5}chnl=0",
                g.id,
                g.src_x,
                g.src_y,
                g.width,
                g.height,
                g.xoffset,
                self.metrics.top_origin_yoffset(g),
                g.xadvance,
                g.page,
            )?;
        }

        Ok(())
    }

    fn fmt_kernings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.kerning_pairs();

        writeln!(f, "kernings count={}", pairs.len())?;
        for pair in &pairs {
            writeln!(
                f,
                "kerning first={} second={} amount={}",
                pair.first, pair.second, pair.amount
            )?;
        }

        Ok(())
    }
}

impl Display for FontDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_info(f)?;
        self.fmt_common(f)?;

        for (id, file) in self.pages.iter() {
            writeln!(f, "page id={id} file=\"{file}\"")?;
        }

        self.fmt_chars(f)?;
        self.fmt_kernings(f)
    }
}

/// The format has no escape sequences; double quotes become single quotes.
fn quote_safe(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(s.replace('"', "'"))
    } else {
        Cow::Borrowed(s)
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

fn warn_on_missing_pages(glyphs: &[&GlyphRecord], pages: &PageSet) {
    let out_of_range = |g: &&&GlyphRecord| g.page as usize >= pages.len();

    if let Some(first) = glyphs.iter().find(out_of_range) {
        tracing::warn!(
            pages = pages.len(),
            glyphs = glyphs.iter().filter(out_of_range).count(),
            first_id = first.id,
            first_page = first.page,
            "glyphs reference pages beyond the page set; writing them unchanged"
        );
    }
}
