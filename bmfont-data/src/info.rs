use compact_str::CompactString;

/// Padding applied around each glyph when the atlas was packed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    /// Pixels above the glyph
    pub up: i32,
    /// Pixels below the glyph
    pub down: i32,
    /// Pixels left of the glyph
    pub left: i32,
    /// Pixels right of the glyph
    pub right: i32,
}

/// Spacing between glyphs in the atlas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spacing {
    /// Horizontal gap in pixels
    pub horizontal: i32,
    /// Vertical gap in pixels
    pub vertical: i32,
}

/// Descriptive metadata for the `info` line of a BMFont file.
///
/// Nothing here feeds back into glyph geometry; readers such as game
/// engines typically ignore the line altogether. All fields default
/// independently, so partially specified JSON (with the `serde` feature)
/// fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontInfo {
    /// Face name; `None` is written as an empty face
    pub face: Option<CompactString>,
    /// Font size in points
    pub size: i32,
    /// Whether the face is bold
    pub bold: bool,
    /// Whether the face is italic
    pub italic: bool,
    /// Charset label; `None` or empty means the default text encoding
    pub charset: Option<CompactString>,
    /// Whether the font covers unicode codepoints
    pub unicode: bool,
    /// Height stretch in percent
    pub stretch_h: i32,
    /// Whether smoothing was applied
    pub smooth: bool,
    /// Anti-aliasing level
    pub aa: i32,
    /// Padding around each glyph
    pub padding: Padding,
    /// Spacing between glyphs
    pub spacing: Spacing,
    /// Outline thickness in pixels
    pub outline: i32,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            face: None,
            size: 12,
            bold: false,
            italic: false,
            charset: None,
            unicode: true,
            stretch_h: 100,
            smooth: true,
            aa: 2,
            padding: Padding::default(),
            spacing: Spacing::default(),
            outline: 0,
        }
    }
}

impl FontInfo {
    /// Creates info with a face name and point size, defaulting the rest.
    pub fn new(face: &str, size: i32) -> Self {
        Self {
            face: Some(face.into()),
            size,
            ..Self::default()
        }
    }

    /// Sets the bold and italic flags.
    #[must_use]
    pub fn with_style(mut self, bold: bool, italic: bool) -> Self {
        self.bold = bold;
        self.italic = italic;
        self
    }

    /// Sets the charset label.
    #[must_use]
    pub fn with_charset(mut self, charset: &str) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Sets the glyph padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the glyph spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the outline thickness.
    #[must_use]
    pub fn with_outline(mut self, outline: i32) -> Self {
        self.outline = outline;
        self
    }

    /// The charset label, with an empty label treated as absent.
    pub fn effective_charset(&self) -> Option<&str> {
        self.charset
            .as_deref()
            .filter(|charset| !charset.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bmfont_conventions() {
        let info = FontInfo::default();

        assert_eq!(info.size, 12);
        assert_eq!(info.stretch_h, 100);
        assert_eq!(info.aa, 2);
        assert!(info.smooth);
        assert!(info.unicode);
        assert!(!info.bold && !info.italic);
        assert_eq!(info.padding, Padding::default());
        assert_eq!(info.spacing, Spacing::default());
        assert_eq!(info.outline, 0);
        assert_eq!(info.face, None);
    }

    #[test]
    fn empty_charset_is_treated_as_absent() {
        assert_eq!(FontInfo::default().effective_charset(), None);
        assert_eq!(FontInfo::default().with_charset("").effective_charset(), None);
        assert_eq!(
            FontInfo::default()
                .with_charset("iso-8859-1")
                .effective_charset(),
            Some("iso-8859-1")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_in_defaults() {
        let info: FontInfo =
            serde_json::from_str(r#"{ "face": "Hack", "bold": true, "padding": { "up": 1, "down": 1, "left": 2, "right": 2 } }"#)
                .unwrap();

        assert_eq!(info.face.as_deref(), Some("Hack"));
        assert!(info.bold);
        assert_eq!(info.size, 12);
        assert_eq!(info.stretch_h, 100);
        assert_eq!(info.padding, Padding { up: 1, down: 1, left: 2, right: 2 });
    }
}
