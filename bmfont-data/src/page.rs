use std::fmt::Debug;

use compact_str::{CompactString, format_compact};

/// File references for the atlas pages of a font, indexed by page id.
///
/// Page ids are 0-based and contiguous; a glyph's `page` field indexes
/// into this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSet {
    refs: Vec<CompactString>,
}

impl PageSet {
    /// Creates a page set from file references in page-id order.
    pub fn new<I, S>(refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self { refs: refs.into_iter().map(Into::into).collect() }
    }

    /// Derives the page references for `page_count` PNG pages sharing a base
    /// file name: `name.png` for a single page, `name_0.png`, `name_1.png`,
    /// ... otherwise.
    ///
    /// ```
    /// use bmfont_data::PageSet;
    ///
    /// assert_eq!(PageSet::png_pages("font", 1).get(0), Some("font.png"));
    ///
    /// let pages = PageSet::png_pages("atlas", 3);
    /// let refs: Vec<&str> = pages.iter().map(|(_, r)| r).collect();
    /// assert_eq!(refs, ["atlas_0.png", "atlas_1.png", "atlas_2.png"]);
    /// ```
    pub fn png_pages(base_name: &str, page_count: usize) -> Self {
        let refs = match page_count {
            1 => vec![format_compact!("{base_name}.png")],
            n => (0..n)
                .map(|i| format_compact!("{base_name}_{i}.png"))
                .collect(),
        };

        Self { refs }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns true if the set holds no pages.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// File reference of the page with the given id.
    pub fn get(&self, id: usize) -> Option<&str> {
        self.refs.get(id).map(CompactString::as_str)
    }

    /// All file references in page-id order.
    pub fn refs(&self) -> &[CompactString] {
        &self.refs
    }

    /// Iterates over `(page id, file reference)`.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> {
        self.refs
            .iter()
            .enumerate()
            .map(|(id, r)| (id, r.as_str()))
    }
}

/// Returned when an RGBA buffer does not match the declared dimensions.
#[derive(Debug, thiserror::Error)]
#[error("expected {expected} bytes of RGBA data for {width}x{height}, got {actual}")]
pub struct PageImageError {
    /// Declared width
    pub width: u32,
    /// Declared height
    pub height: u32,
    /// Byte length implied by the dimensions
    pub expected: usize,
    /// Byte length of the supplied buffer
    pub actual: usize,
}

/// An 8-bit RGBA atlas page, row-major and unpadded.
#[derive(Clone, PartialEq, Eq)]
pub struct PageImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Debug for PageImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_kb", &(self.pixels.len() / 1024))
            .finish()
    }
}

impl PageImage {
    /// One byte each for red, green, blue and alpha.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Wraps an RGBA buffer of `width * height * 4` bytes.
    ///
    /// # Errors
    /// Returns [`PageImageError`] if the buffer length does not match.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PageImageError> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(PageImageError { width, height, expected, actual: pixels.len() });
        }

        Ok(Self { width, height, pixels })
    }

    /// A fully transparent page.
    pub fn transparent(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        Self { width, height, pixels: vec![0; len] }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Sets one pixel; writes outside the page are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        self.pixels[idx..idx + Self::BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }
}
