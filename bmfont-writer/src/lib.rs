//! Writes bitmap fonts in the [BMFont] text format.
//!
//! A font is written as a `.fnt` text file describing glyph placement and
//! kerning, plus one PNG image per atlas page. [`write_font_with_pages`]
//! does both; [`write_pages`] and [`write_font`] expose the two steps, and
//! [`FontDocument`] renders the text without touching the file system.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use bmfont_writer::{BitmapFontData, FontInfo, FontMetrics, GlyphRecord, PageImage};
//!
//! # fn main() -> Result<(), bmfont_writer::Error> {
//! let mut font = BitmapFontData::new(FontMetrics {
//!     line_height: 16.0,
//!     cap_height: 11.0,
//!     ascent: 2.0,
//!     flipped: true,
//! });
//! font.push_glyph(GlyphRecord::new('A' as u32).with_source_rect(0, 0, 9, 11));
//!
//! let pages = [PageImage::transparent(256, 256)];
//! let info = FontInfo::new("Hack", 16);
//! bmfont_writer::write_font_with_pages(&font, &pages, Path::new("out/hack.fnt"), Some(&info))?;
//! # Ok(())
//! # }
//! ```
//!
//! [BMFont]: https://www.angelcode.com/products/bmfont/doc/file_format.html

mod bitmap_font;
mod document;
mod error;
mod kerning;
mod pages;
mod text_output;

pub use bitmap_font::{write_font, write_font_with_pages};
pub use bmfont_data::{
    BitmapFontData, FontInfo, FontMetrics, GlyphRecord, Padding, PageImage, PageImageError,
    PageSet, Spacing,
};
pub use document::FontDocument;
pub use error::Error;
pub use kerning::{KerningPair, kerning_pairs};
pub use pages::{PageWriter, PngPageWriter, write_pages, write_pages_with};
pub use text_output::encode_text;
