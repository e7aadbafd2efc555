//! Data model for bitmap fonts written in the BMFont format.

mod font;
mod glyph;
mod info;
mod page;

pub use font::{BitmapFontData, FontMetrics};
pub use glyph::GlyphRecord;
pub use info::{FontInfo, Padding, Spacing};
pub use page::{PageImage, PageImageError, PageSet};
