use std::{borrow::Cow, path::Path};

use bmfont_data::{BitmapFontData, FontInfo, PageImage, PageSet};

use crate::{Error, FontDocument, pages::write_pages, text_output::write_text};

/// Writes `font` as a BMFont text file at `out_fnt`.
///
/// `pages` holds the file reference of each atlas page, indexed by the
/// glyphs' `page` field; references are written as given, so they are
/// usually relative to the `.fnt` file's directory.
///
/// Without `info`, the `info` line is synthesized from defaults with the
/// file stem of `out_fnt` as face name. `scale_w`/`scale_h` are written to
/// the `common` line as-is; for compatibility with other BMFont tools they
/// should be the size of the atlas pages.
///
/// The file is written in the encoding named by [`FontInfo::charset`],
/// falling back to UTF-8 when absent or empty. Labels are resolved as by
/// [`encode_text`](crate::encode_text): `iso-8859-1` means windows-1252, and
/// unrepresentable characters are written as `?`.
///
/// # Errors
/// Returns [`Error::UnsupportedCharset`] for an unknown charset label and
/// [`Error::Io`] if the file cannot be written.
pub fn write_font(
    font: &BitmapFontData,
    pages: &PageSet,
    out_fnt: &Path,
    info: Option<&FontInfo>,
    scale_w: i32,
    scale_h: i32,
) -> Result<(), Error> {
    let mut document = FontDocument::from_font(font, pages)
        .with_default_face(&file_stem(out_fnt))
        .with_scale(scale_w, scale_h);
    if let Some(info) = info {
        document = document.with_info(info);
    }

    let charset = info.and_then(FontInfo::effective_charset);
    write_text(out_fnt, &document.to_string(), charset)?;

    tracing::info!(
        path = %out_fnt.display(),
        glyphs = document.glyph_count(),
        pages = pages.len(),
        "bitmap font written"
    );

    Ok(())
}

/// Writes the atlas `pages` as PNG files next to `out_fnt`, then the font
/// itself, returning the page references.
///
/// Page files are named after the stem of `out_fnt` (`font.fnt` gets
/// `font.png`, or `font_0.png`, `font_1.png`, ... for several pages), and
/// `scaleW`/`scaleH` are taken from the first page.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] without writing anything when `pages`
/// is empty; otherwise see [`write_pages`] and [`write_font`].
pub fn write_font_with_pages(
    font: &BitmapFontData,
    pages: &[PageImage],
    out_fnt: &Path,
    info: Option<&FontInfo>,
) -> Result<PageSet, Error> {
    let first = pages.first().ok_or_else(Error::no_pages)?;
    let (scale_w, scale_h) = (saturating_i32(first.width()), saturating_i32(first.height()));

    let output_dir = out_fnt.parent().unwrap_or(Path::new(""));
    let refs = write_pages(pages, output_dir, &file_stem(out_fnt))?;
    write_font(font, &refs, out_fnt, info, scale_w, scale_h)?;

    Ok(refs)
}

fn file_stem(path: &Path) -> Cow<'_, str> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default()
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bmfont_data::{FontMetrics, GlyphRecord};

    use super::*;

    fn sample_font() -> BitmapFontData {
        let mut font = BitmapFontData::new(FontMetrics {
            line_height: 14.0,
            cap_height: 9.0,
            ascent: 2.0,
            flipped: false,
        });
        font.push_glyph(
            GlyphRecord::new('A' as u32)
                .with_source_rect(0, 0, 7, 9)
                .with_offsets(0, 0, 8)
                .with_kerning('V' as u32, -1),
        );
        font.push_glyph(
            GlyphRecord::new('V' as u32)
                .with_source_rect(8, 0, 7, 9)
                .with_offsets(0, 0, 8)
                .with_page(1),
        );
        font
    }

    #[test]
    fn writes_font_with_default_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hack.fnt");
        let pages = PageSet::new(["hack.png"]);

        write_font(&sample_font(), &pages, &path, None, 64, 32).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("info face=\"hack\" size=12 bold=0 italic=0 charset=\"\""));
        assert_eq!(
            lines[1],
            "common lineHeight=14 base=11 scaleW=64 scaleH=32 pages=1 packed=0 \
             alphaChnl=0 redChnl=0 greenChnl=0 blueChnl=0"
        );
        assert_eq!(lines[2], "page id=0 file=\"hack.png\"");
        assert_eq!(lines[3], "chars count=2");
        assert!(lines[4].contains("yoffset=-9   "));
        assert_eq!(lines[6], "kernings count=1");
        assert_eq!(lines[7], "kerning first=65 second=86 amount=-1");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn charset_selects_file_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.fnt");
        let pages = PageSet::new(["font.png"]);
        let info = FontInfo::new("Grüße", 16).with_charset("iso-8859-1");

        write_font(&sample_font(), &pages, &path, Some(&info), 64, 64).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"info face=\"Gr\xFC\xDFe\" size=16"));
    }

    #[test]
    fn empty_charset_falls_back_to_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.fnt");
        let pages = PageSet::new(["font.png"]);
        let info = FontInfo::new("Grüße", 16).with_charset("");

        write_font(&sample_font(), &pages, &path, Some(&info), 64, 64).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("info face=\"Grüße\" size=16 bold=0 italic=0 charset=\"\""));
    }

    #[test]
    fn writes_pages_next_to_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.fnt");
        let pages = vec![PageImage::transparent(32, 16); 2];

        let refs = write_font_with_pages(&sample_font(), &pages, &path, None).unwrap();

        assert_eq!(refs.len(), 2);
        assert!(dir.path().join("atlas_0.png").is_file());
        assert!(dir.path().join("atlas_1.png").is_file());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("scaleW=32 scaleH=16 pages=2"));
        assert!(text.contains("page id=0 file=\"atlas_0.png\"\npage id=1 file=\"atlas_1.png\"\n"));
    }

    #[test]
    fn no_pages_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.fnt");

        let result = write_font_with_pages(&sample_font(), &[], &path, None);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
