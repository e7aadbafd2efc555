use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use bmfont_data::{PageImage, PageSet};

use crate::Error;

/// Persists a single atlas page.
pub trait PageWriter {
    /// Writes `page` to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or encoded.
    fn write_page(&self, page: &PageImage, path: &Path) -> Result<(), Error>;
}

/// Writes pages as 8-bit RGBA PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngPageWriter;

impl PageWriter for PngPageWriter {
    fn write_page(&self, page: &PageImage, path: &Path) -> Result<(), Error> {
        let mut out = BufWriter::new(File::create(path)?);

        let mut encoder = png::Encoder::new(&mut out, page.width(), page.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(page.pixels())?;
        writer.finish()?;

        // dropping a BufWriter discards flush errors
        out.flush()?;

        Ok(())
    }
}

/// Writes `pages` as PNG files into `output_dir` and returns their file
/// references, named after `base_name` (see [`PageSet::png_pages`]).
///
/// The pages are neither consumed nor modified.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `pages` is empty, in which case
/// nothing is written. I/O and encoding failures are returned as they occur;
/// pages written before the failing one are left in place.
pub fn write_pages(
    pages: &[PageImage],
    output_dir: &Path,
    base_name: &str,
) -> Result<PageSet, Error> {
    write_pages_with(&PngPageWriter, pages, output_dir, base_name)
}

/// Like [`write_pages`], persisting each page through `writer`.
///
/// # Errors
/// See [`write_pages`].
pub fn write_pages_with<W: PageWriter + ?Sized>(
    writer: &W,
    pages: &[PageImage],
    output_dir: &Path,
    base_name: &str,
) -> Result<PageSet, Error> {
    if pages.is_empty() {
        return Err(Error::no_pages());
    }

    let refs = PageSet::png_pages(base_name, pages.len());
    for ((id, file), page) in refs.iter().zip(pages) {
        let path = output_dir.join(file);
        tracing::debug!(
            page = id,
            width = page.width(),
            height = page.height(),
            path = %path.display(),
            "writing atlas page"
        );

        writer.write_page(page, &path)?;
    }

    Ok(refs)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs, io::BufReader, path::PathBuf};

    use super::*;

    #[derive(Default)]
    struct RecordingWriter {
        written: RefCell<Vec<PathBuf>>,
        fail_at: Option<usize>,
    }

    impl PageWriter for RecordingWriter {
        fn write_page(&self, _page: &PageImage, path: &Path) -> Result<(), Error> {
            let mut written = self.written.borrow_mut();
            if self.fail_at == Some(written.len()) {
                return Err(std::io::Error::other("disk full").into());
            }

            written.push(path.to_path_buf());
            Ok(())
        }
    }

    fn png_size(path: &Path) -> (u32, u32) {
        let file = File::open(path).unwrap();
        let reader = png::Decoder::new(BufReader::new(file))
            .read_info()
            .unwrap();
        let info = reader.info();
        (info.width, info.height)
    }

    #[test]
    fn empty_page_set_is_rejected() {
        let writer = RecordingWriter::default();
        let result = write_pages_with(&writer, &[], Path::new("out"), "font");

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(writer.written.borrow().is_empty());
    }

    #[test]
    fn pages_are_written_under_derived_names() {
        let writer = RecordingWriter::default();
        let pages = vec![PageImage::transparent(4, 4); 3];

        let refs = write_pages_with(&writer, &pages, Path::new("out"), "atlas").unwrap();

        let names: Vec<&str> = refs.iter().map(|(_, r)| r).collect();
        assert_eq!(names, vec!["atlas_0.png", "atlas_1.png", "atlas_2.png"]);
        assert_eq!(*writer.written.borrow(), vec![
            PathBuf::from("out/atlas_0.png"),
            PathBuf::from("out/atlas_1.png"),
            PathBuf::from("out/atlas_2.png"),
        ]);
    }

    #[test]
    fn failure_keeps_earlier_pages_and_stops() {
        let writer = RecordingWriter { fail_at: Some(1), ..RecordingWriter::default() };
        let pages = vec![PageImage::transparent(1, 1); 3];

        let result = write_pages_with(&writer, &pages, Path::new("out"), "atlas");

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(*writer.written.borrow(), vec![PathBuf::from("out/atlas_0.png")]);
    }

    #[test]
    fn single_png_page_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = PageImage::transparent(16, 8);
        page.put_pixel(3, 3, [255, 255, 255, 255]);

        let refs = write_pages(std::slice::from_ref(&page), dir.path(), "font").unwrap();

        assert_eq!(refs.get(0), Some("font.png"));
        assert_eq!(png_size(&dir.path().join("font.png")), (16, 8));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_disk_is_an_io_error() {
        let mut page = PageImage::transparent(128, 128);
        let mut seed = 0x2545_F491_u32;
        for y in 0..128 {
            for x in 0..128 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                page.put_pixel(x, y, seed.to_le_bytes());
            }
        }

        let result = PngPageWriter.write_page(&page, Path::new("/dev/full"));

        assert!(matches!(result, Err(Error::Io(_))), "{result:?}");
    }

    #[test]
    fn missing_output_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let pages = [PageImage::transparent(2, 2)];

        let result = write_pages(&pages, &dir.path().join("absent"), "font");

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
