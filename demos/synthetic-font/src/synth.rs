use bmfont_data::{BitmapFontData, FontMetrics, GlyphRecord, PageImage};

const CELL_W: u32 = 8;
const CELL_H: u32 = 12;
const COLUMNS: u32 = 16;

/// Glyphs of the demo font.
pub const CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,!?";

/// Classic kerning pairs, applied when both glyphs are present.
const KERNING: &[(char, char, i32)] = &[
    ('A', 'V', -1),
    ('A', 'W', -1),
    ('A', 'Y', -1),
    ('L', 'T', -1),
    ('L', 'Y', -1),
    ('T', 'A', -1),
    ('V', 'A', -1),
    ('W', 'A', -1),
    ('Y', 'A', -1),
    ('F', '.', -2),
    ('P', '.', -2),
    ('T', '.', -2),
    ('T', ',', -2),
];

/// A generated font with its atlas pages.
pub struct SyntheticFont {
    pub data: BitmapFontData,
    pub pages: Vec<PageImage>,
}

/// Generates a blocky, y-up font spread evenly over `page_count` pages.
///
/// Each glyph is a bordered cell with a pattern derived from its codepoint,
/// which is enough to tell glyphs apart when inspecting the atlas.
pub fn generate(page_count: usize) -> SyntheticFont {
    let page_count = page_count.max(1);
    let chars: Vec<char> = CHARSET.chars().collect();
    let per_page = chars.len().div_ceil(page_count);
    let rows = (per_page as u32).div_ceil(COLUMNS);

    let mut pages = vec![PageImage::transparent(COLUMNS * CELL_W, rows * CELL_H); page_count];
    let mut data = BitmapFontData::new(FontMetrics {
        line_height: (CELL_H + 2) as f32,
        cap_height: (CELL_H - 2) as f32,
        ascent: 2.0,
        flipped: false,
    });

    for (i, &ch) in chars.iter().enumerate() {
        let page = i / per_page;
        let slot = (i % per_page) as u32;
        let (x, y) = ((slot % COLUMNS) * CELL_W, (slot / COLUMNS) * CELL_H);

        draw_glyph(&mut pages[page], x, y, ch);
        data.push_glyph(
            GlyphRecord::new(ch as u32)
                .with_source_rect(x as i32, y as i32, CELL_W as i32, CELL_H as i32)
                .with_offsets(0, 0, CELL_W as i32 + 1)
                .with_page(page as u32),
        );
    }

    for &(first, second, amount) in KERNING {
        let both_present = data.glyph(second as u32).is_some();
        if let Some(glyph) = data.glyph_mut(first as u32).filter(|_| both_present) {
            glyph.set_kerning(second as u32, amount);
        }
    }

    SyntheticFont { data, pages }
}

fn draw_glyph(page: &mut PageImage, x0: u32, y0: u32, ch: char) {
    const INK: [u8; 4] = [255, 255, 255, 255];
    let bits = (ch as u32).wrapping_mul(0x9E37_79B9);

    for dy in 0..CELL_H {
        for dx in 0..CELL_W {
            let border = dx == 0 || dy == 0 || dx == CELL_W - 1 || dy == CELL_H - 1;
            let inner = (bits >> ((dx + dy * 3) % 32)) & 1 == 1;
            if border || inner {
                page.put_pixel(x0 + dx, y0 + dy, INK);
            }
        }
    }
}
