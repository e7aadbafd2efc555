use std::collections::HashMap;

use bmfont_data::GlyphRecord;

/// A non-zero kerning adjustment between two adjacent glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KerningPair {
    /// Codepoint of the leading glyph
    pub first: u32,
    /// Codepoint of the following glyph
    pub second: u32,
    /// Signed horizontal adjustment in pixels
    pub amount: i32,
}

/// Collects the kerning pairs among `glyphs`.
///
/// The result is ordered as an exhaustive scan over every ordered
/// `(first, second)` pair would produce it: `first` in glyph order, and for
/// each `first`, `second` in glyph order. Only adjustments whose `second`
/// is itself part of `glyphs` are included.
///
/// Rather than querying all n² pairs, each glyph's own (sparse) kerning
/// table is resolved against a codepoint-to-position index.
pub fn kerning_pairs(glyphs: &[&GlyphRecord]) -> Vec<KerningPair> {
    let mut positions: HashMap<u32, Vec<usize>> = HashMap::with_capacity(glyphs.len());
    for (pos, glyph) in glyphs.iter().enumerate() {
        positions.entry(glyph.id).or_default().push(pos);
    }

    let mut pairs = Vec::new();
    let mut row: Vec<(usize, u32, i32)> = Vec::new();
    for first in glyphs {
        row.clear();
        for (second, amount) in first.kerning_entries() {
            if let Some(at) = positions.get(&second) {
                row.extend(at.iter().map(|&pos| (pos, second, amount)));
            }
        }

        row.sort_unstable_by_key(|&(pos, _, _)| pos);
        pairs.extend(
            row.iter()
                .map(|&(_, second, amount)| KerningPair { first: first.id, second, amount }),
        );
    }

    pairs
}
