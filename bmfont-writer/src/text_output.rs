use std::{borrow::Cow, fs::File, io::Write, path::Path};

use encoding_rs::{Encoding, EncoderResult, UTF_8, UTF_16BE, UTF_16LE};

use crate::Error;

/// Encodes `text` for the given charset label; `None` means UTF-8.
///
/// Labels follow the WHATWG Encoding Standard (`utf-8`, `utf-16le`,
/// `utf-16be`, `windows-1252`, `shift_jis`, ...). Note that the standard
/// maps `iso-8859-1` and `latin1` to windows-1252, and the bare `utf-16`
/// label to little-endian UTF-16, which is written with a byte order mark.
///
/// The format has no escape syntax, so characters the target encoding
/// cannot represent are written as `?`.
///
/// # Errors
/// Returns [`Error::UnsupportedCharset`] for unknown labels and for
/// decode-only encodings such as `replacement`.
pub fn encode_text<'a>(text: &'a str, charset: Option<&str>) -> Result<Cow<'a, [u8]>, Error> {
    let Some(label) = charset else {
        return Ok(Cow::Borrowed(text.as_bytes()));
    };

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::unsupported_charset(label))?;

    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(text.as_bytes()));
    }
    if encoding == UTF_16LE || encoding == UTF_16BE {
        let with_bom = label.trim().eq_ignore_ascii_case("utf-16");
        return Ok(Cow::Owned(encode_utf16(text, encoding == UTF_16BE, with_bom)));
    }
    if encoding.output_encoding() != encoding {
        return Err(Error::unsupported_charset(label));
    }

    let (bytes, unmappable) = encode_substituting(encoding, text);
    if unmappable > 0 {
        tracing::warn!(
            charset = label,
            encoding = encoding.name(),
            characters = unmappable,
            "text contains characters the charset cannot represent; wrote '?' instead"
        );
    }

    Ok(Cow::Owned(bytes))
}

fn encode_utf16(text: &str, big_endian: bool, with_bom: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 * (text.len() + 1));
    let units = with_bom
        .then_some(0xFEFF_u16)
        .into_iter()
        .chain(text.encode_utf16());

    for unit in units {
        let bytes = if big_endian { unit.to_be_bytes() } else { unit.to_le_bytes() };
        out.extend_from_slice(&bytes);
    }

    out
}

/// Encodes with a single-byte or CJK encoder, substituting `?` for
/// unmappable characters. Returns the bytes and the substitution count.
fn encode_substituting(encoding: &'static Encoding, text: &str) -> (Vec<u8>, usize) {
    let mut encoder = encoding.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .unwrap_or(text.len());
    let mut out = Vec::with_capacity(capacity);
    let mut unmappable = 0;

    let mut src = text;
    loop {
        let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(src, &mut out, true);
        src = &src[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => out.reserve(src.len().max(16)),
            EncoderResult::Unmappable(_) => {
                unmappable += 1;
                out.push(b'?');
            },
        }
    }

    (out, unmappable)
}

/// Writes `text` to `path` in the given charset, truncating existing content.
pub(crate) fn write_text(path: &Path, text: &str, charset: Option<&str>) -> Result<(), Error> {
    let bytes = encode_text(text, charset)?;

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;

    Ok(())
}
