//! Byte decoding helpers.

use std::borrow::Cow;

/// How far into the document to look for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Decode bytes to a string, handling legacy encodings.
///
/// 1. UTF-8 (a BOM is handled by encoding_rs)
/// 2. The hint encoding, if the bytes are not valid UTF-8
/// 3. Windows-1252, a superset of ISO-8859-1
///
/// Borrows when the input is already valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find a declared charset near the start of a document.
///
/// Checks an XML declaration (`<?xml ... encoding="..."?>`) first, then the
/// first `charset=` token, which covers both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
pub fn sniff_charset(bytes: &[u8]) -> Option<&str> {
    extract_xml_encoding(bytes).or_else(|| extract_meta_charset(bytes))
}

/// Extract the encoding from an XML declaration.
pub fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(100)];

    let xml_start = prefix.windows(5).position(|w| w == b"<?xml")?;
    let after_xml = &prefix[xml_start..];

    let enc_pos = after_xml
        .windows(9)
        .position(|w| w.eq_ignore_ascii_case(b"encoding="))?;

    quoted_value(&after_xml[enc_pos + 9..])
}

fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(SNIFF_LIMIT)];

    let pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let after = &prefix[pos + 8..];

    if let Some(value) = quoted_value(after) {
        return Some(value);
    }

    // Unquoted: runs until whitespace, a quote, `;`, or the tag end.
    let end = after
        .iter()
        .position(|&b| b.is_ascii_whitespace() || matches!(b, b'"' | b'\'' | b';' | b'>' | b'/'))
        .unwrap_or(after.len());
    if end == 0 {
        return None;
    }
    std::str::from_utf8(&after[..end]).ok()
}

fn quoted_value(bytes: &[u8]) -> Option<&str> {
    let quote = *bytes.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let end = bytes[1..].iter().position(|&b| b == quote)? + 1;
    std::str::from_utf8(&bytes[1..end]).ok()
}
