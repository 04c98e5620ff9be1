// src/core/charset.rs
//! Byte → text for saved pages.
//!
//! Order: BOM, then a `<meta>` charset declaration in the first 1024 bytes
//! (`<meta charset=..>` or `http-equiv` `content="..; charset=.."`), then
//! UTF-8. Malformed sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

const PRESCAN_LEN: usize = 1024;

pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    pub had_errors: bool,
}

pub fn decode_html(bytes: &[u8]) -> Decoded {
    let encoding = detect_encoding(bytes);
    // `decode` strips a matching BOM itself.
    let (text, used, had_errors) = encoding.decode(bytes);
    Decoded {
        text: text.into_owned(),
        encoding: used,
        had_errors,
    }
}

pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((enc, _bom_len)) = Encoding::for_bom(bytes) {
        return enc;
    }
    match meta_charset(bytes) {
        // A page that made it to us as bytes can't really be UTF-16 without a BOM.
        Some(enc) if enc == UTF_16LE || enc == UTF_16BE => UTF_8,
        Some(enc) => enc,
        None => UTF_8,
    }
}

/// Charset label from the first `<meta>` tag that declares one.
fn meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(PRESCAN_LEN)];
    let lc = head.to_ascii_lowercase();

    let mut pos = 0usize;
    while let Some(rel) = find(&lc[pos..], b"<meta") {
        let start = pos + rel;
        let end = lc[start..].iter().position(|&b| b == b'>').map_or(lc.len(), |e| start + e);
        let tag = &lc[start..end];
        pos = end;

        let Some(cs) = find(tag, b"charset") else { continue };
        let rest = &tag[cs + b"charset".len()..];
        let rest = trim_start(rest);
        let Some(rest) = rest.strip_prefix(b"=") else { continue };
        let rest = trim_start(rest);
        let rest = rest.strip_prefix(b"\"").or_else(|| rest.strip_prefix(b"'")).unwrap_or(rest);

        let label_len = rest
            .iter()
            .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'/' | b'>') || b.is_ascii_whitespace())
            .unwrap_or(rest.len());
        if let Some(enc) = Encoding::for_label(&rest[..label_len]) {
            return Some(enc);
        }
    }
    None
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn trim_start(s: &[u8]) -> &[u8] {
    let n = s.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &s[n..]
}
