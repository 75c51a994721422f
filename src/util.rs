//! Small shared helpers for checksums and URL-readable strings.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use sha2::{Digest, Sha512};

/// Characters that are percent-encoded when building anchor fragments.
const FRAGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'\\')
    .add(b'^')
    .add(b'[')
    .add(b']')
    .add(b'|');

/// Hex-encoded SHA-512 digest of the given bytes.
pub fn sha512_hex(data: &[u8]) -> String {
    let digest = Sha512::digest(data);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Converts a section title into a URL-readable anchor fragment.
///
/// Whitespace runs collapse into a single dash; characters that are not
/// valid in a URL fragment are percent-encoded.
pub fn url_readable_fragment(title: &str) -> String {
    let dashed = title
        .trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    utf8_percent_encode(&dashed, FRAGMENT_ENCODE_SET).to_string()
}

/// Splits file contents into lines, preserving empty lines.
pub fn split_lines(contents: &str) -> Vec<String> {
    contents.split('\n').map(str::to_string).collect()
}
