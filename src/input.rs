use anyhow::{Context, Result, bail};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One side of a diff: either raw multi-line text or lines that were
/// already split by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource<'a> {
    Text(&'a str),
    Lines(Vec<&'a str>),
}

impl<'a> LineSource<'a> {
    pub fn lines(&self) -> Vec<&'a str> {
        match self {
            LineSource::Text(text) => split_lines(text),
            LineSource::Lines(lines) => lines.clone(),
        }
    }
}

impl<'a> From<&'a str> for LineSource<'a> {
    fn from(text: &'a str) -> Self {
        LineSource::Text(text)
    }
}

impl<'a> From<&'a String> for LineSource<'a> {
    fn from(text: &'a String) -> Self {
        LineSource::Text(text.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for LineSource<'a> {
    fn from(lines: Vec<&'a str>) -> Self {
        LineSource::Lines(lines)
    }
}

impl<'a> From<&'a [&'a str]> for LineSource<'a> {
    fn from(lines: &'a [&'a str]) -> Self {
        LineSource::Lines(lines.to_vec())
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for LineSource<'a> {
    fn from(lines: &'a [&'a str; N]) -> Self {
        LineSource::Lines(lines.to_vec())
    }
}

impl<'a> From<&'a [String]> for LineSource<'a> {
    fn from(lines: &'a [String]) -> Self {
        LineSource::Lines(lines.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for LineSource<'a> {
    fn from(lines: &'a Vec<String>) -> Self {
        LineSource::from(lines.as_slice())
    }
}

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text on line boundaries, dropping the terminators. `\r\n` counts
/// as one break; `\r`, `\n`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators each end a
/// line on their own. A trailing terminator does not produce an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(LINE_BREAKS) {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let terminator = if rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    rest[idx..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Read a text file for diffing. Binary content (NUL bytes) and invalid
/// UTF-8 are rejected; a leading byte-order mark is dropped.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    decode_text(bytes).with_context(|| format!("cannot diff {}", path.display()))
}

pub fn decode_text(mut bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    if bytes.contains(&0) {
        bail!("binary content");
    }
    String::from_utf8(bytes).context("content is not valid UTF-8")
}
