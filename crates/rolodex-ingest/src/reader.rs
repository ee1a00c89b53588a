use crate::error::{IngestError, Result};
use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// One physical input line and its 0-based position. Blank lines keep
/// their position so later line numbers stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub position: usize,
    pub text: String,
}

impl RawLine {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub fn parse_lines(input: &str) -> Vec<RawLine> {
    parse_bytes(input.as_bytes())
}

/// Splits raw bytes on `\n`, `\r\n` or `\r` and decodes each line on its
/// own. Invalid UTF-8 is replaced with U+FFFD, which no field grammar
/// accepts, so such a line ends up in the error list instead of aborting
/// the run.
pub fn parse_bytes(input: &[u8]) -> Vec<RawLine> {
    let mut lines = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let end = rest
            .iter()
            .position(|byte| matches!(byte, b'\n' | b'\r'))
            .unwrap_or(rest.len());
        let position = lines.len();
        lines.push(RawLine {
            position,
            text: decode_line(&rest[..end], position),
        });

        let next = match rest.get(end) {
            Some(b'\r') if rest.get(end + 1) == Some(&b'\n') => end + 2,
            Some(_) => end + 1,
            None => end,
        };
        rest = &rest[next..];
    }
    lines
}

pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<RawLine>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(parse_bytes(&data))
}

pub fn read_file(path: &Path) -> Result<Vec<RawLine>> {
    let data = fs::read(path).map_err(|source| IngestError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_bytes(&data))
}

fn decode_line(bytes: &[u8], position: usize) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!(position, "line is not valid UTF-8");
            text
        }
    }
}
