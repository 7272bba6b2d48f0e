//! Scoped file access shared by the codecs.
//!
//! Every call opens its own handle and drops it before returning, on the
//! error path as well as the success path. Writes go through a `BufWriter`
//! that is flushed explicitly so a failed flush surfaces as an error instead
//! of being swallowed on drop.

use questsave_core::{CodecError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Create or truncate `path` and write `text` to it.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| CodecError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| CodecError::io(path, e))?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Read at most `limit` lines from `path`.
///
/// A line ends at `\n`, `\r\n`, or a lone `\r`; the terminator is stripped.
/// A file with fewer lines yields a shorter vector; this is not an error.
pub(crate) fn read_lines(path: &Path, limit: usize) -> Result<Vec<String>> {
    let mut text = String::new();
    File::open(path)
        .and_then(|file| BufReader::new(file).read_to_string(&mut text))
        .map_err(|e| CodecError::io(path, e))?;
    let lines: Vec<String> = split_lines(&text)
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect();
    debug!("Read {} line(s) from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split `text` into lines. A trailing terminator does not start a new line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(&rest[..end]);
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Read the first line of `path`, or `None` if the file is empty.
pub(crate) fn read_first_line(path: &Path) -> Result<Option<String>> {
    Ok(read_lines(path, 1)?.into_iter().next())
}
