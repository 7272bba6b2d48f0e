//! CSV triple codec
//!
//! Stores a [`StatusTriple`] as one comma-separated line with no trailing
//! newline: `<hp>,<mp>,<level>`.
//!
//! Decoding reads the first line only and examines the fields in order, so
//! the first bad field decides the error: `abc,50` is a numeric-format
//! failure, `100,50` is a shape failure. Fields past the third are ignored.
//!
//! Field splitting drops trailing empty fields (`100,50,` has two fields),
//! except that a line with no comma at all is a single field.

use crate::file;
use questsave_core::{CodecError, Result, StatusTriple};
use std::path::Path;
use tracing::{info, warn};

/// Render a triple as its CSV line.
pub fn to_line(triple: &StatusTriple) -> String {
    format!("{},{},{}", triple.hp, triple.mp, triple.level)
}

fn split_fields(line: &str) -> Vec<&str> {
    if !line.contains(',') {
        return vec![line];
    }
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

/// Parse one CSV line into a triple.
pub fn from_line(line: &str) -> Result<StatusTriple> {
    let fields = split_fields(line);
    let mut values = [0i32; StatusTriple::FIELD_COUNT];

    for (i, &name) in StatusTriple::FIELD_NAMES.iter().enumerate() {
        let field = fields.get(i).ok_or(CodecError::Shape {
            expected: StatusTriple::FIELD_COUNT,
            found: fields.len(),
        })?;
        values[i] = CodecError::parse_int(name, field)?;
    }

    Ok(StatusTriple::from(values))
}

/// Write `hp,mp,level` to `path`, truncating any existing content.
pub fn encode(hp: i32, mp: i32, level: i32, path: impl AsRef<Path>) -> Result<()> {
    encode_triple(&StatusTriple::new(hp, mp, level), path)
}

/// Write `triple` to `path`, truncating any existing content.
pub fn encode_triple(triple: &StatusTriple, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match file::write_text(path, &to_line(triple)) {
        Ok(()) => {
            info!("ステータス保存完了: {}", triple);
            Ok(())
        }
        Err(e) => {
            warn!("保存失敗: {}", e);
            Err(e)
        }
    }
}

/// Load a triple from `path`.
///
/// Every failure is logged with a message specific to its kind and collapses
/// to `None`. Use [`try_decode`] to branch on the kind.
pub fn decode(path: impl AsRef<Path>) -> Option<StatusTriple> {
    match try_decode(path) {
        Ok(triple) => {
            info!("ステータス読み込み完了: {}", triple);
            Some(triple)
        }
        Err(CodecError::InvalidNumber { .. }) => {
            warn!("データ形式エラー: 数値ではないデータが含まれています");
            None
        }
        Err(CodecError::Shape { .. } | CodecError::Empty { .. }) => {
            warn!("データ不足エラー: HP、MP、レベルの3つのデータが必要です");
            None
        }
        Err(e @ CodecError::Io { .. }) => {
            warn!("読み込み失敗: {}", e);
            None
        }
    }
}

/// Load a triple from `path`, reporting the failure kind.
pub fn try_decode(path: impl AsRef<Path>) -> Result<StatusTriple> {
    // An empty file has no fields at all, not one empty field.
    let Some(line) = file::read_first_line(path.as_ref())? else {
        return Err(CodecError::Shape {
            expected: StatusTriple::FIELD_COUNT,
            found: 0,
        });
    };
    from_line(&line)
}
