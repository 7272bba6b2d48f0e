//! Line-record codec
//!
//! Stores a [`PlayerRecord`] as six lines, each terminated by `\n`:
//!
//! ```text
//! <name>
//! <hp>
//! <max_hp>
//! <level>
//! <weapon>      (empty line when unequipped)
//! <armor>       (empty line when unequipped)
//! ```
//!
//! ## Decoding Rules
//!
//! - Name is line 1, verbatim.
//! - hp, max_hp, level are lines 2-4 and must parse as `i32`. A missing line
//!   parses as empty text and fails.
//! - weapon and armor are lines 5-6. A missing line leaves the slot
//!   unequipped.
//!
//! [`decode`] collapses I/O failures to `Ok(None)` but lets numeric-format
//! failures escape as `Err`. [`try_decode`] reports every failure as `Err`.
//!
//! Text fields are written as-is; a name containing a newline will not load
//! back.

use crate::file;
use questsave_core::{CodecError, PlayerRecord, Result};
use std::path::Path;
use tracing::{info, warn};

/// Number of lines in a complete record.
pub const LINE_COUNT: usize = 6;

/// Render a record in the six-line format.
pub fn to_text(record: &PlayerRecord) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n",
        record.name(),
        record.hp(),
        record.max_hp(),
        record.level(),
        record.weapon(),
        record.armor(),
    )
}

/// Rebuild a record from its lines (terminators already stripped).
///
/// Lines past the sixth are ignored.
pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<PlayerRecord> {
    let line = |i: usize| lines.get(i).map(AsRef::as_ref);

    let name = line(0).unwrap_or_default();
    let hp = CodecError::parse_int("hp", line(1).unwrap_or_default())?;
    let max_hp = CodecError::parse_int("max_hp", line(2).unwrap_or_default())?;
    let level = CodecError::parse_int("level", line(3).unwrap_or_default())?;

    let mut record = PlayerRecord::new(name, max_hp, level);
    record.set_hp(hp);
    record.set_weapon(line(4));
    record.set_armor(line(5));
    Ok(record)
}

/// Write `record` to `path`, truncating any existing content.
pub fn encode(record: &PlayerRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match file::write_text(path, &to_text(record)) {
        Ok(()) => {
            info!("セーブ完了: {}", path.display());
            Ok(())
        }
        Err(e) => {
            warn!("セーブ失敗: {}", e);
            Err(e)
        }
    }
}

/// Load a record from `path`.
///
/// Returns `Ok(None)` when the file cannot be opened or read; the failure is
/// logged. A malformed hp, max_hp, or level is returned as
/// [`CodecError::InvalidNumber`] and is not logged here.
pub fn decode(path: impl AsRef<Path>) -> Result<Option<PlayerRecord>> {
    let path = path.as_ref();
    let lines = match file::read_lines(path, LINE_COUNT) {
        Ok(lines) => lines,
        Err(e) => {
            warn!("ロード失敗: {}", e);
            return Ok(None);
        }
    };

    let record = from_lines(&lines)?;
    info!("ロード完了: {}", path.display());
    Ok(Some(record))
}

/// Load a record from `path`, reporting every failure as `Err`.
pub fn try_decode(path: impl AsRef<Path>) -> Result<PlayerRecord> {
    from_lines(&file::read_lines(path.as_ref(), LINE_COUNT)?)
}
