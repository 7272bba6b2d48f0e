//! Single-string codec
//!
//! Stores one piece of text (a player name) as the raw file content with no
//! trailing newline. Decoding returns the first line verbatim.

use crate::file;
use questsave_core::{CodecError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Write `text` to `path`, truncating any existing content.
pub fn encode(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match file::write_text(path, text) {
        Ok(()) => {
            info!("名前を保存: {} -> {}", text, path.display());
            Ok(())
        }
        Err(e) => {
            warn!("保存失敗: {}", e);
            Err(e)
        }
    }
}

/// Load the first line of `path`.
///
/// Failures are logged and collapse to `None`.
pub fn decode(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match try_decode(path) {
        Ok(text) => {
            info!("名前を読み込み: {} <- {}", text, path.display());
            Some(text)
        }
        Err(e) => {
            warn!("読み込み失敗: {}", e);
            None
        }
    }
}

/// Load the first line of `path`.
///
/// An empty file is [`CodecError::Empty`].
pub fn try_decode(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    file::read_first_line(path)?.ok_or_else(|| CodecError::Empty {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_capture::capture;
    use tempfile::TempDir;

    #[test]
    fn test_name_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player_name.txt");

        encode("勇者アレン", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "勇者アレン");
        assert_eq!(decode(&path).as_deref(), Some("勇者アレン"));
    }

    #[test]
    fn test_decode_returns_first_line_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player_name.txt");
        std::fs::write(&path, "勇者アレン\n魔法使い\n").unwrap();

        assert_eq!(try_decode(&path).unwrap(), "勇者アレン");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player_name.txt");
        encode("  spaced  ", &path).unwrap();
        assert_eq!(try_decode(&path).unwrap(), "  spaced  ");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        assert_eq!(decode(&path), None);
        assert!(try_decode(&path).unwrap_err().is_io());
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player_name.txt");
        encode("", &path).unwrap();

        assert_eq!(decode(&path), None);
        assert!(matches!(
            try_decode(&path).unwrap_err(),
            CodecError::Empty { .. }
        ));
    }

    #[test]
    fn test_load_logs_name_and_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player_name.txt");
        encode("勇者アレン", &path).unwrap();

        let (_, logs) = capture(|| decode(&path));
        assert!(logs.contains("名前を読み込み: 勇者アレン"), "{logs}");

        let (result, logs) = capture(|| decode(dir.path().join("missing.txt")));
        assert_eq!(result, None);
        assert!(logs.contains("読み込み失敗"), "{logs}");
    }

    #[test]
    fn test_encode_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player_name.txt");
        encode("a very long previous name", &path).unwrap();
        encode("短い", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "短い");
    }
}
