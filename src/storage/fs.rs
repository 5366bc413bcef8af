//! Module to write saved albums to the file system

use std::path::Path;

use sanitize_filename::sanitize;

use crate::storage::error::PersistenceError;

const FILE_SUFFIX: &str = "_album.txt";
const FALLBACK_STEM: &str = "untitled";
/// Longest file name most file systems accept, in bytes
const MAX_FILE_NAME: usize = 255;

/// Derives the file name for an album: `{name}_album.txt`.
///
/// The name is sanitized first, which removes path separators and
/// characters or names the file system would reject. Long names are cut so
/// the whole file name, suffix included, stays within 255 bytes.
pub fn album_file_name(name: &str) -> String {
    let stem = sanitize(name);
    let stem = truncate_on_char_boundary(&stem, MAX_FILE_NAME - FILE_SUFFIX.len());
    let stem = if stem.trim().is_empty() {
        FALLBACK_STEM
    } else {
        stem
    };
    format!("{stem}{FILE_SUFFIX}")
}

fn truncate_on_char_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub fn write_text(path: &Path, text: &str) -> Result<(), PersistenceError> {
    std::fs::write(path, text).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}
