//! Bounded file reading.
//!
//! Two readers with different ceilings semantics: the search reader skips
//! anything over the budget (the caller counts it), while the direct reader
//! truncates and flags instead of failing.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, WavecheckError};

/// Load a file as text for searching.
///
/// Returns `None` when the target is not a regular file, exceeds
/// `max_bytes`, or does not decode as UTF-8; callers treat that as a soft
/// skip, never a failure.
pub fn read_text_limited(path: &Path, max_bytes: u64) -> Option<String> {
    let metadata = fs::metadata(path).ok()?;
    if !metadata.is_file() || metadata.len() > max_bytes {
        return None;
    }
    fs::read_to_string(path).ok()
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BoundedRead {
    pub text: String,
    pub truncated: bool,
}

/// Read up to `max_bytes` bytes of a file for a direct read.
///
/// A larger file yields `truncated: true` with exactly the first
/// `max_bytes` bytes rather than an error; callers that need the full
/// contents must request a larger bound explicitly.
pub fn read_file_bounded(path: &Path, max_bytes: u64) -> Result<BoundedRead> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(WavecheckError::NotAFile(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    let mut buf = Vec::new();
    file.take(max_bytes).read_to_end(&mut buf)?;
    let truncated = metadata.len() > max_bytes;
    Ok(BoundedRead {
        text: String::from_utf8_lossy(&buf).into_owned(),
        truncated,
    })
}
