//! Exclusion and extension filtering.

use std::path::Path;

/// True if ANY pattern (global first, then root-specific) is a literal
/// substring of the separator-normalized path. No glob or regex semantics;
/// the first match short-circuits.
pub fn should_exclude(path: &Path, global: &[String], per_root: &[String]) -> bool {
    if global.is_empty() && per_root.is_empty() {
        return false;
    }
    let normalized = path.to_string_lossy().replace('\\', "/");
    global
        .iter()
        .chain(per_root.iter())
        .any(|pattern| !pattern.is_empty() && normalized.contains(pattern.as_str()))
}

/// True if the file's extension is in the allowed set (case-insensitive).
/// An empty set allows every file; a file without an extension only passes
/// when the set is empty.
pub fn extension_allowed(path: &Path, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => allowed
            .iter()
            .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(ext)),
        None => false,
    }
}
