//! Path resolution and containment checks
//!
//! All user-supplied paths flow through this module before any filesystem
//! access. Two pitfalls shape the code here:
//!
//! - `Path::is_absolute()` is platform-dependent: on Windows `/tmp` is
//!   rooted but not absolute, so security checks must use component-based
//!   analysis instead.
//! - A nominal containment check is not enough for untrusted targets: a
//!   symlink can point outside a root even when its nominal path is
//!   contained. Callers must re-check containment against the *real*
//!   (canonicalized) root and target.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, WavecheckError};

/// Expand a leading `~` to the user's home directory.
///
/// Only the literal shorthand (`~`) or the shorthand followed by a
/// separator (`~/...`) is substituted; anything else (e.g. `~user`) is
/// returned unchanged.
pub fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = input.strip_prefix("~/").or_else(|| input.strip_prefix("~\\")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding component. Does not touch the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve user input to a normalized absolute path.
///
/// The input is trimmed and home-expanded; if still relative it is joined
/// onto `base` (or the process working directory when no base is given).
pub fn to_absolute(input: &str, base: Option<&Path>) -> PathBuf {
    let expanded = expand_home(input.trim());
    let joined = if has_absolute_or_rooted_component(&expanded) {
        expanded
    } else {
        match base {
            Some(base) => base.join(expanded),
            None => std::env::current_dir().unwrap_or_default().join(expanded),
        }
    };
    normalize(&joined)
}

/// Check if path is absolute OR rooted (cross-platform).
///
/// Unlike `Path::is_absolute()`, this treats both Unix absolute paths
/// (`/tmp`) and Windows rooted paths (`/tmp`) as requiring rejection.
pub fn has_absolute_or_rooted_component(path: &Path) -> bool {
    if path.is_absolute() {
        return true;
    }
    path.components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Check if path contains a parent-traversal (`..`) segment.
pub fn has_parent_component(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::ParentDir))
}

/// Nominal containment check: true iff `candidate` equals `root` or sits
/// below it, comparing normalized paths component-wise. A candidate with no
/// common prefix (different drive, different tree) is outside.
pub fn is_within_root(root: &Path, candidate: &Path) -> bool {
    normalize(candidate).starts_with(normalize(root))
}

/// Real containment check for untrusted targets.
///
/// Canonicalizes both the root and the candidate and verifies the real
/// target still sits under the real root. Returns the canonicalized
/// candidate on success so callers operate on the resolved path.
pub fn check_real_containment(root: &Path, candidate: &Path) -> Result<PathBuf> {
    let real_root = std::fs::canonicalize(root)?;
    let real = std::fs::canonicalize(candidate)?;
    if !real.starts_with(&real_root) {
        return Err(WavecheckError::PathEscape { path: real });
    }
    Ok(real)
}
