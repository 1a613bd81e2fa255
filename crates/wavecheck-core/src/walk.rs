//! Lazy traversal of eligible files under a resolved root.
//!
//! Built on `walkdir`; exclusion patterns prune whole directories before
//! descent, and symlinks are skipped entirely unless following is enabled
//! and the resolved target verifiably stays inside the root's real path.
//! Traversal order is implementation-defined; callers must not depend on
//! lexical ordering. Unreadable directories are skipped silently.

use std::path::PathBuf;
use walkdir::WalkDir;

use crate::filter;
use crate::roots::ResolvedRoot;

#[derive(Debug, Clone, Copy)]
pub struct WalkOptions<'a> {
    pub follow_symlinks: bool,
    pub global_exclude: &'a [String],
    pub include_extensions: &'a [String],
}

/// Produce a lazy sequence of eligible file paths under `root`.
///
/// The iterator is finite and restartable but not resumable mid-walk;
/// consumers stop it early simply by dropping it (hit-cap termination).
pub fn files<'a>(
    root: &'a ResolvedRoot,
    opts: WalkOptions<'a>,
) -> impl Iterator<Item = PathBuf> + 'a {
    // Resolved once per walk; the escape check for followed links compares
    // against the root's real path, not its nominal one.
    let real_root = std::fs::canonicalize(&root.path).ok();

    WalkDir::new(&root.path)
        .follow_links(opts.follow_symlinks)
        .into_iter()
        .filter_entry(move |entry| {
            if filter::should_exclude(entry.path(), opts.global_exclude, &root.exclude) {
                return false;
            }
            if opts.follow_symlinks && entry.path_is_symlink() {
                // A link whose real target leaves the root is pruned here so
                // a symlinked directory is never descended into.
                let Some(real_root) = real_root.as_ref() else {
                    return false;
                };
                match std::fs::canonicalize(entry.path()) {
                    Ok(real) => real.starts_with(real_root),
                    Err(_) => false,
                }
            } else {
                true
            }
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter_map(move |entry| {
            if !opts.follow_symlinks && entry.path_is_symlink() {
                return None;
            }
            if !entry.file_type().is_file() {
                return None;
            }
            if !filter::extension_allowed(entry.path(), opts.include_extensions) {
                return None;
            }
            Some(entry.into_path())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::Path;
    use tempfile::TempDir;
    use wavecheck_testkit::write_tree;

    fn resolved(path: &Path) -> ResolvedRoot {
        ResolvedRoot {
            id: "test".to_string(),
            kind: None,
            path: path.to_path_buf(),
            exists: true,
            exclude: vec![],
        }
    }

    fn collect(root: &ResolvedRoot, opts: WalkOptions<'_>) -> BTreeSet<String> {
        files(root, opts)
            .map(|p| {
                p.strip_prefix(&root.path)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_walk_yields_nested_files() {
        let temp = TempDir::new().unwrap();
        write_tree(
            temp.path(),
            &[("a.md", "x"), ("sub/b.md", "y"), ("sub/deep/c.md", "z")],
        );

        let root = resolved(temp.path());
        let opts = WalkOptions {
            follow_symlinks: false,
            global_exclude: &[],
            include_extensions: &[],
        };
        let found = collect(&root, opts);
        assert_eq!(
            found,
            ["a.md", "sub/b.md", "sub/deep/c.md"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        );
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let temp = TempDir::new().unwrap();
        write_tree(
            temp.path(),
            &[("keep/a.md", "x"), ("skip/b.md", "y"), ("skip/deep/c.md", "z")],
        );

        let root = resolved(temp.path());
        let exclude = vec!["skip/".to_string()];
        let opts = WalkOptions {
            follow_symlinks: false,
            global_exclude: &exclude,
            include_extensions: &[],
        };
        let found = collect(&root, opts);
        assert_eq!(found.len(), 1);
        assert!(found.contains("keep/a.md"));
    }

    #[test]
    fn test_extension_filter_applies() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("a.md", "x"), ("b.wav", "y"), ("c", "z")]);

        let root = resolved(temp.path());
        let extensions = vec!["md".to_string()];
        let opts = WalkOptions {
            follow_symlinks: false,
            global_exclude: &[],
            include_extensions: &extensions,
        };
        let found = collect(&root, opts);
        assert_eq!(found.len(), 1);
        assert!(found.contains("a.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_skipped_when_not_following() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("real.md", "x"), ("target/inner.md", "y")]);
        // In-root target: still skipped, the policy is about link-ness
        symlink(temp.path().join("real.md"), temp.path().join("link.md")).unwrap();
        symlink(temp.path().join("target"), temp.path().join("linkdir")).unwrap();

        let root = resolved(temp.path());
        let opts = WalkOptions {
            follow_symlinks: false,
            global_exclude: &[],
            include_extensions: &[],
        };
        let found = collect(&root, opts);
        assert_eq!(found.len(), 2);
        assert!(found.contains("real.md"));
        assert!(found.contains("target/inner.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_followed_symlink_escaping_root_is_skipped() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        write_tree(temp.path(), &[("safe.md", "x")]);
        write_tree(outside.path(), &[("secret.md", "s"), ("dir/deep.md", "d")]);

        symlink(
            outside.path().join("secret.md"),
            temp.path().join("leak.md"),
        )
        .unwrap();
        symlink(outside.path().join("dir"), temp.path().join("leakdir")).unwrap();
        // A link that stays inside the root is followed
        symlink(temp.path().join("safe.md"), temp.path().join("alias.md")).unwrap();

        let root = resolved(temp.path());
        let opts = WalkOptions {
            follow_symlinks: true,
            global_exclude: &[],
            include_extensions: &[],
        };
        let found = collect(&root, opts);
        assert!(found.contains("safe.md"));
        assert!(found.contains("alias.md"));
        assert!(!found.contains("leak.md"));
        assert!(!found.iter().any(|p| p.starts_with("leakdir")));
    }
}
