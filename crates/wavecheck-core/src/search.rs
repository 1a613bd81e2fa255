//! Line-oriented search across one or more roots.
//!
//! Combines the walker, the limited reader, and a line matcher into an
//! ordered hit list. Ordering is root-selection order, then file-visitation
//! order within a root, then ascending line number; it is never sorted by
//! relevance. The hit cap is a hard early exit: the walk stops mid-file the
//! instant it is reached, and the counters reflect only work done before
//! the cutoff.

use regex::RegexBuilder;
use serde::Serialize;
use std::path::Path;

use crate::config::consts::search::MAX_HIT_CHARS;
use crate::config::AuditConfig;
use crate::error::{Result, WavecheckError};
use crate::read;
use crate::roots::{self, ResolvedRoot};
use crate::walk::{self, WalkOptions};

/// One matching line of one file.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub root_id: String,
    /// Path relative to the hit's root, or the absolute path as fallback
    pub file: String,
    /// 1-based line number
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub scanned_files: usize,
    pub skipped_large_files: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: String,
    /// Restrict to these root ids (unknown ids silently match nothing);
    /// `None` searches every configured root
    pub root_ids: Option<Vec<String>>,
    pub regex: bool,
    pub case_sensitive: bool,
    /// Positive override of the configured hit cap
    pub max_hits: Option<usize>,
}

enum LineMatcher {
    Substring { needle: String, case_sensitive: bool },
    Pattern(regex::Regex),
}

impl LineMatcher {
    fn new(query: &str, regex: bool, case_sensitive: bool) -> Result<Self> {
        if regex {
            // A malformed pattern is a hard failure surfaced to the caller
            let pattern = RegexBuilder::new(query)
                .case_insensitive(!case_sensitive)
                .build()?;
            return Ok(Self::Pattern(pattern));
        }
        let needle = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        Ok(Self::Substring {
            needle,
            case_sensitive,
        })
    }

    fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Substring {
                needle,
                case_sensitive: true,
            } => line.contains(needle.as_str()),
            Self::Substring { needle, .. } => line.to_lowercase().contains(needle.as_str()),
            Self::Pattern(pattern) => pattern.is_match(line),
        }
    }
}

/// Run a search over the configured roots.
pub fn search(
    config: &AuditConfig,
    workspace_base: &Path,
    request: &SearchRequest,
) -> Result<SearchOutcome> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(WavecheckError::InvalidInput(
            "search query cannot be empty or whitespace-only".to_string(),
        ));
    }
    let matcher = LineMatcher::new(query, request.regex, request.case_sensitive)?;

    let resolved = roots::resolve_roots(config, workspace_base)?;
    let selected: Vec<&ResolvedRoot> = match &request.root_ids {
        Some(ids) => ids
            .iter()
            .filter_map(|id| roots::find_root(&resolved, id))
            .collect(),
        None => resolved.iter().collect(),
    };

    let cap = request
        .max_hits
        .filter(|n| *n > 0)
        .unwrap_or(config.limits.max_hits);
    let opts = WalkOptions {
        follow_symlinks: config.limits.follow_symlinks,
        global_exclude: &config.exclude,
        include_extensions: &config.include_extensions,
    };

    let mut outcome = SearchOutcome::default();
    'roots: for root in selected {
        if !root.exists {
            continue;
        }
        for file in walk::files(root, opts) {
            let content = match read::read_text_limited(&file, config.limits.max_file_bytes) {
                Some(content) => content,
                None => {
                    outcome.skipped_large_files += 1;
                    continue;
                }
            };
            outcome.scanned_files += 1;
            for (index, line) in content.lines().enumerate() {
                if !matcher.is_match(line) {
                    continue;
                }
                outcome.hits.push(SearchHit {
                    root_id: root.id.clone(),
                    file: relative_display(&file, &root.path),
                    line: index + 1,
                    text: line.chars().take(MAX_HIT_CHARS).collect(),
                });
                if outcome.hits.len() >= cap {
                    break 'roots;
                }
            }
        }
    }

    tracing::debug!(
        hits = outcome.hits.len(),
        scanned = outcome.scanned_files,
        skipped = outcome.skipped_large_files,
        "search finished"
    );
    Ok(outcome)
}

fn relative_display(file: &Path, root: &Path) -> String {
    match file.strip_prefix(root) {
        Ok(relative) => relative.to_string_lossy().replace('\\', "/"),
        Err(_) => file.to_string_lossy().replace('\\', "/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LimitsConfig, RootConfig};
    use tempfile::TempDir;
    use wavecheck_testkit::write_tree;

    fn config_for(temp: &TempDir, ids: &[&str]) -> AuditConfig {
        AuditConfig {
            roots: ids
                .iter()
                .map(|id| RootConfig {
                    id: id.to_string(),
                    path: id.to_string(),
                    kind: None,
                    exclude: vec![],
                })
                .collect(),
            workspace: Some(temp.path().to_string_lossy().to_string()),
            exclude: vec![],
            include_extensions: vec![],
            limits: LimitsConfig::default(),
        }
    }

    fn request(query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_substring_hits_with_line_numbers() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/spec.md", "intro\nPlay_Shot fires\nend")]);

        let config = config_for(&temp, &["req"]);
        let outcome = search(&config, temp.path(), &request("play_shot")).unwrap();

        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].root_id, "req");
        assert_eq!(outcome.hits[0].file, "spec.md");
        assert_eq!(outcome.hits[0].line, 2);
        assert_eq!(outcome.hits[0].text, "Play_Shot fires");
        assert_eq!(outcome.scanned_files, 1);
    }

    #[test]
    fn test_case_sensitive_substring() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/a.md", "play_shot\nPlay_Shot")]);

        let config = config_for(&temp, &["req"]);
        let mut req = request("Play_Shot");
        req.case_sensitive = true;
        let outcome = search(&config, temp.path(), &req).unwrap();
        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].line, 2);
    }

    #[test]
    fn test_regex_mode_and_bad_pattern() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/a.md", "Event_410\nEvent_x")]);

        let config = config_for(&temp, &["req"]);
        let mut req = request(r"Event_\d+");
        req.regex = true;
        let outcome = search(&config, temp.path(), &req).unwrap();
        assert_eq!(outcome.hits.len(), 1);

        let mut bad = request(r"Event_(");
        bad.regex = true;
        assert!(matches!(
            search(&config, temp.path(), &bad),
            Err(WavecheckError::BadPattern(_))
        ));
    }

    #[test]
    fn test_crlf_lines_are_split() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/a.md", "one\r\ntwo needle\r\nthree")]);

        let config = config_for(&temp, &["req"]);
        let outcome = search(&config, temp.path(), &request("needle")).unwrap();
        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].line, 2);
        assert_eq!(outcome.hits[0].text, "two needle");
    }

    #[test]
    fn test_hit_cap_stops_traversal_early() {
        let temp = TempDir::new().unwrap();
        let files: Vec<(String, String)> = (0..30)
            .map(|i| (format!("req/f{i:02}.md"), "needle".to_string()))
            .collect();
        let refs: Vec<(&str, &str)> = files
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
            .collect();
        write_tree(temp.path(), &refs);

        let config = config_for(&temp, &["req"]);
        let mut req = request("needle");
        req.max_hits = Some(5);
        let outcome = search(&config, temp.path(), &req).unwrap();

        assert_eq!(outcome.hits.len(), 5);
        // One hit per file means the walk stopped after the fifth file
        assert_eq!(outcome.scanned_files, 5);
    }

    #[test]
    fn test_oversized_files_counted_not_scanned() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/small.md", "needle")]);
        write_tree(temp.path(), &[("req/big.md", "")]);
        std::fs::write(
            temp.path().join("req/big.md"),
            format!("needle\n{}", "x".repeat(64)),
        )
        .unwrap();

        let mut config = config_for(&temp, &["req"]);
        config.limits.max_file_bytes = 32;
        let outcome = search(&config, temp.path(), &request("needle")).unwrap();

        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.scanned_files, 1);
        assert_eq!(outcome.skipped_large_files, 1);
    }

    #[test]
    fn test_missing_root_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/a.md", "needle")]);

        let config = config_for(&temp, &["req", "ghost"]);
        let outcome = search(&config, temp.path(), &request("needle")).unwrap();
        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.scanned_files, 1);
    }

    #[test]
    fn test_unknown_root_ids_silently_dropped() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/a.md", "needle")]);

        let config = config_for(&temp, &["req"]);
        let mut req = request("needle");
        req.root_ids = Some(vec!["nope".to_string()]);
        let outcome = search(&config, temp.path(), &req).unwrap();
        assert!(outcome.hits.is_empty());
        assert_eq!(outcome.scanned_files, 0);
    }

    #[test]
    fn test_empty_query_rejected() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &[("req/a.md", "x")]);
        let config = config_for(&temp, &["req"]);
        assert!(matches!(
            search(&config, temp.path(), &request("   ")),
            Err(WavecheckError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_hit_text_truncated_to_cap() {
        let temp = TempDir::new().unwrap();
        let long_line = format!("needle {}", "y".repeat(600));
        write_tree(temp.path(), &[("req/a.md", long_line.as_str())]);

        let config = config_for(&temp, &["req"]);
        let outcome = search(&config, temp.path(), &request("needle")).unwrap();
        assert_eq!(outcome.hits[0].text.chars().count(), MAX_HIT_CHARS);
    }
}
