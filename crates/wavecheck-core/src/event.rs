//! Heuristic cross-check for a named audio event.
//!
//! Shapes the four sub-searches behind `check_event` and folds their
//! outcomes into a report. The targeted branches rely on the conventional
//! root ids `requirements` / `wwise` / `unity`; a configuration using
//! different ids silently degrades those branches to empty results rather
//! than erroring, which is why the report carries an advisory note. Running
//! the branches (concurrently, best-effort) is the caller's job.

use serde::Serialize;

use crate::config::consts::event::{REQUIREMENTS_ROOT, UNITY_ROOT, WWISE_ROOT};
use crate::search::{SearchOutcome, SearchRequest};

/// Fixed note attached to every report.
pub const ADVISORY_NOTE: &str = "Heuristic check: relies on the conventional root ids \
    'requirements'/'wwise'/'unity' and a single Name=\"...\" attribute pattern for work-unit \
    files. Absence of a hit is evidence, not proof.";

/// Build the four sub-searches for `event_name`, in branch order:
/// requirements mention, wwise definition, unity reference, and an
/// unscoped fallback that always runs regardless of the other branches.
pub fn event_queries(event_name: &str) -> [SearchRequest; 4] {
    let scoped = |root: &str| SearchRequest {
        query: event_name.to_string(),
        root_ids: Some(vec![root.to_string()]),
        ..Default::default()
    };
    [
        scoped(REQUIREMENTS_ROOT),
        SearchRequest {
            // Work-unit XML declares events as Name="..." attributes
            query: format!("Name=\"{event_name}\""),
            root_ids: Some(vec![WWISE_ROOT.to_string()]),
            ..Default::default()
        },
        scoped(UNITY_ROOT),
        SearchRequest {
            query: event_name.to_string(),
            ..Default::default()
        },
    ]
}

#[derive(Debug, Serialize)]
pub struct EventReport {
    pub event_name: String,
    pub requirements_mentioned: bool,
    pub wwise_probably_defined: bool,
    pub unity_referenced: bool,
    /// Raw branch results; a branch that failed is absent
    pub requirements: Option<SearchOutcome>,
    pub wwise: Option<SearchOutcome>,
    pub unity: Option<SearchOutcome>,
    pub fallback: Option<SearchOutcome>,
    pub note: &'static str,
}

/// Fold settled branch outcomes (in `event_queries` order) into a report.
/// A failed branch contributes `false` to its derived boolean.
pub fn assemble_report(
    event_name: &str,
    [requirements, wwise, unity, fallback]: [Option<SearchOutcome>; 4],
) -> EventReport {
    let has_hits =
        |branch: &Option<SearchOutcome>| branch.as_ref().is_some_and(|o| !o.hits.is_empty());
    EventReport {
        event_name: event_name.to_string(),
        requirements_mentioned: has_hits(&requirements),
        wwise_probably_defined: has_hits(&wwise),
        unity_referenced: has_hits(&unity),
        requirements,
        wwise,
        unity,
        fallback,
        note: ADVISORY_NOTE,
    }
}
