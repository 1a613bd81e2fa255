//! Workspace-wide limit constants

/// Limits applied during search
pub mod search {
    /// Largest file the search reader will load (bytes); bigger files are
    /// counted as skipped, never scanned
    pub const MAX_FILE_BYTES: u64 = 1024 * 1024;

    /// Default cap on hits returned by a single search
    pub const MAX_HITS: usize = 200;

    /// Hit line text is truncated to this many characters
    pub const MAX_HIT_CHARS: usize = 400;
}

/// Conventional root ids the event heuristic targets
pub mod event {
    pub const REQUIREMENTS_ROOT: &str = "requirements";
    pub const WWISE_ROOT: &str = "wwise";
    pub const UNITY_ROOT: &str = "unity";
}
