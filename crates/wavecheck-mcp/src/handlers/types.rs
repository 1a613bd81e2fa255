use rmcp::{schemars, serde};

#[derive(Debug, serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
pub struct SearchArgs {
    /// Substring to look for, or a regex pattern when `regex` is true
    pub query: String,
    /// Restrict the search to these root ids; unknown ids match nothing
    #[serde(default)]
    pub root_ids: Option<Vec<String>>,
    /// Treat `query` as a regex pattern
    #[serde(default)]
    pub regex: Option<bool>,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    /// Positive override of the configured hit cap
    #[serde(default)]
    pub max_hits: Option<usize>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ReadArgs {
    pub root_id: String,
    /// Path relative to the root; absolute paths and `..` are rejected
    pub rel_path: String,
    /// Positive byte budget; larger files are truncated, not failed
    #[serde(default)]
    pub max_bytes: Option<u64>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckEventArgs {
    /// Event name as it appears in work-unit files and code
    pub event_name: String,
}
