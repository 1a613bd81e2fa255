use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WavecheckError {
    // Configuration errors
    #[error("CONFIG_PARSE_ERROR: failed to parse wavecheck.toml: {0}")]
    ConfigParse(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("NO_ROOTS: no search roots configured")]
    NoRoots,

    // Per-call validation errors
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    #[error("UNKNOWN_ROOT: root '{0}' is not configured")]
    UnknownRoot(String),

    #[error("ROOT_UNAVAILABLE: root '{id}' does not exist on disk: {path:?}")]
    RootUnavailable { id: String, path: PathBuf },

    // Policy violations
    #[error("PATH_ESCAPE: path {path:?} resolves outside its root")]
    PathEscape { path: PathBuf },

    #[error("PATH_EXCLUDED: path {0:?} matches an exclusion pattern")]
    PathExcluded(PathBuf),

    #[error("SYMLINK_POLICY: {0}")]
    SymlinkPolicy(String),

    // Not-found errors
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    #[error("NOT_A_FILE: {0:?} is not a regular file")]
    NotAFile(PathBuf),

    // Search errors
    #[error("BAD_PATTERN: {0}")]
    BadPattern(#[from] regex::Error),

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WavecheckError>;
