use rmcp::ErrorData;
use serde_json::json;
use std::fmt::Display;
use wavecheck_core::WavecheckError;

// Stable error code constants carried in the error data payload
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const PATH_ESCAPE: &str = "PATH_ESCAPE";
pub const PATH_EXCLUDED: &str = "PATH_EXCLUDED";
pub const SYMLINK_POLICY: &str = "SYMLINK_POLICY";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const NOT_A_FILE: &str = "NOT_A_FILE";
pub const BAD_PATTERN: &str = "BAD_PATTERN";
pub const NO_ROOTS: &str = "NO_ROOTS";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

pub fn internal_error(message: impl Into<String>) -> ErrorData {
    error_with_code(INTERNAL_ERROR, message)
}

pub fn invalid_input(message: impl Into<String>) -> ErrorData {
    error_with_code(INVALID_INPUT, message)
}

pub fn path_escape(message: impl Into<String>) -> ErrorData {
    error_with_code(PATH_ESCAPE, message)
}

pub fn not_found(message: impl Into<String>) -> ErrorData {
    error_with_code(NOT_FOUND, message)
}

pub fn error_with_code(code: &str, message: impl Into<String>) -> ErrorData {
    ErrorData::internal_error(
        message.into(),
        Some(json!({
            "code": code
        })),
    )
}

pub fn from_core_error(error: WavecheckError) -> ErrorData {
    let message = error.to_string();
    match error {
        WavecheckError::InvalidInput(_) | WavecheckError::UnknownRoot(_) => {
            error_with_code(INVALID_INPUT, message)
        }
        WavecheckError::NoRoots => error_with_code(NO_ROOTS, message),
        WavecheckError::PathEscape { .. } => error_with_code(PATH_ESCAPE, message),
        WavecheckError::PathExcluded(_) => error_with_code(PATH_EXCLUDED, message),
        WavecheckError::SymlinkPolicy(_) => error_with_code(SYMLINK_POLICY, message),
        WavecheckError::RootUnavailable { .. } | WavecheckError::NotFound(_) => {
            error_with_code(NOT_FOUND, message)
        }
        WavecheckError::NotAFile(_) => error_with_code(NOT_A_FILE, message),
        WavecheckError::BadPattern(_) => error_with_code(BAD_PATTERN, message),
        WavecheckError::ConfigParse(_)
        | WavecheckError::ConfigInvalidValue { .. }
        | WavecheckError::Io(_) => error_with_code(INTERNAL_ERROR, message),
    }
}

pub fn from_display(error: impl Display) -> ErrorData {
    internal_error(format!("{}", error))
}
