// Core modules
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod path;
pub mod read;
pub mod roots;
pub mod search;
pub mod walk;

// Re-export commonly used types
pub use error::{Result, WavecheckError};
