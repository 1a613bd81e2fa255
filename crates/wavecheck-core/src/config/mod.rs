pub mod consts;
pub mod model;

pub use model::{AuditConfig, LimitsConfig, RootConfig};
