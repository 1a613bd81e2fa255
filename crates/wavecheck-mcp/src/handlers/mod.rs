pub mod check_event;
pub mod list_roots;
pub mod read;
pub mod search;
pub mod types;
