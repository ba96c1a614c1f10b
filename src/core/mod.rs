//! Core data: the circular body entity and the arena it lives in.

pub mod body;
pub mod types;

pub use body::Body;
pub use types::ArenaBounds;
