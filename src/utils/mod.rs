//! Utility helpers: body storage and handles, vector math, logging, and step profiling.

pub mod allocator;
pub mod logging;
pub mod math;
pub mod profiling;

pub use allocator::{BodyHandle, BodySet};
pub use math::*;
pub use profiling::StepMetrics;
