//! Collision handling: arena walls, circle pairs, and point queries.

pub mod pair;
pub mod queries;
pub mod walls;

pub use pair::{PairOutcome, PairResolver};
pub use queries::{PointHit, PointQuery};
pub use walls::{WallHits, WallMode, WallResolver};
