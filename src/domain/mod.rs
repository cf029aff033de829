//! Domain layer: graph storage and pure, synchronous traversal rules.

pub mod error;
pub mod graph;
pub mod representation;
pub mod state;
pub mod traits;
pub mod traversal;
