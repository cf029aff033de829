//! Directed graph traversal and strongly connected components.
//!
//! Layers:
//! - domain: graph storage, algorithm state and the pure traversal rules
//! - usecase: timed entry points + progress events
//! - infrastructure: Tarjan detector, graph files, export, event printing
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
