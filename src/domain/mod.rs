//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types returned to callers
//! - `wire.rs` — Request bodies sent to the daemon
//! - `client.rs` — Sub-client with one method per operation

pub mod change;
pub mod model;
