//! Workspace storage layer.
//!
//! # Responsibility
//! - Hold the process-local workspace tree and its seed data.
//! - Keep tree traversal details out of service and search callers.
//!
//! # Invariants
//! - Store APIs never fail with an error: misses are `None` or `false`.
//! - Nothing here is persisted beyond the owning process.

pub mod seed;
pub mod workspace_store;
