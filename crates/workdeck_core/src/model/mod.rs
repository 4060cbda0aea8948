//! Workspace domain model and addressing.
//!
//! # Responsibility
//! - Define the domain/project/folder/file tree held by the store.
//! - Derive slugs and path strings used to address tree nodes.
//!
//! # Invariants
//! - Every node is addressed by the slug of its display name, never by index.
//! - Sibling slug uniqueness is intended but not enforced.

pub mod path;
pub mod slug;
pub mod workspace;
