//! Workspace search entry points.
//!
//! # Responsibility
//! - Expose global and project-scoped file search over the in-memory tree.
//! - Keep hit shaping (preview, path, breadcrumb) inside core.

pub mod scan;
