//! Core use-case services.
//!
//! # Responsibility
//! - Validate user input before it reaches the store.
//! - Translate store misses into typed errors for callers that need them.

pub mod account_service;
pub mod workspace_service;
