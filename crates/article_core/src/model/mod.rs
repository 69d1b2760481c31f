//! Domain model for article records and derived query results.
//!
//! # Responsibility
//! - Define the canonical article shape shared by store, service and API.
//! - Define derived (never persisted) aggregation results.
//!
//! # Invariants
//! - Every article is identified by a client-assigned, immutable `id`.
//! - Articles are never updated or deleted once created.

pub mod aggregate;
pub mod article;
