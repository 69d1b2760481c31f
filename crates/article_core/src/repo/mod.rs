//! Article store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the store contract used by the service layer.
//! - Isolate file format and locking details from service orchestration.
//!
//! # Invariants
//! - Write paths must call `CreateArticleInput::validate()` before persistence.
//! - Store APIs return semantic errors (`NotFound`, `AlreadyExists`) in
//!   addition to I/O and decode errors.

pub mod article_repo;
pub mod json_file;
pub mod memory;
