//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the HTTP layer decoupled from storage details.
//! - Translate store errors into kind-preserving domain errors.

pub mod aggregate;
pub mod article_service;
