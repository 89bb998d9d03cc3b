//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate whole-collection store calls into tracker use-cases.
//! - Keep HTTP adapters decoupled from storage details.

pub mod forms;
pub mod tracker_service;
