//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and partitioning calls into use-case APIs.
//! - Keep CLI callers decoupled from storage details.

pub mod memo_service;
pub mod team_service;
