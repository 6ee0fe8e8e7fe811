//! Domain model for team allocation and memos.
//!
//! # Responsibility
//! - Define value types shared by partitioning, board state and storage.
//! - Keep storage and presentation concerns out of model types.

pub mod memo;
pub mod team;
