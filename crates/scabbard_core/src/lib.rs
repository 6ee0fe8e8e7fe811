//! Core domain logic for Scabbard.
//! Team randomization and the local memo store live here; front ends only
//! parse input and print results.

pub mod db;
pub mod logging;
pub mod model;
pub mod partition;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::memo::{format_epoch_ms, Memo, MemoId};
pub use model::team::{Allocation, Group, GroupCount};
pub use partition::{group_sizes, partition, partition_with_rng, split_into_groups};
pub use repo::memo_repo::{MemoRepository, SqliteMemoRepository};
pub use repo::{RepoError, RepoResult};
pub use service::memo_service::{MemoService, MemoServiceError};
pub use service::team_service::{parse_player_list, TeamBoard, TeamError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
