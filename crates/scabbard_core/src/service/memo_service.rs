//! Memo use-case service.
//!
//! # Responsibility
//! - Provide memo create/update/get/list/delete APIs for callers.
//! - Reject drafts with neither title nor content.
//!
//! # Invariants
//! - Writes are read back so callers always receive the stored row.
//! - Title and content are stored as given; only blankness is checked.

use crate::model::memo::{Memo, MemoId};
use crate::repo::memo_repo::MemoRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for memo use-cases.
#[derive(Debug)]
pub enum MemoServiceError {
    /// Both title and content are blank.
    EmptyMemo,
    /// Target memo does not exist.
    MemoNotFound(MemoId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for MemoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMemo => write!(f, "memo needs a title or content"),
            Self::MemoNotFound(id) => write!(f, "memo not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent memo state: {details}"),
        }
    }
}

impl Error for MemoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for MemoServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::MemoNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Memo service facade over repository implementations.
pub struct MemoService<R: MemoRepository> {
    repo: R,
}

impl<R: MemoRepository> MemoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one memo and returns the stored row.
    pub fn create_memo(&self, title: &str, content: &str) -> Result<Memo, MemoServiceError> {
        ensure_not_blank(title, content)?;
        let id = self.repo.insert_memo(title, content)?;
        info!("event=memo_create module=service status=ok memo_id={id}");
        self.repo
            .get_memo(id)?
            .ok_or(MemoServiceError::InconsistentState(
                "created memo not found in read-back",
            ))
    }

    /// Replaces title and content of an existing memo.
    pub fn update_memo(
        &self,
        id: MemoId,
        title: &str,
        content: &str,
    ) -> Result<Memo, MemoServiceError> {
        ensure_not_blank(title, content)?;
        self.repo.update_memo(id, title, content)?;
        info!("event=memo_update module=service status=ok memo_id={id}");
        self.repo
            .get_memo(id)?
            .ok_or(MemoServiceError::InconsistentState(
                "updated memo not found in read-back",
            ))
    }

    pub fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        self.repo.get_memo(id)
    }

    /// Lists all memos, newest first.
    pub fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        self.repo.list_memos()
    }

    pub fn delete_memo(&self, id: MemoId) -> Result<(), MemoServiceError> {
        self.repo.delete_memo(id)?;
        info!("event=memo_delete module=service status=ok memo_id={id}");
        Ok(())
    }
}

fn ensure_not_blank(title: &str, content: &str) -> Result<(), MemoServiceError> {
    if title.trim().is_empty() && content.trim().is_empty() {
        return Err(MemoServiceError::EmptyMemo);
    }
    Ok(())
}
