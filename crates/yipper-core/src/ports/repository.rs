use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::Yip;
use crate::error::DomainError;

/// Result of listing yips: ids only when searching, full rows otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YipListing {
    Ids(Vec<i64>),
    Full(Vec<Yip>),
}

impl YipListing {
    pub fn len(&self) -> usize {
        match self {
            YipListing::Ids(ids) => ids.len(),
            YipListing::Full(yips) => yips.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Yip repository - the domain operations request handlers rely on.
#[async_trait]
pub trait YipRepository: Send + Sync {
    /// List every yip newest-first, or only the ids of yips whose body contains
    /// `search` (case-sensitive) when a term is given.
    async fn list_posts(&self, search: Option<&str>) -> Result<YipListing, DomainError>;

    /// All yips by exactly this author, in the order they were posted.
    async fn posts_by_author(&self, author: &str) -> Result<Vec<Yip>, DomainError>;

    /// Add one like and return the resulting count.
    ///
    /// Returns [`DomainError::NotFound`] when no yip has this id.
    async fn like_post(&self, id: i64) -> Result<i64, DomainError>;

    /// Post a new yip for an author who has posted before.
    ///
    /// `full_text` is split into body and hashtag at its first `#`.
    /// Returns [`DomainError::UnknownAuthor`] when the author has no prior yips.
    async fn create_post(
        &self,
        author: &str,
        full_text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Yip, DomainError>;
}
