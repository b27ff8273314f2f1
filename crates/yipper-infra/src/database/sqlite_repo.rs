//! SQLite repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, TransactionTrait};

use yipper_core::DomainError;
use yipper_core::domain::{NewYip, Yip};
use yipper_core::ports::{YipListing, YipRepository};

use super::connections::YipStore;
use super::error::repo_error;
use super::query::YipQuery;

/// Yip repository backed by the SQLite relation store.
pub struct SqliteYipRepository {
    db: DbConn,
}

impl SqliteYipRepository {
    pub fn new(store: &YipStore) -> Self {
        Self {
            db: store.connection().clone(),
        }
    }

    async fn author_exists(&self, author: &str) -> Result<bool, DomainError> {
        let hit = YipQuery::exists_author(author)
            .into_tuple::<i64>()
            .one(&self.db)
            .await
            .map_err(repo_error)?;
        Ok(hit.is_some())
    }
}

#[async_trait]
impl YipRepository for SqliteYipRepository {
    async fn list_posts(&self, search: Option<&str>) -> Result<YipListing, DomainError> {
        let listing = match search {
            Some(term) => {
                let ids = YipQuery::search(term)
                    .into_tuple::<i64>()
                    .all(&self.db)
                    .await
                    .map_err(repo_error)?;
                YipListing::Ids(ids)
            }
            None => {
                let rows = YipQuery::list_all()
                    .all(&self.db)
                    .await
                    .map_err(repo_error)?;
                YipListing::Full(rows.into_iter().map(Into::into).collect())
            }
        };

        tracing::debug!(
            searching = search.is_some(),
            results = listing.len(),
            "Listed yips"
        );
        Ok(listing)
    }

    async fn posts_by_author(&self, author: &str) -> Result<Vec<Yip>, DomainError> {
        let rows = YipQuery::by_author(author)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(author, results = rows.len(), "Listed yips by author");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn like_post(&self, id: i64) -> Result<i64, DomainError> {
        let not_found = || DomainError::NotFound {
            entity_type: "yip",
            id,
        };

        // The increment and the read share a transaction, so the count
        // reported is the one this like produced.
        let txn = self.db.begin().await.map_err(repo_error)?;

        let updated = YipQuery::increment_likes(id)
            .exec(&txn)
            .await
            .map_err(repo_error)?;
        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(repo_error)?;
            return Err(not_found());
        }

        let likes = YipQuery::likes_of(id)
            .into_tuple::<i64>()
            .one(&txn)
            .await
            .map_err(repo_error)?;
        txn.commit().await.map_err(repo_error)?;

        let likes = likes.ok_or_else(not_found)?;
        tracing::debug!(id, likes, "Liked yip");
        Ok(likes)
    }

    async fn create_post(
        &self,
        author: &str,
        full_text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Yip, DomainError> {
        if !self.author_exists(author).await? {
            return Err(DomainError::UnknownAuthor(author.to_string()));
        }

        let new = NewYip::from_full_text(author, full_text, created_at);
        let inserted = YipQuery::insert(&new)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        let yip = new.into_yip(inserted.last_insert_id);
        tracing::info!(id = yip.id, author, "Created yip");
        Ok(yip)
    }
}
