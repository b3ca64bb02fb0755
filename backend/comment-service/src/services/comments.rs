/// Comment service - validation and storage orchestration
///
/// Every write path runs text through `validators::validate_text`, so the
/// stored value is always the canonical capitalized form.
use std::sync::Arc;

use crate::db::{CommentQuery, CommentStore};
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentPatch, CommentPayload};
use crate::validators;

pub struct CommentService {
    store: Arc<dyn CommentStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }

    /// Create a new comment from a validated payload
    pub async fn create_comment(&self, payload: &CommentPayload) -> Result<Comment> {
        let text = validate(&payload.text)?;
        self.store.insert(payload.user, &text).await
    }

    /// Get a comment by ID
    pub async fn get_comment(&self, id: i64) -> Result<Comment> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", id)))
    }

    /// List comments matching the query's filters and paging
    pub async fn list_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        self.store.list(query).await
    }

    /// Count comments matching the query's filters
    pub async fn count_comments(&self, query: &CommentQuery) -> Result<i64> {
        self.store.count(query).await
    }

    /// Full replacement of a comment's `user` and `text` (re-validated)
    pub async fn replace_comment(&self, id: i64, payload: &CommentPayload) -> Result<Comment> {
        let text = validate(&payload.text)?;
        self.store
            .replace(id, payload.user, &text)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", id)))
    }

    /// Partial update; `text` is re-validated when present
    pub async fn patch_comment(&self, id: i64, patch: &CommentPatch) -> Result<Comment> {
        let current = self.get_comment(id).await?;

        let user = patch.user.unwrap_or(current.user_id);
        let text = match &patch.text {
            Some(raw) => validate(raw)?,
            None => current.text,
        };

        self.store
            .replace(id, user, &text)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", id)))
    }

    /// Delete a comment; no validation runs on this path
    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("comment {}", id)))
        }
    }
}

fn validate(raw: &str) -> Result<String> {
    validators::validate_text(raw).map_err(|e| AppError::Validation {
        field: "text",
        message: e.to_string(),
    })
}
