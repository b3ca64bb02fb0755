//! In-memory `CommentStore` used by the API tests in place of Postgres.

use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use comment_service::db::{CommentQuery, CommentStore, OrderField};
use comment_service::error::Result;
use comment_service::models::Comment;

pub struct InMemoryStore {
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn matching(&self, query: &CommentQuery) -> Vec<Comment> {
        let comments = self.comments.lock().unwrap();
        comments
            .iter()
            .filter(|c| query.user.map_or(true, |u| c.user_id == u))
            .filter(|c| {
                query.search.as_ref().map_or(true, |s| {
                    c.text.to_lowercase().contains(&s.to_lowercase())
                })
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CommentStore for InMemoryStore {
    async fn insert(&self, user_id: Uuid, text: &str) -> Result<Comment> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let comment = Comment {
            id,
            user_id,
            text: text.to_string(),
            // Spread creation times out so created_at ordering is stable.
            created_at: Utc::now() + Duration::milliseconds(id),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        let mut results = self.matching(query);

        match query.ordering.field {
            OrderField::Id => results.sort_by_key(|c| c.id),
            OrderField::User => results.sort_by(|a, b| a.user_id.cmp(&b.user_id)),
            OrderField::Text => results.sort_by(|a, b| a.text.cmp(&b.text)),
            OrderField::CreatedAt => results.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        if query.ordering.descending {
            results.reverse();
        }

        let offset = query.offset.max(0) as usize;
        let results: Vec<Comment> = match query.limit {
            Some(limit) => results
                .into_iter()
                .skip(offset)
                .take(limit.max(0) as usize)
                .collect(),
            None => results.into_iter().skip(offset).collect(),
        };

        Ok(results)
    }

    async fn count(&self, query: &CommentQuery) -> Result<i64> {
        Ok(self.matching(query).len() as i64)
    }

    async fn replace(&self, id: i64, user_id: Uuid, text: &str) -> Result<Option<Comment>> {
        let mut comments = self.comments.lock().unwrap();
        match comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.user_id = user_id;
                comment.text = text.to_string();
                Ok(Some(comment.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() < before)
    }
}
