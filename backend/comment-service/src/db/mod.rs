/// Database access layer
///
/// Provides connection pooling, migrations, the storage-agnostic
/// [`CommentStore`] trait, and its Postgres implementation.
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::error::Result;
use crate::models::Comment;

pub mod comment_repo;

pub use comment_repo::PgCommentRepository;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Field a comment listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    User,
    Text,
    CreatedAt,
}

impl OrderField {
    pub fn column(self) -> &'static str {
        match self {
            OrderField::Id => "id",
            OrderField::User => "user_id",
            OrderField::Text => "text",
            OrderField::CreatedAt => "created_at",
        }
    }

    /// Wire name used in the `ordering` query parameter
    pub fn name(self) -> &'static str {
        match self {
            OrderField::Id => "id",
            OrderField::User => "user",
            OrderField::Text => "text",
            OrderField::CreatedAt => "created_at",
        }
    }
}

/// Sort order for comment listings, parsed from the `ordering` query
/// parameter (`-` prefix means descending, e.g. `-created_at`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub field: OrderField,
    pub descending: bool,
}

impl Ordering {
    pub fn parse(raw: &str) -> Option<Self> {
        let (descending, name) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let field = match name {
            "id" => OrderField::Id,
            "user" => OrderField::User,
            "text" => OrderField::Text,
            "created_at" => OrderField::CreatedAt,
            _ => return None,
        };

        Some(Ordering { field, descending })
    }

    /// Round-trips back to the query-parameter form accepted by [`parse`](Self::parse).
    pub fn as_param(&self) -> String {
        if self.descending {
            format!("-{}", self.field.name())
        } else {
            self.field.name().to_string()
        }
    }
}

impl Default for Ordering {
    fn default() -> Self {
        Ordering {
            field: OrderField::Id,
            descending: false,
        }
    }
}

/// Filter, search, sort, and pagination parameters for comment listings
#[derive(Debug, Clone, Default)]
pub struct CommentQuery {
    /// Exact-match filter on the owning user
    pub user: Option<Uuid>,
    /// Case-insensitive substring match on `text`
    pub search: Option<String>,
    pub ordering: Ordering,
    pub limit: Option<i64>,
    pub offset: i64,
}

/// Storage interface for comments
///
/// Handlers and the service layer only see this trait; production wires
/// in [`PgCommentRepository`], tests may substitute any backend.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Insert a new comment; `id` and `created_at` are assigned by storage.
    async fn insert(&self, user_id: Uuid, text: &str) -> Result<Comment>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>>;

    async fn list(&self, query: &CommentQuery) -> Result<Vec<Comment>>;

    /// Number of comments matching the query's filters (ignores paging).
    async fn count(&self, query: &CommentQuery) -> Result<i64>;

    /// Full replacement of `user_id` and `text`; `created_at` is immutable.
    /// Returns `None` when the comment does not exist.
    async fn replace(&self, id: i64, user_id: Uuid, text: &str) -> Result<Option<Comment>>;

    /// Returns `false` when the comment does not exist.
    async fn delete(&self, id: i64) -> Result<bool>;
}
