use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - a text record owned by a user
///
/// `id` and `created_at` are assigned by storage and read-only on the
/// wire; the owning identity is serialized as `user`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or fully replacing a comment
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPayload {
    pub user: Uuid,
    pub text: String,
}

/// Request body for partially updating a comment
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPatch {
    pub user: Option<Uuid>,
    pub text: Option<String>,
}

/// Offset-paginated list envelope, returned when a `limit` is requested
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}
