use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::{CommentQuery, CommentStore};
use crate::error::Result;
use crate::models::Comment;

const COMMENT_COLUMNS: &str = "id, user_id, text, created_at";

/// Postgres-backed repository for comment operations
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so search terms match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Appends WHERE clauses for the query's filters, if any.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &CommentQuery) {
    let mut prefix = " WHERE ";

    if let Some(user) = query.user {
        builder.push(prefix).push("user_id = ").push_bind(user);
        prefix = " AND ";
    }

    if let Some(search) = &query.search {
        builder
            .push(prefix)
            .push("text ILIKE ")
            .push_bind(format!("%{}%", escape_like(search)));
    }
}

#[async_trait]
impl CommentStore for PgCommentRepository {
    async fn insert(&self, user_id: Uuid, text: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (user_id, text)
            VALUES ($1, $2)
            RETURNING id, user_id, text, created_at
            "#,
        )
        .bind(user_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, text, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM comments", COMMENT_COLUMNS));

        push_filters(&mut builder, query);

        // Column names come from the OrderField whitelist, never from input.
        builder
            .push(" ORDER BY ")
            .push(query.ordering.field.column())
            .push(if query.ordering.descending {
                " DESC"
            } else {
                " ASC"
            });

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }
        if query.offset > 0 {
            builder.push(" OFFSET ").push_bind(query.offset);
        }

        let comments = builder
            .build_query_as::<Comment>()
            .fetch_all(&self.pool)
            .await?;

        Ok(comments)
    }

    async fn count(&self, query: &CommentQuery) -> Result<i64> {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM comments");

        push_filters(&mut builder, query);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn replace(&self, id: i64, user_id: Uuid, text: &str) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET user_id = $2, text = $3
            WHERE id = $1
            RETURNING id, user_id, text, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(text)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
