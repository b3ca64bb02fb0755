/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::{CommentQuery, Ordering};
use crate::error::{AppError, Result};
use crate::models::{CommentPatch, CommentPayload, Page};
use crate::services::CommentService;

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Exact-match filter on the owning user
    pub user: Option<Uuid>,
    /// Partial-match search on `text`
    pub search: Option<String>,
    /// Sort field, `-` prefix for descending
    pub ordering: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    fn into_query(self) -> Result<CommentQuery> {
        let ordering = match self.ordering.as_deref() {
            Some(raw) => Ordering::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown ordering field '{}'", raw)))?,
            None => Ordering::default(),
        };

        if matches!(self.limit, Some(l) if l <= 0) {
            return Err(AppError::BadRequest("limit must be positive".into()));
        }

        Ok(CommentQuery {
            user: self.user,
            search: self.search,
            ordering,
            limit: self.limit,
            offset: self.offset.unwrap_or(0).max(0),
        })
    }
}

/// List comments
///
/// Without `limit` the response is a bare array; with `limit` it is the
/// offset-pagination envelope `{count, next, previous, results}`.
pub async fn list_comments(
    service: web::Data<CommentService>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query()?;

    let Some(limit) = query.limit else {
        let comments = service.list_comments(&query).await?;
        return Ok(HttpResponse::Ok().json(comments));
    };

    let count = service.count_comments(&query).await?;
    let results = service.list_comments(&query).await?;

    let next = (query.offset + limit < count)
        .then(|| page_url(&query, limit, query.offset + limit));
    let previous = (query.offset > 0)
        .then(|| page_url(&query, limit, (query.offset - limit).max(0)));

    Ok(HttpResponse::Ok().json(Page {
        count,
        next,
        previous,
        results,
    }))
}

/// Builds a page link carrying the query's active filter, search, and
/// ordering parameters alongside the new offset.
fn page_url(query: &CommentQuery, limit: i64, offset: i64) -> String {
    let mut url = format!("/api/comments/?limit={}", limit);
    if offset > 0 {
        url.push_str(&format!("&offset={}", offset));
    }
    if let Some(user) = query.user {
        url.push_str(&format!("&user={}", user));
    }
    if let Some(search) = &query.search {
        url.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    if query.ordering != Ordering::default() {
        url.push_str(&format!("&ordering={}", query.ordering.as_param()));
    }
    url
}

/// Create a new comment
pub async fn create_comment(
    service: web::Data<CommentService>,
    payload: web::Json<CommentPayload>,
) -> Result<HttpResponse> {
    let comment = service.create_comment(&payload).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// Get a single comment
pub async fn get_comment(
    service: web::Data<CommentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let comment = service.get_comment(*id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Fully replace a comment's `user` and `text`
pub async fn replace_comment(
    service: web::Data<CommentService>,
    id: web::Path<i64>,
    payload: web::Json<CommentPayload>,
) -> Result<HttpResponse> {
    let comment = service.replace_comment(*id, &payload).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Partially update a comment
pub async fn patch_comment(
    service: web::Data<CommentService>,
    id: web::Path<i64>,
    patch: web::Json<CommentPatch>,
) -> Result<HttpResponse> {
    let comment = service.patch_comment(*id, &patch).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment
pub async fn delete_comment(
    service: web::Data<CommentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete_comment(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}
