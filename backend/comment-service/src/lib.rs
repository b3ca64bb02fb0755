/// Comment Service Library
///
/// A small CRUD service for user comments plus two administrative batch
/// jobs that operate against the service's own HTTP API.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for comments and health checks
/// - `models`: Comment entity and request/response types
/// - `services`: Business logic layer (validation + storage orchestration)
/// - `db`: Connection pooling, the `CommentStore` trait, and the Postgres repository
/// - `validators`: Text rules and the canonical casing transform
/// - `jobs`: Bulk update / bulk delete job logic used by the admin binaries
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod models;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
