/// Administrative batch jobs
///
/// Both jobs talk to the comment API over HTTP as ordinary clients; the
/// `update-comments` and `delete-comments` binaries are thin wrappers
/// around these modules.
pub mod bulk_delete;
pub mod bulk_update;

pub use bulk_delete::BulkDeleteReport;
pub use bulk_update::BulkUpdateReport;

/// Joins the configured base URL with the comment collection path.
pub(crate) fn collection_url(base_url: &str) -> String {
    format!("{}/api/comments/", base_url.trim_end_matches('/'))
}
