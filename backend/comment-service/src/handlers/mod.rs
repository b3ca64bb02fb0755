/// HTTP handlers for the comment API
pub mod comments;
pub mod health;

// Re-export handler functions at module level
pub use comments::{
    create_comment, delete_comment, get_comment, list_comments, patch_comment, replace_comment,
};
pub use health::health_check;
