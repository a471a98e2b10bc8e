//! Request handlers.
//!
//! Handlers delegate to the [`BlogService`](quill_service::BlogService) held
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod articles;
pub mod comments;
