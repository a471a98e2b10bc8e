//! Domain types and pure logic for the Quill blog backend.
//!
//! Nothing in this crate performs I/O: storage lives in `quill-db`, the
//! service facade in `quill-service`, and HTTP in `quill-api`.

pub mod article;
pub mod error;
pub mod pagination;
pub mod thread;
pub mod types;
