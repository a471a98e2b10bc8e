//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-based listing parameters (`?page=&per_page=`).
///
/// Values are clamped with `quill_core::pagination::{clamp_page, clamp_per_page}`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
