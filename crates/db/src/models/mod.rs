//! Row records mapped from SQLite and their conversions into domain types.

pub mod article;
pub mod comment;
