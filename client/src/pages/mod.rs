//! Top-level route pages.

pub mod login;
pub mod not_found;
