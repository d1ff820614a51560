//! Shared client-side state modules.

pub mod toast;
