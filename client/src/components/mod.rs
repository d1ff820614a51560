//! Reusable UI component modules.

pub mod google_icon;
pub mod toaster;
