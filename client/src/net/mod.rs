//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts the identity token to the Asynqmon backend and `firebase`
//! drives the Google popup sign-in. Both implement ports of the `login`
//! crate and are real only in the `hydrate` build.

pub mod api;
pub mod firebase;
