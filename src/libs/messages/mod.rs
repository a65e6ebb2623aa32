//! User-facing text and the macros that print it.
//!
//! All text shown to the user is a [`Message`] variant; the `Display`
//! impl in [`display`] owns the wording.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
