//! Centralized user-facing message catalog.
//!
//! Every string the application shows to the user is defined here, as a
//! variant of [`Message`]. The display implementation turns variants into
//! text, and the macros in [`macros`] route that text either to the console
//! or to the tracing system depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
