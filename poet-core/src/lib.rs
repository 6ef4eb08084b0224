//! Core utilities and types for the poet source generator.
//!
//! This crate provides the conventions every writer is configured with
//! (indentation, header formatting, dates), identifier cleaning, and the
//! plumbing for writing rendered files to disk.

mod clock;
mod config;
mod error;
mod file;
mod indent;
pub mod naming;

// Formatting conventions
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FormatConfig;
pub use indent::Indent;
// Errors
pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier cleaning
pub use naming::{NameCase, cleaned, escape_reserved};
