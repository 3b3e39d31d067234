//! # Smtbiz - Customer Record Manager
//!
//! A command-line utility for managing a local customer register backed
//! by a SQLite store.
//!
//! ## Features
//!
//! - **Record Management**: Add, update and delete customer records
//! - **Lookup**: Substring search by name and full listing
//! - **Factory Reset**: Restore the store to the five canonical sample records
//! - **Validation**: Pre-write checks for the 6-digit customer ID and required fields
//!
//! ## Usage
//!
//! ```rust,no_run
//! use smtbiz::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
