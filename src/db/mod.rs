//! Database layer for the smtbiz application.
//!
//! Provides the persistence layer built on SQLite: connection management
//! with the schema-version policy, and the customer record store with its
//! CRUD, search and reset operations.
//!
//! Every store operation opens its own connection and releases it when the
//! store value goes out of scope — no handle outlives the operation that
//! acquired it. The only multi-statement operations (update and reset) run
//! inside transactions, so a failed operation never leaves partial effects
//! behind.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use smtbiz::db::customers::Customers;
//! use smtbiz::libs::customer::Customer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut customers = Customers::new()?;
//! let record = Customer::new("100042", "Jane Roe", "jane@smt.com", "0400000042");
//! let _outcome = customers.insert(&record);
//! # Ok(())
//! # }
//! ```

/// Core database connection and schema-version management.
///
/// Opens the SQLite file and enforces the destructive upgrade policy:
/// a schema version bump drops the customer table for reseeding.
pub mod db;

/// Customer record store.
///
/// CRUD operations, substring search, full listing and the factory reset
/// that restores the five canonical sample records.
pub mod customers;
