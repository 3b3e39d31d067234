//! Core library modules for the smtbiz application.
//!
//! Provides the building blocks shared by the command layer and the
//! database layer: the customer entity with its validation rules, the
//! data directory resolution, the user-facing message catalog and the
//! console table renderer.

pub mod customer;
pub mod data_storage;
pub mod messages;
pub mod view;
