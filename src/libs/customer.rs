//! Customer entity and the validation gate applied before any write.
//!
//! A customer is identified by a fixed 6-digit ID chosen by the user; the
//! ID is immutable once the record exists. Name, email and mobile are free
//! text and only checked for presence. Email shape and mobile digits are
//! deliberately not validated — a documented limitation of the system, not
//! an oversight.

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single customer record as stored in the `customer` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl Customer {
    pub fn new(id: &str, name: &str, email: &str, mobile: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
        }
    }

    /// Pre-write gate for insert and update.
    ///
    /// Rejects before any store access: an ID that is not exactly 6 digits,
    /// or any empty name/email/mobile field.
    pub fn validate(&self) -> Result<()> {
        validate_id(&self.id)?;
        if self.name.is_empty() || self.email.is_empty() || self.mobile.is_empty() {
            msg_bail_anyhow!(Message::CustomerFieldsRequired);
        }
        Ok(())
    }
}

/// Validates the primary key shape: non-empty, exactly 6 ASCII digits.
pub fn validate_id(id: &str) -> Result<()> {
    if id.len() != 6 || !id.chars().all(|c| c.is_ascii_digit()) {
        msg_bail_anyhow!(Message::CustomerIdInvalid);
    }
    Ok(())
}

/// Validates a search fragment: only presence is required.
pub fn validate_search_name(name: &str) -> Result<()> {
    if name.is_empty() {
        msg_bail_anyhow!(Message::SearchNameRequired);
    }
    Ok(())
}
