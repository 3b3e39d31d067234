//! Display implementation for smtbiz application messages.
//!
//! Converts structured [`Message`] variants into the human-readable text
//! shown on the terminal. Keeping all message text in one place gives the
//! application a single source of truth for wording and makes future
//! localization straightforward.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CUSTOMER MESSAGES ===
            Message::CustomerCreated(id) => format!("Customer {} created", id),
            Message::CustomerInsertFailed(id) => {
                format!("Insert failed for customer {} (the ID may already exist)", id)
            }
            Message::CustomerUpdated(id) => format!("Customer {} updated", id),
            Message::CustomerDeleted(id) => format!("Customer {} deleted", id),
            Message::CustomerNotFound(id) => format!("Customer {} not found", id),
            Message::CustomersFound(count) => format!("{} customer record(s)", count),
            Message::NoCustomersFound => "No customers found in the store".to_string(),
            Message::NoCustomersMatching(name) => format!("No customers matching '{}'", name),

            // === RESET MESSAGES ===
            Message::StoreReset => "Store reset: 5 sample records restored".to_string(),
            Message::StoreResetFailed => "Store reset failed, existing data left untouched".to_string(),

            // === VALIDATION MESSAGES ===
            Message::CustomerIdInvalid => "Customer ID must be exactly 6 digits".to_string(),
            Message::CustomerIdRequired => "Customer ID must not be empty".to_string(),
            Message::CustomerFieldsRequired => "Name, email and mobile must all be filled".to_string(),
            Message::SearchNameRequired => "Search text must not be empty".to_string(),

            // === PROMPT MESSAGES ===
            Message::ConfirmDeleteCustomer(id) => format!("Delete customer {}?", id),
            Message::ConfirmReset => "Reset the store? All existing records will be replaced by the 5 sample records".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
