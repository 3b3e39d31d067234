//! Customer record store.
//!
//! Owns the `customer` table schema and exposes the CRUD, search, listing
//! and reset operations. Each operation is self-contained: `Customers::new`
//! opens a fresh connection, the operation runs to completion, and dropping
//! the store releases the connection on every exit path.
//!
//! Write operations never propagate storage errors to the caller. Failures
//! are converted at this boundary into the operation's own outcome signal —
//! an [`InsertOutcome`], a rows-affected count, or a boolean — with the
//! underlying error kept to debug logging. Update and reset are the only
//! multi-statement operations and run as atomic units through
//! [`Customers::run_atomic`].

use super::db::Db;
use crate::libs::customer::Customer;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Row, Transaction};

pub const TABLE_CUSTOMER: &str = "customer";

const SCHEMA_CUSTOMER: &str = "CREATE TABLE IF NOT EXISTS customer (
    Id TEXT PRIMARY KEY,
    Name TEXT,
    Email TEXT,
    Mobile TEXT
)";
const INSERT_CUSTOMER: &str = "INSERT INTO customer (Id, Name, Email, Mobile) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_CUSTOMER: &str = "UPDATE customer SET Name = ?2, Email = ?3, Mobile = ?4 WHERE Id = ?1";
const DELETE_CUSTOMER: &str = "DELETE FROM customer WHERE Id = ?1";
const SELECT_ALL_CUSTOMERS: &str = "SELECT Id, Name, Email, Mobile FROM customer";
const SEARCH_CUSTOMERS_BY_NAME: &str = "SELECT Id, Name, Email, Mobile FROM customer WHERE Name LIKE ?1";
const DROP_CUSTOMER: &str = "DROP TABLE IF EXISTS customer";
const TABLE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'customer')";

/// The five canonical sample records, in storage order.
///
/// Inserted when the table is first created and restored verbatim by
/// [`Customers::reset`]. This is the factory-reset state of the store.
pub const SEED_CUSTOMERS: [(&str, &str, &str, &str); 5] = [
    ("100001", "John Citizen", "john@smt.com", "0412345678"),
    ("100002", "Alice Smith", "alice@smt.com", "0423456789"),
    ("100003", "Bob Johnson", "bob@smt.com", "0434567890"),
    ("100004", "Clara Lee", "clara@smt.com", "0445678901"),
    ("100005", "David Chen", "david@smt.com", "0456789012"),
];

/// Outcome of an insert attempt.
///
/// `Inserted` carries the storage-internal rowid, useful for debug logging
/// only — it is unrelated to the business `id` and must never be treated as
/// one. `Rejected` covers both the duplicate-primary-key case and any
/// storage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(i64),
    Rejected,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

pub struct Customers {
    conn: Connection,
}

impl Customers {
    /// Opens the store, guaranteeing the table exists before any operation.
    ///
    /// First creation seeds the five canonical records inside one atomic
    /// unit, so a partially seeded table is never observable.
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        let mut customers = Self { conn: db.conn };
        customers.ensure_schema()?;

        Ok(customers)
    }

    fn ensure_schema(&mut self) -> Result<()> {
        let exists: bool = self.conn.query_row(TABLE_EXISTS, [], |row| row.get(0))?;
        if !exists {
            self.run_atomic(|tx| {
                tx.execute(SCHEMA_CUSTOMER, [])?;
                seed(tx)?;
                Ok(Some(()))
            })?;
        }
        Ok(())
    }

    /// Writes a new record. Rejected when a record with the same id exists.
    pub fn insert(&mut self, customer: &Customer) -> InsertOutcome {
        match self
            .conn
            .execute(INSERT_CUSTOMER, params![customer.id, customer.name, customer.email, customer.mobile])
        {
            Ok(_) => InsertOutcome::Inserted(self.conn.last_insert_rowid()),
            Err(e) => {
                msg_debug!("Insert rejected for customer {}: {}", customer.id, e);
                InsertOutcome::Rejected
            }
        }
    }

    /// Overwrites name, email and mobile for the record matching `customer.id`.
    ///
    /// Runs as an atomic unit: the change commits only when exactly one row
    /// matched. A missing id or any internal error rolls the unit back and
    /// reports 0 rows affected.
    pub fn update(&mut self, customer: &Customer) -> usize {
        let outcome = self.run_atomic(|tx| {
            let affected = tx.execute(UPDATE_CUSTOMER, params![customer.id, customer.name, customer.email, customer.mobile])?;
            if affected > 0 {
                Ok(Some(affected))
            } else {
                Ok(None)
            }
        });

        match outcome {
            Ok(Some(affected)) => affected,
            Ok(None) => 0,
            Err(e) => {
                msg_debug!("Update aborted for customer {}: {}", customer.id, e);
                0
            }
        }
    }

    /// Removes the record with the given id, reporting rows affected (0 or 1).
    pub fn delete(&mut self, id: &str) -> usize {
        match self.conn.execute(DELETE_CUSTOMER, params![id]) {
            Ok(affected) => affected,
            Err(e) => {
                msg_debug!("Delete failed for customer {}: {}", id, e);
                0
            }
        }
    }

    /// Returns all records whose name contains `name`, in storage order.
    pub fn search_by_name(&mut self, name: &str) -> Result<Vec<Customer>> {
        let pattern = format!("%{}%", name);
        let mut stmt = self.conn.prepare(SEARCH_CUSTOMERS_BY_NAME)?;
        let customer_iter = stmt.query_map(params![pattern], map_customer)?;

        let mut customers = Vec::new();
        for customer in customer_iter {
            customers.push(customer?);
        }
        Ok(customers)
    }

    /// Returns every record in storage order.
    pub fn list_all(&mut self) -> Result<Vec<Customer>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CUSTOMERS)?;
        let customer_iter = stmt.query_map([], map_customer)?;

        let mut customers = Vec::new();
        for customer in customer_iter {
            customers.push(customer?);
        }
        Ok(customers)
    }

    /// Factory reset: drops all data and restores the five canonical records.
    ///
    /// Runs as an atomic unit; on failure the previous contents stay intact
    /// and `false` is reported.
    pub fn reset(&mut self) -> bool {
        let outcome = self.run_atomic(|tx| {
            tx.execute(DROP_CUSTOMER, [])?;
            tx.execute(SCHEMA_CUSTOMER, [])?;
            seed(tx)?;
            Ok(Some(()))
        });

        match outcome {
            Ok(Some(())) => true,
            Ok(None) => false,
            Err(e) => {
                msg_debug!("Store reset aborted: {}", e);
                false
            }
        }
    }

    /// Runs `op` inside a transaction.
    ///
    /// The unit commits only when `op` returns `Ok(Some(value))`; `Ok(None)`
    /// signals a deliberate abort and any error is an implicit abort. Either
    /// way the transaction rolls back and no partial effects remain visible.
    fn run_atomic<T>(&mut self, op: impl FnOnce(&Transaction) -> rusqlite::Result<Option<T>>) -> rusqlite::Result<Option<T>> {
        let tx = self.conn.transaction()?;
        match op(&tx) {
            Ok(Some(value)) => {
                tx.commit()?;
                Ok(Some(value))
            }
            Ok(None) => {
                tx.rollback()?;
                Ok(None)
            }
            Err(e) => {
                tx.rollback()?;
                Err(e)
            }
        }
    }
}

fn seed(tx: &Transaction) -> rusqlite::Result<()> {
    for (id, name, email, mobile) in SEED_CUSTOMERS {
        tx.execute(INSERT_CUSTOMER, params![id, name, email, mobile])?;
    }
    Ok(())
}

fn map_customer(row: &Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        mobile: row.get(3)?,
    })
}
