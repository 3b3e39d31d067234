#[derive(Debug, Clone)]
pub enum Message {
    // === CUSTOMER MESSAGES ===
    CustomerCreated(String),
    CustomerInsertFailed(String),
    CustomerUpdated(String),
    CustomerDeleted(String),
    CustomerNotFound(String),
    CustomersFound(usize),
    NoCustomersFound,
    NoCustomersMatching(String),

    // === RESET MESSAGES ===
    StoreReset,
    StoreResetFailed,

    // === VALIDATION MESSAGES ===
    CustomerIdInvalid,
    CustomerIdRequired,
    CustomerFieldsRequired,
    SearchNameRequired,

    // === PROMPT MESSAGES ===
    ConfirmDeleteCustomer(String),
    ConfirmReset,
    OperationCancelled,
}
