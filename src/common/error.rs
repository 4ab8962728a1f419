/// Failures of the storage boundary. Inside the controller these are logged
/// and swallowed; the store API itself reports them.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an entry save was refused. Surfaced to the caller as an outcome so the
/// front end can prompt; the ledger and form are left untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("no party selected")]
    MissingParty,
    #[error("amount is empty")]
    MissingAmount,
    #[error("amount is not a valid number: {0}")]
    InvalidAmount(String),
}

/// Why a party add was refused. Named variants so a caller can tell a
/// rejected add apart from an accepted one and prompt accordingly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PartyRejection {
    #[error("party name is empty")]
    EmptyName,
    #[error("party already exists: {0}")]
    DuplicateName(String),
}
