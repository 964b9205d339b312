use crate::domain::report::ReportError;

/// Domain-level errors for metadata synchronization
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    #[error("Metadata cache fault: {0}")]
    CacheFault(String),

    #[error("Metadata store write failed: {0}")]
    StoreWrite(String),

    #[error("Metadata store read failed: {0}")]
    StoreRead(String),

    #[error("Metadata report unavailable: {0}")]
    ReportUnavailable(String),
}

impl DomainError {
    /// A store-read outcome, preserving the report error verbatim.
    pub fn read_from(e: ReportError) -> Self {
        Self::StoreRead(e.to_string())
    }

    /// A store-write outcome, preserving the report error verbatim.
    pub fn write_from(e: ReportError) -> Self {
        Self::StoreWrite(e.to_string())
    }
}
