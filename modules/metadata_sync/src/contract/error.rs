/// Errors for the metadata synchronization module
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataSyncError {
    #[error("Metadata report unavailable: {0}")]
    ReportUnavailable(String),

    #[error("Metadata store read failed: {0}")]
    StoreRead(String),

    #[error("Local metadata cache fault: {0}")]
    CacheFault(String),

    #[error("An internal error occurred")]
    Internal,
}

impl From<crate::domain::error::DomainError> for MetadataSyncError {
    fn from(e: crate::domain::error::DomainError) -> Self {
        match e {
            crate::domain::error::DomainError::ReportUnavailable(msg) => {
                Self::ReportUnavailable(msg)
            }
            crate::domain::error::DomainError::StoreRead(msg) => Self::StoreRead(msg),
            crate::domain::error::DomainError::CacheFault(msg) => Self::CacheFault(msg),
            crate::domain::error::DomainError::StoreWrite(_) => Self::Internal,
        }
    }
}
