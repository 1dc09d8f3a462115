use thiserror::Error;
use warikan_domain::{AmountError, PurchaseId, SplitError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("purchase amounts are invalid:\n{0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error("no entry at index {index} (the form has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("purchase {0} not found")]
    NotFound(PurchaseId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no purchases selected")]
    EmptySelection,
    #[error(transparent)]
    Amount(#[from] AmountError),
}
