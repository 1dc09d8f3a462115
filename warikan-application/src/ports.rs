use crate::{error::RepositoryError, model::PurchaseDraft};
use warikan_domain::{Purchase, PurchaseId};

/// Storage for purchases. Writes only ever receive validated drafts.
pub trait PurchaseRepository: Send + Sync {
    fn insert(&self, draft: PurchaseDraft) -> PurchaseId;

    fn update(&self, id: PurchaseId, draft: PurchaseDraft) -> Result<(), RepositoryError>;

    fn delete(&self, id: PurchaseId) -> Result<(), RepositoryError>;

    fn get(&self, id: PurchaseId) -> Result<Purchase, RepositoryError>;

    /// `None` lists every purchase, `Some(flag)` only those with `is_settled == flag`.
    fn list(&self, settled: Option<bool>) -> Vec<Purchase>;

    /// Either every id is updated or none is.
    fn set_settled(&self, ids: &[PurchaseId], settled: bool) -> Result<(), RepositoryError>;
}
