use crate::{
    error::{RepositoryError, ServiceError},
    model::PurchaseDraft,
    ports::PurchaseRepository,
};
use std::cmp::Reverse;
use warikan_domain::{BalanceCalculator, Participant, ParticipantBalances, Purchase, PurchaseId};

/// Purchase use cases on top of a [`PurchaseRepository`].
#[derive(Clone, Copy)]
pub struct PurchaseService<'a> {
    repository: &'a dyn PurchaseRepository,
}

impl<'a> PurchaseService<'a> {
    pub fn new(repository: &'a dyn PurchaseRepository) -> Self {
        Self { repository }
    }

    pub fn create(&self, draft: PurchaseDraft) -> PurchaseId {
        let title = draft.details().title.clone();
        let id = self.repository.insert(draft);
        tracing::info!(purchase_id = %id, title = %title, "Purchase created");
        id
    }

    pub fn update(&self, id: PurchaseId, draft: PurchaseDraft) -> Result<(), ServiceError> {
        self.repository.update(id, draft)?;
        tracing::info!(purchase_id = %id, "Purchase updated");
        Ok(())
    }

    pub fn delete(&self, id: PurchaseId) -> Result<(), ServiceError> {
        self.repository.delete(id)?;
        tracing::info!(purchase_id = %id, "Purchase deleted");
        Ok(())
    }

    /// Marks every selected purchase settled in one step.
    pub fn settle(&self, ids: &[PurchaseId]) -> Result<(), ServiceError> {
        if ids.is_empty() {
            return Err(ServiceError::EmptySelection);
        }
        self.repository.set_settled(ids, true)?;
        tracing::info!(purchase_count = ids.len(), "Purchases settled");
        Ok(())
    }

    pub fn unsettle(&self, id: PurchaseId) -> Result<(), ServiceError> {
        self.repository.set_settled(&[id], false)?;
        tracing::info!(purchase_id = %id, "Purchase moved back to unsettled");
        Ok(())
    }

    /// Unsettled purchases, newest date first; undated ones last.
    pub fn unsettled(&self) -> Vec<Purchase> {
        newest_first(self.repository.list(Some(false)))
    }

    /// Settled purchases, newest date first; undated ones last.
    pub fn settled(&self) -> Vec<Purchase> {
        newest_first(self.repository.list(Some(true)))
    }

    /// Net amount each participant owes over the selected purchases.
    pub fn balances(
        &self,
        participants: &[Participant],
        selected: &[PurchaseId],
    ) -> Result<ParticipantBalances, ServiceError> {
        let purchases = selected
            .iter()
            .map(|id| self.repository.get(*id))
            .collect::<Result<Vec<_>, RepositoryError>>()?;
        Ok(BalanceCalculator::calculate(participants, &purchases)?)
    }
}

fn newest_first(mut purchases: Vec<Purchase>) -> Vec<Purchase> {
    purchases.sort_by_key(|purchase| (purchase.date.is_none(), Reverse(purchase.date.clone())));
    purchases
}
