use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use warikan_application::{PurchaseDraft, PurchaseRepository, RepositoryError};
use warikan_domain::{Purchase, PurchaseId};

struct State {
    next_id: u64,
    purchases: IndexMap<PurchaseId, Purchase>,
}

/// Process-local purchase store. Ids are handed out sequentially from 1 and
/// listing keeps insertion order.
pub struct InMemoryPurchaseRepository {
    state: Mutex<State>,
}

impl InMemoryPurchaseRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                purchases: IndexMap::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryPurchaseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseRepository for InMemoryPurchaseRepository {
    fn insert(&self, draft: PurchaseDraft) -> PurchaseId {
        let mut state = self.state();
        let id = PurchaseId(state.next_id);
        state.next_id += 1;
        state.purchases.insert(id, draft.into_purchase(id));
        id
    }

    fn update(&self, id: PurchaseId, draft: PurchaseDraft) -> Result<(), RepositoryError> {
        let mut state = self.state();
        let purchase = state
            .purchases
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        draft.apply_to(purchase);
        Ok(())
    }

    fn delete(&self, id: PurchaseId) -> Result<(), RepositoryError> {
        self.state()
            .purchases
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    fn get(&self, id: PurchaseId) -> Result<Purchase, RepositoryError> {
        self.state()
            .purchases
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn list(&self, settled: Option<bool>) -> Vec<Purchase> {
        self.state()
            .purchases
            .values()
            .filter(|purchase| settled.is_none_or(|flag| purchase.is_settled == flag))
            .cloned()
            .collect()
    }

    fn set_settled(&self, ids: &[PurchaseId], settled: bool) -> Result<(), RepositoryError> {
        let mut state = self.state();
        if let Some(missing) = ids.iter().find(|id| !state.purchases.contains_key(*id)) {
            tracing::warn!(purchase_id = %missing, "Settlement update refers to unknown purchase");
            return Err(RepositoryError::NotFound(*missing));
        }
        for id in ids {
            if let Some(purchase) = state.purchases.get_mut(id) {
                if settled {
                    purchase.settle();
                } else {
                    purchase.unsettle();
                }
            }
        }
        Ok(())
    }
}
