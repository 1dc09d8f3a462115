use warikan_domain::{Purchase, PurchaseId, PurchaseShare};

/// Title, date and note of a purchase; everything except the amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseDetails {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub note: String,
}

/// A purchase whose amounts passed validation and may be written.
///
/// Only [`crate::PurchaseForm::submit`] creates drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDraft {
    details: PurchaseDetails,
    shares: Vec<PurchaseShare>,
}

impl PurchaseDraft {
    pub(crate) fn new(details: PurchaseDetails, shares: Vec<PurchaseShare>) -> Self {
        Self { details, shares }
    }

    pub fn details(&self) -> &PurchaseDetails {
        &self.details
    }

    pub fn shares(&self) -> &[PurchaseShare] {
        &self.shares
    }

    pub fn into_purchase(self, id: PurchaseId) -> Purchase {
        Purchase {
            id,
            title: self.details.title,
            date: self.details.date,
            note: self.details.note,
            is_settled: false,
            shares: self.shares,
        }
    }

    /// Overwrites details and amounts, keeping id and settlement state.
    pub fn apply_to(self, purchase: &mut Purchase) {
        purchase.title = self.details.title;
        purchase.date = self.details.date;
        purchase.note = self.details.note;
        purchase.shares = self.shares;
    }
}
