use crate::{
    error::FormError,
    model::{PurchaseDetails, PurchaseDraft},
};
use rand::Rng;
use warikan_domain::{
    Amount, AmountError, AmountInput, AmountPaidEntry, AmountToPayEntry, Money, Participant, Purchase,
    PurchaseShare, SplitCalculator, SumInvariantValidator, ValidationErrors, fill_remaining,
    owed_sum, paid_sum,
};

/// In-memory state of a purchase form.
///
/// Both entry lists are index-aligned with `participants`. While
/// `split_equally` is on, every change to a paid amount replaces the owed
/// list with a fresh equal split of the paid total.
pub struct PurchaseForm<R> {
    participants: Vec<Participant>,
    amount_paid: Vec<AmountPaidEntry>,
    amount_to_pay: Vec<AmountToPayEntry>,
    split_equally: bool,
    calculator: SplitCalculator,
    rng: R,
}

impl<R: Rng> PurchaseForm<R> {
    /// Blank form for a new purchase; every amount starts at zero.
    pub fn new(participants: Vec<Participant>, calculator: SplitCalculator, rng: R) -> Self {
        let zero = AmountInput::Value(Money::ZERO);
        let amount_paid = vec![AmountPaidEntry::new(zero.clone()); participants.len()];
        let amount_to_pay = vec![AmountToPayEntry::new(zero); participants.len()];
        Self {
            participants,
            amount_paid,
            amount_to_pay,
            split_equally: false,
            calculator,
            rng,
        }
    }

    /// Form populated from a stored purchase. Participants without a share,
    /// and stored `None` amounts, come back as unset fields.
    pub fn for_edit(
        participants: Vec<Participant>,
        purchase: &Purchase,
        calculator: SplitCalculator,
        rng: R,
    ) -> Self {
        let (amount_paid, amount_to_pay) = participants
            .iter()
            .map(|participant| {
                let share = purchase.share_of(participant.id);
                let paid = Amount::from(share.and_then(|share| share.amount_paid));
                let to_pay = Amount::from(share.and_then(|share| share.amount_to_pay));
                (
                    AmountPaidEntry::new(AmountInput::from(paid)),
                    AmountToPayEntry::new(AmountInput::from(to_pay)),
                )
            })
            .unzip();

        Self {
            participants,
            amount_paid,
            amount_to_pay,
            split_equally: false,
            calculator,
            rng,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn amount_paid(&self) -> &[AmountPaidEntry] {
        &self.amount_paid
    }

    pub fn amount_to_pay(&self) -> &[AmountToPayEntry] {
        &self.amount_to_pay
    }

    pub fn split_equally(&self) -> bool {
        self.split_equally
    }

    pub fn paid_sum(&self) -> Result<Money, AmountError> {
        paid_sum(&self.amount_paid)
    }

    pub fn owed_sum(&self) -> Result<Money, AmountError> {
        owed_sum(&self.amount_to_pay)
    }

    pub fn set_amount_paid(
        &mut self,
        index: usize,
        input: impl Into<AmountInput>,
    ) -> Result<(), FormError> {
        let len = self.amount_paid.len();
        let entry = self
            .amount_paid
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })?;
        entry.amount_paid = input.into();

        if self.split_equally {
            self.recalculate()?;
        }
        Ok(())
    }

    pub fn set_amount_to_pay(
        &mut self,
        index: usize,
        input: impl Into<AmountInput>,
    ) -> Result<(), FormError> {
        let len = self.amount_to_pay.len();
        let entry = self
            .amount_to_pay
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })?;
        entry.amount_to_pay = input.into();
        Ok(())
    }

    /// Turning the toggle on splits the current paid total right away;
    /// turning it off leaves the owed amounts as they are. The toggle stays
    /// off when that first split fails.
    pub fn set_split_equally(&mut self, enabled: bool) -> Result<(), FormError> {
        if enabled && !self.split_equally {
            self.recalculate()?;
        }
        self.split_equally = enabled;
        Ok(())
    }

    /// Replaces the owed list with an equal split of the paid total.
    pub fn recalculate(&mut self) -> Result<(), FormError> {
        let total = self.paid_sum()?;
        let shares = self
            .calculator
            .distribute(total, self.participants.len(), &mut self.rng)?;

        self.amount_to_pay = shares
            .into_iter()
            .map(|share| AmountToPayEntry::new(AmountInput::Value(share)))
            .collect();

        tracing::debug!(
            total = %total,
            participant_count = self.participants.len(),
            "Recalculated amounts to pay"
        );
        Ok(())
    }

    /// Writes the amount that balances the owed list into `index` and
    /// returns it.
    pub fn fill_remaining(&mut self, index: usize) -> Result<Money, FormError> {
        let len = self.amount_to_pay.len();
        if index >= len {
            return Err(FormError::IndexOutOfRange { index, len });
        }
        let remaining = fill_remaining(self.paid_sum()?, &self.amount_to_pay, index)?;
        self.amount_to_pay[index] = AmountToPayEntry::new(AmountInput::Value(remaining));
        Ok(remaining)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        SumInvariantValidator::validate(&self.amount_paid, &self.amount_to_pay)
    }

    /// Validates the amounts and, if they hold, produces the draft to store.
    pub fn submit(&self, details: PurchaseDetails) -> Result<PurchaseDraft, FormError> {
        if let Err(errors) = self.validate() {
            tracing::warn!(
                title = %details.title,
                error_count = errors.len(),
                "Purchase submission rejected"
            );
            return Err(errors.into());
        }

        let shares = self
            .participants
            .iter()
            .zip(&self.amount_paid)
            .zip(&self.amount_to_pay)
            .map(|((participant, paid), to_pay)| PurchaseShare {
                participant_id: participant.id,
                amount_paid: stored_amount(&paid.amount_paid),
                amount_to_pay: stored_amount(&to_pay.amount_to_pay),
            })
            .collect();

        Ok(PurchaseDraft::new(details, shares))
    }
}

fn stored_amount(input: &AmountInput) -> Option<Money> {
    input.validate().ok().and_then(Amount::into_option)
}
