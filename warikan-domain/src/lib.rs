#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Amount, AmountError, AmountInput, AmountPaidEntry, AmountToPayEntry, Money, Participant,
    ParticipantId, Purchase, PurchaseId, PurchaseShare, owed_sum, paid_sum,
};
pub use services::{
    BalanceCalculator, EntryList, FieldError, FieldPath, ParticipantBalances, RemainderPolicy,
    SplitCalculator, SplitError, SumInvariantValidator, ValidationErrors, distribute_equally,
    fill_remaining, validate_amount_sums,
};
