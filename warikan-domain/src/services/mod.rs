pub mod balance_calculator;
pub mod remaining_amount;
pub mod split_calculator;
pub mod sum_invariant_validator;

pub use balance_calculator::{BalanceCalculator, ParticipantBalances};
pub use remaining_amount::fill_remaining;
pub use split_calculator::{RemainderPolicy, SplitCalculator, SplitError, distribute_equally};
pub use sum_invariant_validator::{
    EntryList, FieldError, FieldPath, SumInvariantValidator, ValidationErrors,
    validate_amount_sums,
};
