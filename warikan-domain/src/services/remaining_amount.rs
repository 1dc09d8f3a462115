use crate::model::{AmountError, AmountToPayEntry, Money};

/// The owed amount for `index` that makes the owed list add up to `paid_sum`.
///
/// Unset and non-numeric entries count as zero. The result is negative when
/// the other entries already exceed the paid total.
///
/// # Errors
/// [`AmountError::AmountTooLarge`] when the other entries, or the gap
/// itself, do not fit in `i64`.
pub fn fill_remaining(
    paid_sum: Money,
    owed: &[AmountToPayEntry],
    index: usize,
) -> Result<Money, AmountError> {
    let others = Money::checked_sum(
        owed.iter()
            .enumerate()
            .filter(|(idx, _)| *idx != index)
            .map(|(_, entry)| entry.amount_to_pay.sum_contribution()),
    )
    .ok_or(AmountError::AmountTooLarge)?;
    paid_sum
        .checked_sub(others)
        .ok_or(AmountError::AmountTooLarge)
}
