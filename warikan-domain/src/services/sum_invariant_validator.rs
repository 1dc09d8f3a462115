use crate::model::{AmountError, AmountPaidEntry, AmountToPayEntry, owed_sum, paid_sum};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryList {
    AmountPaid,
    AmountToPay,
}

impl EntryList {
    pub fn list_name(self) -> &'static str {
        match self {
            EntryList::AmountPaid => "purchasers_amount_paid",
            EntryList::AmountToPay => "purchasers_amount_to_pay",
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            EntryList::AmountPaid => "amount_paid",
            EntryList::AmountToPay => "amount_to_pay",
        }
    }
}

/// Location of a field: (list-name, index, field-name).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub list: EntryList,
    pub index: usize,
}

impl FieldPath {
    pub fn new(list: EntryList, index: usize) -> Self {
        Self { list, index }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}].{}",
            self.list.list_name(),
            self.index,
            self.list.field_name()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub path: FieldPath,
    pub error: AmountError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn for_field(&self, list: EntryList, index: usize) -> impl Iterator<Item = &AmountError> {
        let path = FieldPath::new(list, index);
        self.errors
            .iter()
            .filter(move |error| error.path == path)
            .map(|error| &error.error)
    }

    pub fn has_sum_mismatch(&self) -> bool {
        self.errors
            .iter()
            .any(|error| matches!(error.error, AmountError::SumMismatch { .. }))
    }

    fn push(&mut self, list: EntryList, index: usize, error: AmountError) {
        self.errors.push(FieldError {
            path: FieldPath::new(list, index),
            error,
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.path, error.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Gate in front of persisting a purchase: each field must be a
/// non-negative integer or unset, and the paid total must equal the owed
/// total.
pub struct SumInvariantValidator;

impl SumInvariantValidator {
    /// A mismatch is a property of the whole group, so it is reported on
    /// every paid entry and every owed entry. A total that overflows `i64`
    /// is reported the same way, as [`AmountError::AmountTooLarge`].
    pub fn validate(
        paid: &[AmountPaidEntry],
        owed: &[AmountToPayEntry],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for (idx, entry) in paid.iter().enumerate() {
            if let Err(error) = entry.amount_paid.validate() {
                errors.push(EntryList::AmountPaid, idx, error);
            }
        }
        for (idx, entry) in owed.iter().enumerate() {
            if let Err(error) = entry.amount_to_pay.validate() {
                errors.push(EntryList::AmountToPay, idx, error);
            }
        }

        let paid_total = paid_sum(paid);
        let owed_total = owed_sum(owed);
        let group_error = match (&paid_total, &owed_total) {
            (Ok(paid), Ok(owed)) if paid == owed => None,
            (Ok(paid), Ok(owed)) => Some(AmountError::SumMismatch {
                paid: *paid,
                owed: *owed,
            }),
            _ => Some(AmountError::AmountTooLarge),
        };
        if let Some(group_error) = group_error {
            for idx in 0..paid.len() {
                errors.push(EntryList::AmountPaid, idx, group_error.clone());
            }
            for idx in 0..owed.len() {
                errors.push(EntryList::AmountToPay, idx, group_error.clone());
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            error_count = errors.len(),
            paid_total = ?paid_total,
            owed_total = ?owed_total,
            "Purchase amounts rejected"
        );
        Err(errors)
    }
}

/// Shorthand for [`SumInvariantValidator::validate`].
pub fn validate_amount_sums(
    paid: &[AmountPaidEntry],
    owed: &[AmountToPayEntry],
) -> Result<(), ValidationErrors> {
    SumInvariantValidator::validate(paid, owed)
}
