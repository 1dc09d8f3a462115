use std::fmt;

use thiserror::Error;

/// Integer amount of currency (yen). There are no fractional units.
///
/// Arithmetic is checked only: amounts come from user input, so a total can
/// exceed `i64` and must be reported instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// `None` as soon as the running total leaves the `i64` range.
    pub fn checked_sum<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::ZERO, |total, value| total.checked_add(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
        }
    }
}

/// A validated amount field.
///
/// `Unset` is an input nobody filled in yet. It counts as zero in every sum
/// but stays distinguishable from `Value(Money::ZERO)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Amount {
    #[default]
    Unset,
    Value(Money),
}

impl Amount {
    pub fn value_or_zero(self) -> Money {
        match self {
            Amount::Unset => Money::ZERO,
            Amount::Value(money) => money,
        }
    }

    /// The persisted representation: `None` for an unset field.
    pub fn into_option(self) -> Option<Money> {
        match self {
            Amount::Unset => None,
            Amount::Value(money) => Some(money),
        }
    }
}

impl From<Option<Money>> for Amount {
    fn from(value: Option<Money>) -> Self {
        value.map_or(Amount::Unset, Amount::Value)
    }
}

/// Per-field problems of an amount input, plus the group-wide sum mismatch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount must be numeric")]
    NonNumericAmount,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("amount must be an integer")]
    NonIntegerAmount,
    #[error("amount is too large")]
    AmountTooLarge,
    #[error("paid total {paid} does not match owed total {owed}")]
    SumMismatch { paid: Money, owed: Money },
}

/// Raw value of an amount field as the form holds it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AmountInput {
    #[default]
    Unset,
    Value(Money),
    Text(String),
}

/// `2^63`, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl AmountInput {
    /// Parses a field the way a numeric input reads it: integers, and
    /// decimal or exponent notation with no fractional part (`"1.0"`,
    /// `"1e3"`), become values. Anything else is kept as text.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return AmountInput::Unset;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return AmountInput::Value(Money::from_i64(value));
        }
        match trimmed.parse::<f64>() {
            Ok(number) if is_integral(number) && (-I64_BOUND..I64_BOUND).contains(&number) => {
                AmountInput::Value(Money::from_i64(number as i64))
            }
            _ => AmountInput::Text(text.to_owned()),
        }
    }

    pub fn validate(&self) -> Result<Amount, AmountError> {
        match self {
            AmountInput::Unset => Ok(Amount::Unset),
            AmountInput::Value(money) if money.is_negative() => Err(AmountError::NegativeAmount),
            AmountInput::Value(money) => Ok(Amount::Value(*money)),
            AmountInput::Text(text) => match text.trim().parse::<f64>() {
                Ok(number) if is_integral(number) => Err(AmountError::AmountTooLarge),
                Ok(number) if number.is_finite() => Err(AmountError::NonIntegerAmount),
                _ => Err(AmountError::NonNumericAmount),
            },
        }
    }

    /// Contribution to a list total: numbers count, everything else is zero.
    pub fn sum_contribution(&self) -> Money {
        match self {
            AmountInput::Value(money) => *money,
            AmountInput::Unset | AmountInput::Text(_) => Money::ZERO,
        }
    }
}

impl From<Amount> for AmountInput {
    fn from(amount: Amount) -> Self {
        match amount {
            Amount::Unset => AmountInput::Unset,
            Amount::Value(money) => AmountInput::Value(money),
        }
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Value(Money::from_i64(value))
    }
}

fn is_integral(number: f64) -> bool {
    number.is_finite() && number.fract() == 0.0
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmountPaidEntry {
    pub amount_paid: AmountInput,
}

impl AmountPaidEntry {
    pub fn new(amount_paid: impl Into<AmountInput>) -> Self {
        Self {
            amount_paid: amount_paid.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmountToPayEntry {
    pub amount_to_pay: AmountInput,
}

impl AmountToPayEntry {
    pub fn new(amount_to_pay: impl Into<AmountInput>) -> Self {
        Self {
            amount_to_pay: amount_to_pay.into(),
        }
    }
}

/// Total of the numeric paid amounts.
///
/// # Errors
/// [`AmountError::AmountTooLarge`] when the total does not fit in `i64`.
pub fn paid_sum(entries: &[AmountPaidEntry]) -> Result<Money, AmountError> {
    Money::checked_sum(
        entries
            .iter()
            .map(|entry| entry.amount_paid.sum_contribution()),
    )
    .ok_or(AmountError::AmountTooLarge)
}

/// Total of the numeric owed amounts. Fails like [`paid_sum`].
pub fn owed_sum(entries: &[AmountToPayEntry]) -> Result<Money, AmountError> {
    Money::checked_sum(
        entries
            .iter()
            .map(|entry| entry.amount_to_pay.sum_contribution()),
    )
    .ok_or(AmountError::AmountTooLarge)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseId(pub u64);

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One participant's row of a purchase as it is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseShare {
    pub participant_id: ParticipantId,
    pub amount_paid: Option<Money>,
    pub amount_to_pay: Option<Money>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub id: PurchaseId,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub note: String,
    pub is_settled: bool,
    pub shares: Vec<PurchaseShare>,
}

impl Purchase {
    pub fn share_of(&self, participant_id: ParticipantId) -> Option<&PurchaseShare> {
        self.shares
            .iter()
            .find(|share| share.participant_id == participant_id)
    }

    pub fn settle(&mut self) {
        self.is_settled = true;
    }

    pub fn unsettle(&mut self) {
        self.is_settled = false;
    }
}
