//! Equal split of a purchase total into integer shares.
//!
//! Every participant starts at `floor(total / n)`; the leftover units are
//! handed out one at a time according to a [`RemainderPolicy`].

use crate::model::Money;
use rand::{Rng, seq::index};
use thiserror::Error;

/// How the indivisible remainder of a split is handed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// One uniform draw per leftover unit, repeats allowed. A single
    /// participant may end up with the whole remainder.
    #[default]
    IndependentDraws,
    /// Give one unit to each of `remainder` distinct participants drawn
    /// uniformly, as if the first `remainder` of a shuffled order. Shares
    /// differ by at most one unit.
    Shuffled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("invalid argument: a split needs at least one participant (got {participant_count})")]
    InvalidArgument { participant_count: usize },
    #[error("cannot allocate shares for {participant_count} participants")]
    TooManyParticipants { participant_count: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitCalculator {
    policy: RemainderPolicy,
}

impl SplitCalculator {
    pub fn new(policy: RemainderPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RemainderPolicy {
        self.policy
    }

    /// Splits `total` into `participant_count` integer shares.
    ///
    /// The shares always sum to `total`. Negative totals use Euclidean
    /// division, so the remainder stays within `0..participant_count`.
    ///
    /// # Errors
    /// [`SplitError::InvalidArgument`] when `participant_count` is zero,
    /// [`SplitError::TooManyParticipants`] when the shares cannot be
    /// allocated.
    pub fn distribute<R: Rng>(
        &self,
        total: Money,
        participant_count: usize,
        rng: &mut R,
    ) -> Result<Vec<Money>, SplitError> {
        if participant_count == 0 {
            return Err(SplitError::InvalidArgument { participant_count });
        }

        let count = i64::try_from(participant_count)
            .map_err(|_| SplitError::TooManyParticipants { participant_count })?;
        let quotient = total.amount().div_euclid(count);
        let remainder = total.amount().rem_euclid(count) as usize;

        let mut shares: Vec<i64> = Vec::new();
        shares
            .try_reserve_exact(participant_count)
            .map_err(|_| SplitError::TooManyParticipants { participant_count })?;
        shares.resize(participant_count, quotient);

        // No share ends above quotient + remainder, which fits in i64.
        match self.policy {
            RemainderPolicy::IndependentDraws => {
                for _ in 0..remainder {
                    let idx = rng.gen_range(0..participant_count);
                    shares[idx] += 1;
                }
            }
            RemainderPolicy::Shuffled => {
                for idx in index::sample(rng, participant_count, remainder) {
                    shares[idx] += 1;
                }
            }
        }

        tracing::debug!(
            total = %total,
            participant_count,
            quotient,
            remainder,
            policy = ?self.policy,
            "Split total into equal shares"
        );

        Ok(shares.into_iter().map(Money::from_i64).collect())
    }
}

/// Splits with the default [`RemainderPolicy::IndependentDraws`] policy.
pub fn distribute_equally<R: Rng>(
    total: Money,
    participant_count: usize,
    rng: &mut R,
) -> Result<Vec<Money>, SplitError> {
    SplitCalculator::default().distribute(total, participant_count, rng)
}
