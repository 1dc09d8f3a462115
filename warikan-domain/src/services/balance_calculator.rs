use crate::model::{AmountError, Money, Participant, ParticipantId, Purchase};
use indexmap::IndexMap;

/// Net amount each participant still has to pay, in participant order.
/// Positive: owes money. Negative: is owed money.
pub type ParticipantBalances = IndexMap<ParticipantId, Money>;

pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Sums `amount_to_pay - amount_paid` over `purchases`.
    ///
    /// Every listed participant gets an entry, even with no shares. Shares of
    /// participants missing from the list are appended in encounter order so
    /// the balances of a balanced selection still sum to zero.
    ///
    /// # Errors
    /// [`AmountError::AmountTooLarge`] when a balance leaves the `i64` range.
    pub fn calculate<'a, I>(
        participants: &[Participant],
        purchases: I,
    ) -> Result<ParticipantBalances, AmountError>
    where
        I: IntoIterator<Item = &'a Purchase>,
    {
        let mut balances: ParticipantBalances = participants
            .iter()
            .map(|participant| (participant.id, Money::ZERO))
            .collect();

        for purchase in purchases {
            for share in &purchase.shares {
                let to_pay = share.amount_to_pay.unwrap_or(Money::ZERO);
                let paid = share.amount_paid.unwrap_or(Money::ZERO);
                let balance = balances.entry(share.participant_id).or_insert(Money::ZERO);
                let current = *balance;
                *balance = to_pay
                    .checked_sub(paid)
                    .and_then(|delta| current.checked_add(delta))
                    .ok_or(AmountError::AmountTooLarge)?;
            }
        }

        Ok(balances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PurchaseId, PurchaseShare};
    use rstest::{fixture, rstest};

    fn share(participant: u64, paid: Option<i64>, to_pay: Option<i64>) -> PurchaseShare {
        PurchaseShare {
            participant_id: ParticipantId(participant),
            amount_paid: paid.map(Money::from_i64),
            amount_to_pay: to_pay.map(Money::from_i64),
        }
    }

    fn purchase(id: u64, shares: Vec<PurchaseShare>) -> Purchase {
        Purchase {
            id: PurchaseId(id),
            title: format!("purchase {id}"),
            date: None,
            note: String::new(),
            is_settled: false,
            shares,
        }
    }

    #[fixture]
    fn participants() -> Vec<Participant> {
        vec![
            Participant::new(1, "alice"),
            Participant::new(2, "bob"),
            Participant::new(3, "carol"),
        ]
    }

    #[rstest]
    #[case::no_purchases(vec![], vec![0, 0, 0])]
    #[case::single_payer(
        vec![purchase(1, vec![
            share(1, Some(3000), Some(1000)),
            share(2, Some(0), Some(1000)),
            share(3, Some(0), Some(1000)),
        ])],
        vec![-2000, 1000, 1000]
    )]
    #[case::two_purchases(
        vec![
            purchase(1, vec![
                share(1, Some(3000), Some(1000)),
                share(2, Some(0), Some(1000)),
                share(3, Some(0), Some(1000)),
            ]),
            purchase(2, vec![
                share(1, None, Some(500)),
                share(2, Some(1000), Some(500)),
                share(3, None, None),
            ]),
        ],
        vec![-1500, 500, 1000]
    )]
    fn net_balances(
        participants: Vec<Participant>,
        #[case] purchases: Vec<Purchase>,
        #[case] expected: Vec<i64>,
    ) {
        let balances =
            BalanceCalculator::calculate(&participants, &purchases).expect("balances fit");

        let actual: Vec<i64> = balances.values().map(|money| money.amount()).collect();
        assert_eq!(actual, expected);
        assert_eq!(
            balances.keys().copied().collect::<Vec<_>>(),
            vec![ParticipantId(1), ParticipantId(2), ParticipantId(3)]
        );
    }

    #[rstest]
    fn unknown_participant_is_appended(participants: Vec<Participant>) {
        let purchases = [purchase(1, vec![share(1, Some(200), Some(100)), share(9, None, Some(100))])];

        let balances =
            BalanceCalculator::calculate(&participants, &purchases).expect("balances fit");

        assert_eq!(balances.len(), 4);
        assert_eq!(balances.get(&ParticipantId(9)), Some(&Money::from_i64(100)));
        assert_eq!(
            Money::checked_sum(balances.values().copied()),
            Some(Money::ZERO)
        );
    }

    #[rstest]
    fn balance_out_of_range_is_an_error(participants: Vec<Participant>) {
        let purchases = [
            purchase(1, vec![share(1, Some(0), Some(i64::MAX))]),
            purchase(2, vec![share(1, Some(0), Some(1))]),
        ];

        assert_eq!(
            BalanceCalculator::calculate(&participants, &purchases),
            Err(AmountError::AmountTooLarge)
        );
    }
}
