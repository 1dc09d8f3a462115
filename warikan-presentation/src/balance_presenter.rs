use std::fmt::Write as _;

use warikan_domain::{Participant, ParticipantBalances, ParticipantId};
use warikan_i18n as i18n;

pub struct BalancePresenter;

impl BalancePresenter {
    /// Two-column text table of what each participant still has to pay.
    pub fn render(balances: &ParticipantBalances, participants: &[Participant]) -> String {
        let rows: Vec<(String, String)> = balances
            .iter()
            .map(|(id, balance)| {
                let sign = if balance.amount() > 0 { "+" } else { "" };
                (
                    participant_label(*id, participants),
                    format!("{sign}{}", balance.amount()),
                )
            })
            .collect();

        let name_width = rows
            .iter()
            .map(|(name, _)| name.chars().count())
            .chain(std::iter::once(i18n::PARTICIPANT.chars().count()))
            .max()
            .unwrap_or(0);
        let amount_width = rows
            .iter()
            .map(|(_, amount)| amount.chars().count())
            .chain(std::iter::once(i18n::BALANCE.chars().count()))
            .max()
            .unwrap_or(0);

        let mut table = String::with_capacity(64 * (rows.len() + 1));
        let _ = writeln!(
            table,
            "{:<name_width$}  {:>amount_width$}",
            i18n::PARTICIPANT,
            i18n::BALANCE
        );
        for (name, amount) in &rows {
            let _ = writeln!(table, "{name:<name_width$}  {amount:>amount_width$}");
        }
        table
    }
}

fn participant_label(id: ParticipantId, participants: &[Participant]) -> String {
    participants
        .iter()
        .find(|participant| participant.id == id)
        .map_or_else(|| format!("#{id}"), |participant| participant.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warikan_domain::Money;

    #[test]
    fn renders_signed_amounts_in_participant_order() {
        let participants = [Participant::new(1, "alice"), Participant::new(2, "bob")];
        let balances = ParticipantBalances::from_iter([
            (ParticipantId(1), Money::from_i64(-1500)),
            (ParticipantId(2), Money::from_i64(1500)),
            (ParticipantId(7), Money::ZERO),
        ]);

        let rendered = BalancePresenter::render(&balances, &participants);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(i18n::PARTICIPANT));
        assert!(lines[1].starts_with("alice") && lines[1].ends_with("-1500"));
        assert!(lines[2].starts_with("bob") && lines[2].ends_with("+1500"));
        assert!(lines[3].starts_with("#7") && lines[3].ends_with('0'));
    }
}
