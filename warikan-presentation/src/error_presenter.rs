use warikan_domain::{AmountError, EntryList, Participant, SplitError, ValidationErrors};
use warikan_i18n as i18n;

pub fn format_amount_error(list: EntryList, error: &AmountError) -> String {
    let message = match (list, error) {
        (EntryList::AmountPaid, AmountError::NonNumericAmount) => i18n::PAID_NON_NUMERIC,
        (EntryList::AmountPaid, AmountError::NegativeAmount) => i18n::PAID_NEGATIVE,
        (EntryList::AmountPaid, AmountError::NonIntegerAmount) => i18n::PAID_NON_INTEGER,
        (EntryList::AmountToPay, AmountError::NonNumericAmount) => i18n::TO_PAY_NON_NUMERIC,
        (EntryList::AmountToPay, AmountError::NegativeAmount) => i18n::TO_PAY_NEGATIVE,
        (EntryList::AmountToPay, AmountError::NonIntegerAmount) => i18n::TO_PAY_NON_INTEGER,
        (_, AmountError::AmountTooLarge) => i18n::AMOUNT_TOO_LARGE,
        (_, AmountError::SumMismatch { paid, owed }) => {
            return i18n::sum_mismatch(paid.amount(), owed.amount()).to_string();
        }
    };
    message.to_string()
}

pub fn format_split_error(error: &SplitError) -> String {
    match error {
        SplitError::InvalidArgument { .. } => i18n::NO_PARTICIPANTS.to_string(),
        SplitError::TooManyParticipants { .. } => i18n::TOO_MANY_PARTICIPANTS.to_string(),
    }
}

/// One line per field error: `<label> (<list>): <message>`.
///
/// The label is the participant's name when `participants` covers the
/// index, otherwise the field path.
pub fn format_validation_errors(errors: &ValidationErrors, participants: &[Participant]) -> String {
    errors
        .errors()
        .iter()
        .map(|field| {
            let list_label = match field.path.list {
                EntryList::AmountPaid => i18n::AMOUNT_PAID,
                EntryList::AmountToPay => i18n::AMOUNT_TO_PAY,
            };
            let message = format_amount_error(field.path.list, &field.error);
            match participants.get(field.path.index) {
                Some(participant) => format!("{} ({list_label}): {message}", participant.name),
                None => format!("{} ({list_label}): {message}", field.path),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use warikan_domain::{AmountInput, AmountPaidEntry, AmountToPayEntry, validate_amount_sums};

    fn errors(paid: &[&str], owed: &[&str]) -> ValidationErrors {
        let paid: Vec<_> = paid
            .iter()
            .map(|value| AmountPaidEntry::new(AmountInput::from_text(value)))
            .collect();
        let owed: Vec<_> = owed
            .iter()
            .map(|value| AmountToPayEntry::new(AmountInput::from_text(value)))
            .collect();
        validate_amount_sums(&paid, &owed).expect_err("inputs are invalid")
    }

    #[rstest]
    #[case::paid_non_numeric(EntryList::AmountPaid, AmountError::NonNumericAmount, i18n::PAID_NON_NUMERIC)]
    #[case::paid_negative(EntryList::AmountPaid, AmountError::NegativeAmount, i18n::PAID_NEGATIVE)]
    #[case::to_pay_non_numeric(
        EntryList::AmountToPay,
        AmountError::NonNumericAmount,
        i18n::TO_PAY_NON_NUMERIC
    )]
    #[case::to_pay_non_integer(
        EntryList::AmountToPay,
        AmountError::NonIntegerAmount,
        i18n::TO_PAY_NON_INTEGER
    )]
    #[case::too_large(EntryList::AmountPaid, AmountError::AmountTooLarge, i18n::AMOUNT_TOO_LARGE)]
    fn per_list_messages(
        #[case] list: EntryList,
        #[case] error: AmountError,
        #[case] expected: &str,
    ) {
        assert_eq!(format_amount_error(list, &error), expected);
    }

    #[test]
    fn sum_mismatch_mentions_both_totals() {
        let errors = errors(&["1000", "0"], &["400", "500"]);

        let rendered = format_validation_errors(&errors, &[]);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.contains(i18n::SUM_MISMATCH)));
        assert!(lines.iter().all(|line| line.contains("1000") && line.contains("900")));
        assert!(lines[0].starts_with("purchasers_amount_paid[0].amount_paid"));
    }

    #[test]
    fn participant_names_label_the_lines() {
        let errors = errors(&["abc", "0"], &["0", "0"]);
        let participants = [Participant::new(1, "alice"), Participant::new(2, "bob")];

        let rendered = format_validation_errors(&errors, &participants);

        assert_eq!(
            rendered,
            format!(
                "alice ({}): {}",
                i18n::AMOUNT_PAID,
                i18n::PAID_NON_NUMERIC
            )
        );
    }

    #[rstest]
    #[case::no_participants(
        SplitError::InvalidArgument { participant_count: 0 },
        i18n::NO_PARTICIPANTS
    )]
    #[case::too_many(
        SplitError::TooManyParticipants { participant_count: usize::MAX },
        i18n::TOO_MANY_PARTICIPANTS
    )]
    fn split_error_message(#[case] error: SplitError, #[case] expected: &str) {
        assert_eq!(format_split_error(&error), expected);
    }
}
