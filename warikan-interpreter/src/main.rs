#![warn(clippy::uninlined_format_args)]

mod config;

use std::{borrow::Cow, env, io, process};

use config::AppConfig;
use tracing_subscriber::EnvFilter;
use warikan_application::{FormError, PurchaseDetails, PurchaseForm, PurchaseService};
use warikan_domain::{
    AmountInput, AmountPaidEntry, AmountToPayEntry, EntryList, Money, Participant,
    fill_remaining, paid_sum, validate_amount_sums,
};
use warikan_i18n as i18n;
use warikan_infrastructure::InMemoryPurchaseRepository;
use warikan_presentation::{
    BalancePresenter, format_amount_error, format_split_error, format_validation_errors,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "\
Usage:
  warikan split <total> <participants>
  warikan check <paid,...> <to_pay,...>
  warikan fill <paid,...> <to_pay,...> <index>
  warikan balance <paid,...>:<to_pay,...> [<paid,...>:<to_pay,...> ...]";

fn main() {
    init_logging();
    if let Err(err) = run(env::args().skip(1).collect()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> CliResult<()> {
    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    tracing::debug!(?config, "loaded configuration");

    let output = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["split", total, participants] => split(&config, total, participants)?,
        ["check", paid, to_pay] => check(paid, to_pay)?,
        ["fill", paid, to_pay, index] => fill(paid, to_pay, index)?,
        ["balance", purchases @ ..] if !purchases.is_empty() => balance(&config, purchases)?,
        _ => return Err(USAGE.into()),
    };

    println!("{output}");
    Ok(())
}

fn split(config: &AppConfig, total: &str, participants: &str) -> CliResult<String> {
    let total: i64 = total
        .trim()
        .parse()
        .map_err(|_| format!("Invalid total '{total}'"))?;
    let participant_count: usize = participants
        .trim()
        .parse()
        .map_err(|_| format!("Invalid participant count '{participants}'"))?;

    let mut rng = config.rng();
    let shares = config
        .calculator()
        .distribute(Money::from_i64(total), participant_count, &mut rng)
        .map_err(|err| format_split_error(&err))?;

    Ok(join(&shares))
}

fn check(paid: &str, to_pay: &str) -> CliResult<String> {
    let (paid, to_pay) = parse_entries(paid, to_pay);
    validate_amount_sums(&paid, &to_pay).map_err(|errors| format_validation_errors(&errors, &[]))?;
    Ok(i18n::VALID.to_string())
}

fn fill(paid: &str, to_pay: &str, index: &str) -> CliResult<String> {
    let (paid, to_pay) = parse_entries(paid, to_pay);
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("Invalid index '{index}'"))?;
    if index >= to_pay.len() {
        return Err(format!(
            "Index {index} is out of range for {} entries",
            to_pay.len()
        )
        .into());
    }

    let paid_total =
        paid_sum(&paid).map_err(|err| format_amount_error(EntryList::AmountPaid, &err))?;
    let remaining = fill_remaining(paid_total, &to_pay, index)
        .map_err(|err| format_amount_error(EntryList::AmountToPay, &err))?;
    Ok(remaining.to_string())
}

/// Records each `<paid,...>:<to_pay,...>` purchase and prints what every
/// participant still owes across all of them. Participants are numbered
/// from the first purchase's paid list.
fn balance(config: &AppConfig, purchases: &[&str]) -> CliResult<String> {
    let participant_count = purchases
        .first()
        .and_then(|purchase| purchase.split_once(':'))
        .map_or(0, |(paid, _)| paid.split(',').count());
    let participants: Vec<Participant> = (1..=participant_count as u64)
        .map(|id| Participant::new(id, format!("#{id}")))
        .collect();

    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let mut ids = Vec::with_capacity(purchases.len());

    for (position, purchase) in purchases.iter().enumerate() {
        let (paid, to_pay) = purchase
            .split_once(':')
            .ok_or_else(|| format!("Purchase '{purchase}' must be <paid,...>:<to_pay,...>"))?;

        let mut form = PurchaseForm::new(participants.clone(), config.calculator(), config.rng());
        for (idx, input) in parse_list(paid).enumerate() {
            form.set_amount_paid(idx, input)
                .map_err(|err| form_error(&err, &participants))?;
        }
        for (idx, input) in parse_list(to_pay).enumerate() {
            form.set_amount_to_pay(idx, input)
                .map_err(|err| form_error(&err, &participants))?;
        }

        let draft = form
            .submit(PurchaseDetails {
                title: format!("purchase {}", position + 1),
                ..PurchaseDetails::default()
            })
            .map_err(|err| form_error(&err, &participants))?;
        ids.push(service.create(draft));
    }

    let balances = service
        .balances(&participants, &ids)
        .map_err(|err| err.to_string())?;
    Ok(BalancePresenter::render(&balances, &participants)
        .trim_end()
        .to_string())
}

fn form_error(err: &FormError, participants: &[Participant]) -> String {
    match err {
        FormError::Validation(errors) => format_validation_errors(errors, participants),
        other => other.to_string(),
    }
}

fn parse_entries(paid: &str, to_pay: &str) -> (Vec<AmountPaidEntry>, Vec<AmountToPayEntry>) {
    let paid = parse_list(paid).map(AmountPaidEntry::new).collect();
    let to_pay = parse_list(to_pay).map(AmountToPayEntry::new).collect();
    (paid, to_pay)
}

/// Comma-separated amounts. Blank items are unset fields.
fn parse_list(list: &str) -> impl Iterator<Item = AmountInput> + '_ {
    list.split(',').map(AmountInput::from_text)
}

fn join(amounts: &[Money]) -> String {
    amounts
        .iter()
        .map(Money::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
