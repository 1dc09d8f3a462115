use rand::{SeedableRng, rngs::StdRng};
use rstest::{fixture, rstest};
use warikan_application::{
    PurchaseDetails, PurchaseDraft, PurchaseForm, PurchaseRepository, PurchaseService,
    RepositoryError, ServiceError,
};
use warikan_domain::{
    AmountInput, Money, Participant, ParticipantId, PurchaseId, RemainderPolicy, SplitCalculator,
};
use warikan_infrastructure::InMemoryPurchaseRepository;

#[fixture]
fn participants() -> Vec<Participant> {
    vec![
        Participant::new(1, "alice"),
        Participant::new(2, "bob"),
        Participant::new(3, "carol"),
    ]
}

fn yen(value: i64) -> AmountInput {
    AmountInput::Value(Money::from_i64(value))
}

/// `payer` paid `total`, split equally among everyone.
fn draft(
    participants: &[Participant],
    payer: usize,
    total: i64,
    title: &str,
    date: Option<&str>,
) -> PurchaseDraft {
    let mut form = PurchaseForm::new(
        participants.to_vec(),
        SplitCalculator::new(RemainderPolicy::Shuffled),
        StdRng::seed_from_u64(11),
    );
    form.set_amount_paid(payer, yen(total)).expect("payer index in range");
    form.set_split_equally(true).expect("split should succeed");
    form.submit(PurchaseDetails {
        title: title.to_string(),
        date: date.map(str::to_string),
        note: String::new(),
    })
    .expect("equal split is balanced")
}

fn balance_values(
    service: &PurchaseService<'_>,
    participants: &[Participant],
    ids: &[PurchaseId],
) -> Vec<i64> {
    service
        .balances(participants, ids)
        .expect("purchases exist")
        .values()
        .map(|money| money.amount())
        .collect()
}

#[rstest]
fn created_purchases_are_listed_unsettled(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);

    let first = service.create(draft(&participants, 0, 3000, "hotel", Some("2024-04-01")));
    let second = service.create(draft(&participants, 1, 900, "lunch", Some("2024-04-02")));

    assert_eq!(first, PurchaseId(1));
    assert_eq!(second, PurchaseId(2));
    let unsettled: Vec<PurchaseId> = service.unsettled().iter().map(|p| p.id).collect();
    assert_eq!(unsettled, vec![second, first]);
    assert!(service.settled().is_empty());
}

#[rstest]
fn bulk_settle_moves_purchases(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let first = service.create(draft(&participants, 0, 3000, "hotel", None));
    let second = service.create(draft(&participants, 1, 900, "lunch", None));
    let third = service.create(draft(&participants, 2, 600, "coffee", None));

    service.settle(&[first, third]).expect("ids exist");

    let settled: Vec<PurchaseId> = service.settled().iter().map(|p| p.id).collect();
    let unsettled: Vec<PurchaseId> = service.unsettled().iter().map(|p| p.id).collect();
    assert_eq!(settled, vec![first, third]);
    assert_eq!(unsettled, vec![second]);

    service.unsettle(first).expect("id exists");
    assert_eq!(service.settled().len(), 1);
}

#[rstest]
fn settle_is_all_or_nothing(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let id = service.create(draft(&participants, 0, 300, "snacks", None));

    let result = service.settle(&[id, PurchaseId(99)]);

    assert_eq!(
        result,
        Err(ServiceError::Repository(RepositoryError::NotFound(PurchaseId(99))))
    );
    assert!(service.settled().is_empty());
}

#[rstest]
fn settle_requires_a_selection() {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);

    assert_eq!(service.settle(&[]), Err(ServiceError::EmptySelection));
}

#[rstest]
fn balances_cover_only_selected_purchases(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let hotel = service.create(draft(&participants, 0, 3000, "hotel", None));
    let lunch = service.create(draft(&participants, 1, 900, "lunch", None));

    assert_eq!(
        balance_values(&service, &participants, &[hotel]),
        vec![-2000, 1000, 1000]
    );
    assert_eq!(
        balance_values(&service, &participants, &[hotel, lunch]),
        vec![-1700, 400, 1300]
    );
    assert_eq!(balance_values(&service, &participants, &[]), vec![0, 0, 0]);
}

#[rstest]
fn update_keeps_id_and_settlement_state(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let id = service.create(draft(&participants, 0, 3000, "hotel", None));
    service.settle(&[id]).expect("id exists");

    service
        .update(id, draft(&participants, 2, 600, "hotel (fixed)", None))
        .expect("id exists");

    let purchase = repository.get(id).expect("id exists");
    assert_eq!(purchase.title, "hotel (fixed)");
    assert!(purchase.is_settled);
    assert_eq!(
        purchase
            .share_of(ParticipantId(1))
            .and_then(|share| share.amount_paid),
        Some(Money::ZERO)
    );
    assert_eq!(
        purchase
            .share_of(ParticipantId(3))
            .and_then(|share| share.amount_paid),
        Some(Money::from_i64(600))
    );
}

#[rstest]
fn delete_removes_purchase(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let id = service.create(draft(&participants, 0, 100, "gum", None));

    service.delete(id).expect("id exists");

    assert_eq!(
        service.delete(id),
        Err(ServiceError::Repository(RepositoryError::NotFound(id)))
    );
    assert!(service.unsettled().is_empty());
}

#[rstest]
fn edit_round_trip_through_form(participants: Vec<Participant>) {
    let repository = InMemoryPurchaseRepository::new();
    let service = PurchaseService::new(&repository);
    let id = service.create(draft(&participants, 0, 3000, "hotel", None));
    let stored = repository.get(id).expect("id exists");

    let mut form = PurchaseForm::for_edit(
        participants.clone(),
        &stored,
        SplitCalculator::default(),
        StdRng::seed_from_u64(5),
    );
    form.set_amount_paid(0, yen(3300)).expect("index in range");
    assert!(form.submit(PurchaseDetails::default()).is_err());

    form.fill_remaining(0).expect("index in range");
    let updated = form
        .submit(PurchaseDetails {
            title: "hotel".to_string(),
            ..PurchaseDetails::default()
        })
        .expect("remaining amount balances the form");
    service.update(id, updated).expect("id exists");

    assert_eq!(
        balance_values(&service, &participants, &[id]),
        vec![-2000, 1000, 1000]
    );
}
