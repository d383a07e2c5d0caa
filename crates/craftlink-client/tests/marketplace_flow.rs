//! End-to-end flows across session, verification, jobs, wallet and
//! persistence.

use craftlink_client::{ClientError, Store, StoreEvent};
use craftlink_client::ops::jobs::{NewJob, NewProposal};
use craftlink_client::ops::profile::IdentitySubmission;
use craftlink_client::ops::session::Registration;
use craftlink_shared::constants::{KYC_APPROVED_MESSAGE, ROUTE_DEVELOPER_HOME};
use craftlink_shared::{
    Counterparty, JobType, KycDecision, KycStatus, NotificationTarget, Role, TxType,
};
use craftlink_store::Database;

fn freelance_job(title: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: "Atlas Retail".into(),
        location: "Remote".into(),
        job_type: JobType::Freelance,
        description: "Build and ship it.".into(),
        deadline: None,
        skills: vec!["Rust".into(), "SQL".into()],
        budget_min: Some(50_000),
        budget_max: Some(120_000),
    }
}

#[test]
fn developer_onboarding_through_first_withdrawal() {
    let mut store = Store::in_memory();

    // Register, land on the developer home.
    let dev = store
        .register_account(Registration::new(
            "Sam",
            "sam@example.com",
            "060000000",
            Role::Developer,
        ))
        .unwrap();
    assert_eq!(store.current_path(), ROUTE_DEVELOPER_HOME);

    // Withdrawal is closed until the identity review completes.
    store.record_deposit(20_000, "starter funds").unwrap();
    assert!(matches!(
        store.request_withdrawal(5_000, "payout"),
        Err(ClientError::KycRequired)
    ));

    // Submit identity, then approve as admin.
    store
        .submit_identity_verification(IdentitySubmission::default())
        .unwrap();
    assert_eq!(store.session().unwrap().kyc_status(), KycStatus::Pending);
    store
        .resolve_identity_verification(dev, KycDecision::Approve)
        .unwrap();

    // Approval notified the developer with the fixed wording.
    let notice = store
        .notifications()
        .iter()
        .find(|n| n.target == NotificationTarget::User(dev))
        .unwrap();
    assert_eq!(notice.message, KYC_APPROVED_MESSAGE);

    // Now the payout goes through and drains the wallet.
    store.request_withdrawal(20_000, "payout").unwrap();
    assert_eq!(store.ledger_balance(Counterparty::User(dev)), 0);
    assert_eq!(store.session().unwrap().wallet_balance(), 0);
}

#[test]
fn client_pays_a_developer_and_the_platform_takes_its_cut() {
    let mut store = Store::in_memory();
    store
        .create_session("atlas@retail.example", Some(Role::Client), None)
        .unwrap();
    let client = store.session().unwrap().id();
    let dev = store.directory()[0].id;

    store.record_payment(dev, 200_000, "storefront milestone").unwrap();

    // Payment and commission land as separate completed entries.
    let payment = store
        .ledger()
        .iter()
        .find(|tx| tx.tx_type == TxType::Payment && tx.from == Counterparty::User(client))
        .unwrap();
    assert_eq!(payment.to, Counterparty::User(dev));

    let fee = store
        .ledger()
        .iter()
        .find(|tx| tx.tx_type == TxType::Fee && tx.from == Counterparty::User(dev))
        .unwrap();
    assert_eq!(fee.amount, 16_000);
    assert_eq!(fee.to, Counterparty::System);

    // Stored balance mirrors the net ledger position.
    let entry = store.directory().iter().find(|d| d.id == dev).unwrap();
    assert_eq!(
        entry.wallet_balance as i64,
        store.ledger_balance(Counterparty::User(dev))
    );
}

#[test]
fn job_board_and_proposal_views_stay_consistent() {
    let mut store = Store::in_memory();
    store
        .create_session("atlas@retail.example", Some(Role::Client), None)
        .unwrap();
    let job = store.create_job(freelance_job("Point-of-sale sync")).unwrap();
    store.end_session().unwrap();

    // A developer bids on it.
    store
        .register_account(Registration::new(
            "Ada",
            "ada@example.com",
            String::new(),
            Role::Developer,
        ))
        .unwrap();
    store
        .create_proposal(NewProposal {
            job_id: job,
            message: "I shipped the same integration last year.".into(),
            price: 90_000,
        })
        .unwrap();
    store.end_session().unwrap();

    // The posting is still on the board and carries the bid.
    assert!(store.jobs().iter().any(|j| j.id == job));
    let bids: Vec<_> = store
        .proposals()
        .iter()
        .filter(|p| p.job_id == job)
        .collect();
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].developer_name, "Ada");
}

#[test]
fn persisted_slices_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("craftlink.db");

    let job;
    let dev;
    {
        let mut store = Store::open(Database::open_at(&path).unwrap());
        dev = store
            .register_account(Registration::new(
                "Sam",
                "sam@example.com",
                String::new(),
                Role::Developer,
            ))
            .unwrap();
        job = store.create_job(freelance_job("Inventory audit tool")).unwrap();
        store.record_deposit(7_500, "starter funds").unwrap();
    }

    let store = Store::open(Database::open_at(&path).unwrap());

    // Session, directory, jobs and ledger all came back from disk.
    assert_eq!(store.session().unwrap().id(), dev);
    assert!(store.directory().iter().any(|d| d.id == dev));
    assert_eq!(store.jobs()[0].id, job);
    assert_eq!(store.ledger_balance(Counterparty::User(dev)), 7_500);
    let entry = store.directory().iter().find(|d| d.id == dev).unwrap();
    assert_eq!(entry.wallet_balance, 7_500);
}

#[test]
fn logout_is_durable_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("craftlink.db");

    {
        let mut store = Store::open(Database::open_at(&path).unwrap());
        store
            .create_session("c@example.com", Some(Role::Client), None)
            .unwrap();
        store.end_session().unwrap();
    }

    let store = Store::open(Database::open_at(&path).unwrap());
    assert!(store.session().is_none());
}

#[test]
fn blocking_takes_effect_on_the_next_login() {
    let mut store = Store::in_memory();

    let dev = store
        .register_account(Registration::new(
            "Sam",
            "sam@example.com",
            String::new(),
            Role::Developer,
        ))
        .unwrap();
    store.end_session().unwrap();

    store
        .create_session(
            craftlink_shared::constants::ADMIN_EMAIL,
            None,
            Some(craftlink_shared::constants::ADMIN_PASSWORD),
        )
        .unwrap();
    store.set_user_blocked(dev, true).unwrap();
    store.end_session().unwrap();

    let err = store
        .create_session("sam@example.com", Some(Role::Developer), None)
        .unwrap_err();
    assert!(matches!(err, ClientError::AccountBlocked));
    assert!(store.session().is_none());
}

#[test]
fn every_mutation_broadcasts_its_change_event() {
    let mut store = Store::in_memory();
    let mut rx = store.subscribe();

    store
        .create_session("c@example.com", Some(Role::Client), None)
        .unwrap();
    store.create_job(freelance_job("Anything")).unwrap();
    store.post_message("hello");

    let mut seen = Vec::new();
    while let Ok(event) = rx.try_recv() {
        seen.push(event);
    }
    assert!(seen.contains(&StoreEvent::SessionChanged));
    assert!(seen.contains(&StoreEvent::Navigated));
    assert!(seen.contains(&StoreEvent::JobsChanged));
    assert!(seen.contains(&StoreEvent::MessagesChanged));
}
