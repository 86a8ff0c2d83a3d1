//! Full flow over the JSON backend: registration, login, token
//! validation, owner-scoped expense mutations, and summaries.

use chrono::{Duration, NaiveDate};
use tempfile::tempdir;

use spendbook_auth::TokenService;
use spendbook_config::{Config, ConfigManager};
use spendbook_core::storage::AccountStore;
use spendbook_core::{AuthService, CoreError, ExpenseService};
use spendbook_domain::{DateRange, DateRangeError, ExpenseDraft};
use spendbook_storage_json::JsonStorage;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn register_login_record_and_summarize() {
    spendbook_core::init_tracing();
    let dir = tempdir().expect("tempdir");

    // Startup wiring: config decides the secret, TTL, and data file.
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("config manager");
    let mut cfg = Config::default();
    cfg.token_secret = Some("end-to-end-secret".to_string());
    cfg.data_file = Some(dir.path().join("spendbook.json"));
    manager.save(&cfg).expect("save config");
    let cfg = manager.load().expect("load config");

    let storage =
        JsonStorage::open(cfg.data_file.clone().expect("data file")).expect("open storage");
    let tokens = TokenService::with_ttl(
        &cfg.resolved_secret().expect("secret"),
        Duration::hours(cfg.token_ttl_hours),
    );

    // Register both users; each token resolves back to its identity.
    let ada_token =
        AuthService::register(&storage, &tokens, "ada@example.com", "hunter2").expect("register");
    AuthService::register(&storage, &tokens, "eve@example.com", "pass").expect("register");
    assert_eq!(tokens.validate(&ada_token).expect("valid"), "ada@example.com");

    // The transport resolves the token subject to an account id before
    // calling the core; mirror that here.
    let ada = storage
        .find_account_by_email("ada@example.com")
        .expect("find")
        .expect("account")
        .id;
    let eve = storage
        .find_account_by_email("eve@example.com")
        .expect("find")
        .expect("account")
        .id;

    for (title, category, amount, day) in [
        ("Groceries", "food", 10.0, 5),
        ("Lunch", "food", 5.0, 6),
        ("Bus", "travel", 3.0, 7),
    ] {
        ExpenseService::create(
            &storage,
            ada,
            ExpenseDraft::new(title, category, amount, date(2024, 1, day)),
        )
        .expect("create expense");
    }

    // Eve can neither read nor delete Ada's entries.
    let ada_expenses = ExpenseService::list(&storage, ada).expect("list");
    assert_eq!(ada_expenses.len(), 3);
    let first = ada_expenses[0].id;
    assert!(matches!(
        ExpenseService::get(&storage, eve, first).unwrap_err(),
        CoreError::AccessDenied
    ));
    assert!(matches!(
        ExpenseService::delete(&storage, eve, first).unwrap_err(),
        CoreError::AccessDenied
    ));
    assert!(ExpenseService::list(&storage, eve).expect("list").is_empty());

    let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
    let summary = ExpenseService::summary(&storage, ada, &range).expect("summary");
    assert_eq!(summary.total, 18.0);
    assert_eq!(summary.per_category["food"], 15.0);
    assert_eq!(summary.per_category["travel"], 3.0);

    // A reversed window is a validation fault, not an empty result.
    assert_eq!(
        DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err(),
        DateRangeError::Reversed
    );
}
