#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::config::{LedgerSource, Settings};

fn setup() -> (App, Ledger) {
    let ledger = crate::seed::sample_ledger().unwrap();
    let mut app = App::new(Settings {
        source: LedgerSource::Sample,
        export_dir: std::env::temp_dir(),
    });
    app.refresh(&ledger);
    (app, ledger)
}

// ── parse_add_args ────────────────────────────────────────────

#[test]
fn test_parse_add_args() {
    let draft = parse_add_args("expense 2024-01-20 45.10 food & dining | Lunch with team").unwrap();
    assert_eq!(draft.kind, "expense");
    assert_eq!(draft.date, "2024-01-20");
    assert_eq!(draft.amount, "45.10");
    assert_eq!(draft.category, "Food & Dining");
    assert_eq!(draft.description, "Lunch with team");
}

#[test]
fn test_parse_add_args_keeps_unknown_category() {
    let draft = parse_add_args("expense 2024-01-20 12 Pet Supplies | Kibble").unwrap();
    assert_eq!(draft.category, "Pet Supplies");
}

#[test]
fn test_parse_add_args_requires_separator_and_fields() {
    assert!(parse_add_args("expense 2024-01-20 45.10 Travel").is_err());
    assert!(parse_add_args("expense 2024-01-20 | Lunch").is_err());
    assert!(parse_add_args("").is_err());
}

// ── parse_budget_args ─────────────────────────────────────────

#[test]
fn test_parse_budget_args() {
    let (category, limit) = parse_budget_args("bills & utilities 500").unwrap();
    assert_eq!(category, "Bills & Utilities");
    assert_eq!(limit, dec!(500));
}

#[test]
fn test_parse_budget_args_rejects_bad_limit() {
    assert!(parse_budget_args("Shopping").is_err());
    assert!(parse_budget_args("Shopping 0").is_err());
    assert!(parse_budget_args("Shopping lots").is_err());
}

// ── handle_command ────────────────────────────────────────────

#[test]
fn test_add_command_updates_ledger_and_view() {
    let (mut app, mut ledger) = setup();
    handle_command(
        "add expense 2024-01-20 50 Shopping | Shoes",
        &mut app,
        &mut ledger,
    )
    .unwrap();

    assert_eq!(ledger.transaction_count(), 7);
    assert_eq!(ledger.budget("Shopping").unwrap().spent, dec!(250));
    assert_eq!(app.transactions.len(), 7);
    assert_eq!(app.selected_transaction().unwrap().description, "Shoes");
    assert!(app.status_message.starts_with("Added expense"));
}

#[test]
fn test_add_command_reports_validation_error() {
    let (mut app, mut ledger) = setup();
    handle_command("add expense 2024-01-20 -5 Shopping | Oops", &mut app, &mut ledger).unwrap();
    assert_eq!(ledger.transaction_count(), 6);
    assert!(app.status_message.starts_with("Error:"), "{}", app.status_message);
}

#[test]
fn test_budget_command_creates_budget() {
    let (mut app, mut ledger) = setup();
    handle_command("budget travel 900", &mut app, &mut ledger).unwrap();

    assert_eq!(ledger.budget("Travel").unwrap().limit, dec!(900));
    assert_eq!(app.screen, Screen::Budgets);
    assert_eq!(app.budgets[app.budget_index].budget.category, "Travel");
}

#[test]
fn test_delete_requires_confirmation() {
    let (mut app, mut ledger) = setup();
    app.screen = Screen::Transactions;
    app.transaction_index = 1;
    handle_command("delete", &mut app, &mut ledger).unwrap();

    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(ledger.transaction_count(), 6);

    let action = app.pending_action.take().unwrap();
    run_pending(action, &mut app, &mut ledger);
    assert_eq!(ledger.transaction_count(), 5);
    assert_eq!(ledger.budget("Food & Dining").unwrap().spent, dec!(75));
    assert_eq!(app.status_message, "Deleted: Groceries");
}

#[test]
fn test_delete_outside_transactions_screen() {
    let (mut app, mut ledger) = setup();
    handle_command("delete", &mut app, &mut ledger).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.pending_action.is_none());
}

#[test]
fn test_export_command_writes_snapshot() {
    let (mut app, mut ledger) = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snap.csv");
    handle_command(&format!("export {}", path.display()), &mut app, &mut ledger).unwrap();

    assert!(path.exists());
    assert!(app.status_message.starts_with("Exported 11 records"));
}

#[test]
fn test_unknown_command_suggests() {
    let (mut app, mut ledger) = setup();
    handle_command("budgts", &mut app, &mut ledger).unwrap();
    assert!(app.status_message.contains("Did you mean :budgets?"), "{}", app.status_message);
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("add", "add"), 0);
    assert_eq!(levenshtein("budgt", "budget"), 1);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_delete_by_id_from_any_screen() {
    let (mut app, mut ledger) = setup();
    handle_command("delete #3", &mut app, &mut ledger).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete #3 'Gas'?");

    let action = app.pending_action.take().unwrap();
    run_pending(action, &mut app, &mut ledger);
    assert_eq!(ledger.budget("Transportation").unwrap().spent, dec!(0));
}

#[test]
fn test_delete_unknown_id() {
    let (mut app, mut ledger) = setup();
    handle_command("delete 99", &mut app, &mut ledger).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "No transaction 99");

    handle_command("delete abc", &mut app, &mut ledger).unwrap();
    assert!(app.status_message.starts_with("Invalid transaction id"));
}
