#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(kind: TransactionKind, amount: Decimal) -> Transaction {
    Transaction {
        id: TransactionId(1),
        amount,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        description: "Test".into(),
        category: "Other".into(),
        kind,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(TransactionKind::Income, dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(100.00));
}

#[test]
fn test_expense() {
    let txn = make_txn(TransactionKind::Expense, dec!(50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-50.00));
}

#[test]
fn test_transaction_id_display_and_parse() {
    let id = TransactionId(42);
    assert_eq!(format!("{id}"), "#42");
    assert_eq!("#42".parse::<TransactionId>().unwrap(), id);
    assert_eq!(" 42 ".parse::<TransactionId>().unwrap(), id);
    assert!("abc".parse::<TransactionId>().is_err());
}

// ── TransactionKind ───────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("INCOME"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse(" expense "), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("out"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("refund"), None);
    assert_eq!(TransactionKind::parse(""), None);
}

#[test]
fn test_kind_roundtrip() {
    for k in TransactionKind::all() {
        assert_eq!(TransactionKind::parse(k.as_str()), Some(*k));
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", TransactionKind::Income), "income");
    assert_eq!(format!("{}", TransactionKind::Expense), "expense");
}

// ── Budget ────────────────────────────────────────────────────

fn make_budget(limit: Decimal, spent: Decimal) -> Budget {
    Budget {
        category: "Food & Dining".into(),
        limit,
        spent,
    }
}

#[test]
fn test_budget_remaining_and_overage() {
    let under = make_budget(dec!(400), dec!(225));
    assert_eq!(under.remaining(), dec!(175));
    assert_eq!(under.overage(), Decimal::ZERO);

    let over = make_budget(dec!(100), dec!(130.50));
    assert_eq!(over.remaining(), dec!(-30.50));
    assert_eq!(over.overage(), dec!(30.50));
}

#[test]
fn test_budget_status_thresholds() {
    assert_eq!(BudgetStatus::from_utilization(dec!(0)), BudgetStatus::OnTrack);
    assert_eq!(BudgetStatus::from_utilization(dec!(0.8)), BudgetStatus::OnTrack);
    assert_eq!(BudgetStatus::from_utilization(dec!(0.81)), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::from_utilization(dec!(1)), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::from_utilization(dec!(1.01)), BudgetStatus::OverBudget);
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_find_default_category() {
    assert_eq!(find_default("food & dining"), Some("Food & Dining"));
    assert_eq!(find_default("  TRAVEL "), Some("Travel"));
    assert_eq!(find_default("Pets"), None);
}

#[test]
fn test_budget_categories_exclude_income() {
    let cats: Vec<&str> = budget_categories().collect();
    assert_eq!(cats.len(), DEFAULT_CATEGORIES.len() - 1);
    assert!(!cats.contains(&INCOME_CATEGORY));
    assert!(cats.contains(&"Shopping"));
}
