#![allow(clippy::unwrap_used)]

use std::io::Write;

use rust_decimal_macros::dec;

use super::*;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_export_then_load_preserves_state() {
    let before = crate::seed::sample_ledger().unwrap();
    let file = tempfile::NamedTempFile::new().unwrap();

    let count = export(&before, file.path()).unwrap();
    assert_eq!(count, 11);

    let loaded = load(file.path()).unwrap();
    assert_eq!(loaded.total_income(), before.total_income());
    assert_eq!(loaded.total_expenses(), before.total_expenses());
    assert_eq!(loaded.transaction_count(), before.transaction_count());
    assert_eq!(loaded.budgets(), before.budgets());

    let descriptions: Vec<&str> = loaded.transactions().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions[0], "Salary");
    assert_eq!(descriptions[5], "Restaurant");
}

#[test]
fn test_export_never_writes_spent() {
    let mut ledger = crate::ledger::Ledger::new();
    ledger.upsert_budget("Shopping", dec!(300)).unwrap();
    let file = tempfile::NamedTempFile::new().unwrap();
    export(&ledger, file.path()).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        content,
        "record,date,description,category,kind,amount\nbudget,,,Shopping,,300\n"
    );
}

#[test]
fn test_load_rederives_spent_regardless_of_row_order() {
    let file = make_csv_file(
        "record,date,description,category,kind,amount\n\
         transaction,2024-01-03,Gas,Transportation,expense,80\n\
         budget,,,Transportation,,200\n\
         transaction,2024-01-04,Bus,Transportation,expense,40\n\
         transaction,2024-01-01,Salary,Income,income,3500\n",
    );
    let ledger = load(file.path()).unwrap();
    assert_eq!(ledger.budget("Transportation").unwrap().spent, dec!(120));
    assert_eq!(ledger.total_income(), dec!(3500));
}

#[test]
fn test_load_quoted_fields() {
    let file = make_csv_file(
        "record,date,description,category,kind,amount\n\
         transaction,2024-01-02,\"Dinner, with friends\",Food & Dining,expense,\"1,050.25\"\n",
    );
    let ledger = load(file.path()).unwrap();
    let txn = ledger.transactions().next().unwrap();
    assert_eq!(txn.description, "Dinner, with friends");
    assert_eq!(txn.amount, dec!(1050.25));
}

#[test]
fn test_load_skips_blank_record_type() {
    let file = make_csv_file(
        "record,date,description,category,kind,amount\n\
         ,,,,,\n\
         budget,,,Travel,,900\n",
    );
    let ledger = load(file.path()).unwrap();
    assert_eq!(ledger.budgets().len(), 1);
}

#[test]
fn test_load_reports_line_of_bad_transaction() {
    let file = make_csv_file(
        "record,date,description,category,kind,amount\n\
         budget,,,Travel,,900\n\
         transaction,2024-01-02,Refund,Travel,expense,-20\n",
    );
    let err = load(file.path()).unwrap_err();
    assert!(format!("{err}").contains("Line 3"), "{err:#}");
}

#[test]
fn test_load_reports_line_after_multiline_description() {
    let file = make_csv_file(
        "record,date,description,category,kind,amount\n\
         transaction,2024-01-02,\"Dinner\nwith friends\",Food & Dining,expense,40\n\
         transaction,2024-01-03,Bus,Transportation,expense,abc\n",
    );
    let err = load(file.path()).unwrap_err();
    assert!(format!("{err}").starts_with("Line 4:"), "{err:#}");
}

#[test]
fn test_load_rejects_unknown_record() {
    let file = make_csv_file("record,date,description,category,kind,amount\naccount,,,,,\n");
    let err = load(file.path()).unwrap_err();
    assert!(format!("{err}").contains("unknown record type 'account'"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load(&dir.path().join("missing.csv")).is_err());
}
