use anyhow::{Context, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::Budget;
use crate::ui::util::{format_amount, format_percent, format_ratio, progress_bar, truncate};

pub(crate) fn as_cli(args: &[String], ledger: &Ledger, settings: &Settings) -> Result<()> {
    match args[0].as_str() {
        "summary" | "s" => cli_summary(ledger),
        "transactions" | "txns" => cli_transactions(ledger),
        "budgets" => cli_budgets(ledger),
        "export" => cli_export(&args[1..], ledger, settings),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finviz {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("finviz: personal finance dashboard");
    println!();
    println!("Usage: finviz [--from <snapshot.csv> | --empty] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print totals and spending by category");
    println!("  transactions                  List all transactions");
    println!("  budgets                       Show budget usage");
    println!("  export [path]                 Write a CSV snapshot (default: ~/finviz-export.csv)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --from <snapshot.csv>         Start from an exported snapshot");
    println!("  --empty                       Start with no data");
    println!();
    println!("Environment:");
    println!("  FINVIZ_EXPORT_DIR             Directory for default exports");
    println!("  RUST_LOG                      Log filter (e.g. finviz=debug)");
}

fn cli_summary(ledger: &Ledger) -> Result<()> {
    let spending = ledger.expenses_by_category();

    println!("finviz summary");
    println!("{}", "─".repeat(40));
    println!("  Income:        {}", format_amount(ledger.total_income()));
    println!("  Expenses:      {}", format_amount(ledger.total_expenses()));
    println!("  Net Balance:   {}", format_amount(ledger.net_balance()));
    println!("  Savings Rate:  {}", format_ratio(ledger.savings_rate().ok()));
    println!(
        "  Avg Expense:   {}",
        ledger
            .average_expense_amount()
            .map(format_amount)
            .unwrap_or_else(|_| "n/a".into())
    );
    println!("  Total Txns:    {}", ledger.transaction_count());

    if !spending.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &spending {
            println!("  {name:<24} {}", format_amount(*amount));
        }
    }

    Ok(())
}

fn cli_transactions(ledger: &Ledger) -> Result<()> {
    if ledger.transaction_count() == 0 {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<5} {:<11} {:<28} {:<18} {:>14}",
        "ID", "Date", "Description", "Category", "Amount"
    );
    println!("{}", "─".repeat(80));
    for txn in ledger.transactions() {
        println!(
            "{:<5} {:<11} {:<28} {:<18} {:>14}",
            txn.id.to_string(),
            txn.date.format(crate::ledger::DATE_FORMAT).to_string(),
            truncate(&txn.description, 28),
            truncate(&txn.category, 18),
            format_amount(txn.signed_amount()),
        );
    }
    Ok(())
}

fn cli_budgets(ledger: &Ledger) -> Result<()> {
    if ledger.budgets().is_empty() {
        println!("No budgets");
        return Ok(());
    }

    println!(
        "{:<20} {:>12} {:>12} {:>8}  {:<12} Status",
        "Category", "Spent", "Limit", "Used", ""
    );
    println!("{}", "─".repeat(80));
    for budget in ledger.budgets() {
        print_budget_line(ledger, budget)?;
    }
    Ok(())
}

fn print_budget_line(ledger: &Ledger, budget: &Budget) -> Result<()> {
    let utilization = ledger.budget_utilization(&budget.category)?;
    let status = ledger.budget_status(&budget.category)?;
    let ratio = utilization.to_f64().unwrap_or(0.0);

    let note = if budget.overage() > Decimal::ZERO {
        format!("  over by {}", format_amount(budget.overage()))
    } else {
        format!("  {} left", format_amount(budget.remaining()))
    };

    println!(
        "{:<20} {:>12} {:>12} {:>8}  {:<12} {status}{note}",
        truncate(&budget.category, 20),
        format_amount(budget.spent),
        format_amount(budget.limit),
        format_percent(utilization),
        progress_bar(ratio, 10),
    );
    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger, settings: &Settings) -> Result<()> {
    let path = settings.export_path(args.first().map(String::as_str));
    let count = crate::snapshot::export(ledger, &path)
        .with_context(|| format!("Failed to export to {}", path.display()))?;
    println!("Exported {count} records to {}", path.display());
    Ok(())
}
