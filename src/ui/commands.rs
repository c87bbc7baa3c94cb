use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use super::util::format_amount;
use crate::ledger::{parse_amount, Ledger, LedgerError};
use crate::models::{
    budget_categories, find_default, TransactionDraft, TransactionId, DEFAULT_CATEGORIES,
};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit finviz", cmd_quit, r);
    register_command!("quit", "Quit finviz", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("i", "Go to Insights", cmd_insights, r);
    register_command!("insights", "Go to Insights", cmd_insights, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add expense 2024-01-20 45.10 Food & Dining | Lunch)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add transaction (e.g. :a income 2024-02-01 3500 Income | Salary)",
        cmd_add,
        r
    );
    register_command!(
        "budget",
        "Set budget (e.g. :budget Food & Dining 400)",
        cmd_budget,
        r
    );
    register_command!(
        "delete",
        "Delete selected transaction, or one by id (e.g. :delete #3)",
        cmd_delete,
        r
    );
    register_command!(
        "export",
        "Export a CSV snapshot (e.g. :export ~/finances.csv)",
        cmd_export,
        r
    );
    register_command!("categories", "List suggested categories", cmd_categories, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Argument parsing ─────────────────────────────────────────

const ADD_USAGE: &str = "Usage: :add <income|expense> <YYYY-MM-DD> <amount> <category> | <description>";
const BUDGET_USAGE: &str = "Usage: :budget <category> <limit>. Example: :budget Food & Dining 400";

/// Split `:add` arguments into a draft. Only the shape is checked here;
/// the ledger validates the values.
pub(crate) fn parse_add_args(args: &str) -> Result<TransactionDraft, &'static str> {
    let (head, description) = args.split_once('|').ok_or(ADD_USAGE)?;
    let mut words = head.split_whitespace();
    let (Some(kind), Some(date), Some(amount)) = (words.next(), words.next(), words.next()) else {
        return Err(ADD_USAGE);
    };
    let category = words.collect::<Vec<_>>().join(" ");

    Ok(TransactionDraft::new(
        kind,
        date,
        amount,
        canonical_category(&category),
        description.trim(),
    ))
}

/// Split `:budget` arguments: the last word is the limit, the rest the category.
pub(crate) fn parse_budget_args(args: &str) -> Result<(String, Decimal), String> {
    let (category, limit) = args.trim().rsplit_once(' ').ok_or(BUDGET_USAGE)?;
    let limit = parse_amount("Budget limit", limit).map_err(|e| e.to_string())?;
    Ok((canonical_category(category).to_string(), limit))
}

/// Use the suggested spelling of a category when the input matches one.
fn canonical_category(name: &str) -> &str {
    find_default(name).unwrap_or(name.trim())
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_insights(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Insights;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let draft = match parse_add_args(args) {
        Ok(draft) => draft,
        Err(usage) => {
            app.set_status(usage);
            return Ok(());
        }
    };

    match ledger.add_transaction(&draft) {
        Ok(txn) => {
            app.refresh(ledger);
            app.select_transaction(txn.id);
            let sign = if txn.is_income() { "+" } else { "-" };
            app.set_status(format!(
                "Added {}: {} {sign}{}",
                txn.kind,
                txn.description,
                format_amount(txn.amount)
            ));
        }
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(BUDGET_USAGE);
        return Ok(());
    }

    let (category, limit) = match parse_budget_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    match ledger.upsert_budget(&category, limit) {
        Ok(budget) => {
            app.refresh(ledger);
            app.screen = Screen::Budgets;
            if let Some(pos) = app
                .budgets
                .iter()
                .position(|b| b.budget.category == budget.category)
            {
                app.budget_index = pos;
            }
            app.set_status(format!(
                "Budget set: {} = {} ({} spent)",
                budget.category,
                format_amount(budget.limit),
                format_amount(budget.spent)
            ));
        }
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let target = if args.is_empty() {
        if app.screen != Screen::Transactions || app.transactions.is_empty() {
            app.set_status("Navigate to Transactions and select one first, or use :delete <id>");
            return Ok(());
        }
        app.selected_transaction().and_then(|t| ledger.transaction(t.id))
    } else {
        match args.parse::<TransactionId>() {
            Ok(id) => ledger.transaction(id),
            Err(_) => {
                app.set_status(format!("Invalid transaction id: {args}"));
                return Ok(());
            }
        }
    };

    match target {
        Some(txn) => {
            let id = txn.id;
            let description = txn.description.clone();
            app.confirm_message = format!("Delete {id} '{description}'?");
            app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
            app.input_mode = InputMode::Confirm;
        }
        None => app.set_status(format!("No transaction {args}")),
    }

    Ok(())
}

/// Carry out a confirmed action.
pub(crate) fn run_pending(action: PendingAction, app: &mut App, ledger: &mut Ledger) {
    match action {
        PendingAction::DeleteTransaction { id, description } => {
            match ledger.remove_transaction(id) {
                Ok(_) => {
                    app.refresh(ledger);
                    app.set_status(format!("Deleted: {description}"));
                }
                Err(LedgerError::TransactionNotFound(_)) => {
                    app.refresh(ledger);
                    app.set_status(format!("'{description}' was already deleted"));
                }
                Err(e) => app.set_status(format!("Error: {e}")),
            }
        }
    }
}

fn cmd_export(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let path = app.settings.export_path(Some(args));
    match crate::snapshot::export(ledger, &path) {
        Ok(count) => app.set_status(format!("Exported {count} records to {}", path.display())),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let msg = if app.screen == Screen::Budgets {
        budget_categories().collect::<Vec<_>>().join(", ")
    } else {
        DEFAULT_CATEGORIES.join(", ")
    };
    app.set_status(format!("Categories: {msg}"));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
