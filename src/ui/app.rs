use rust_decimal::Decimal;

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{Budget, BudgetStatus, Transaction, TransactionId};

const RECENT_COUNT: usize = 5;
const TOP_CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
    Insights,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budgets,
            Self::Insights,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Insights => write!(f, "Insights"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: TransactionId, description: String },
}

/// A budget together with its utilization, as shown on the Budgets and Insights screens.
#[derive(Debug, Clone)]
pub(crate) struct BudgetLine {
    pub(crate) budget: Budget,
    pub(crate) utilization: Decimal,
    pub(crate) status: BudgetStatus,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) settings: Settings,

    // Summary values, refreshed from the ledger after every change
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) net_balance: Decimal,
    pub(crate) savings_rate: Option<Decimal>,
    pub(crate) average_expense: Option<Decimal>,
    pub(crate) expense_count: usize,
    pub(crate) spending_by_category: Vec<(String, Decimal)>,
    pub(crate) top_categories: Vec<(String, Decimal)>,
    pub(crate) recent: Vec<Transaction>,

    // Transactions
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Budgets
    pub(crate) budgets: Vec<BudgetLine>,
    pub(crate) budget_index: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            settings,

            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            net_balance: Decimal::ZERO,
            savings_rate: None,
            average_expense: None,
            expense_count: 0,
            spending_by_category: Vec::new(),
            top_categories: Vec::new(),
            recent: Vec::new(),

            transactions: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,

            budgets: Vec::new(),
            budget_index: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        self.refresh_summary(ledger);
        self.refresh_transactions(ledger);
        self.refresh_budgets(ledger);
    }

    fn refresh_summary(&mut self, ledger: &Ledger) {
        self.total_income = ledger.total_income();
        self.total_expenses = ledger.total_expenses();
        self.net_balance = ledger.net_balance();
        // Undefined ratios (no income, no expenses) render as "n/a".
        self.savings_rate = ledger.savings_rate().ok();
        self.average_expense = ledger.average_expense_amount().ok();
        self.expense_count = ledger.expense_count();
        self.spending_by_category = ledger.expenses_by_category();
        self.top_categories = ledger.top_spending_categories(TOP_CATEGORY_COUNT);
        self.recent = ledger
            .recent_transactions(RECENT_COUNT)
            .into_iter()
            .cloned()
            .collect();
    }

    fn refresh_transactions(&mut self, ledger: &Ledger) {
        self.transactions = ledger.transactions().cloned().collect();
        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    fn refresh_budgets(&mut self, ledger: &Ledger) {
        self.budgets = ledger
            .budgets()
            .iter()
            .map(|budget| {
                let utilization = ledger
                    .budget_utilization(&budget.category)
                    .unwrap_or(Decimal::ZERO);
                BudgetLine {
                    budget: budget.clone(),
                    utilization,
                    status: BudgetStatus::from_utilization(utilization),
                }
            })
            .collect();
        if self.budget_index >= self.budgets.len() {
            self.budget_index = self.budgets.len().saturating_sub(1);
        }
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_index)
    }

    /// Move the transaction cursor to `id`, if it is listed.
    pub(crate) fn select_transaction(&mut self, id: TransactionId) {
        if let Some(pos) = self.transactions.iter().position(|t| t.id == id) {
            self.transaction_index = pos;
            let page = self.visible_rows.max(1);
            if pos >= self.transaction_scroll + page {
                self.transaction_scroll = pos.saturating_sub(page - 1);
            } else if pos < self.transaction_scroll {
                self.transaction_scroll = pos;
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::TransactionDraft;

    fn settings() -> Settings {
        Settings {
            source: crate::config::LedgerSource::Sample,
            export_dir: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_refresh_from_sample() {
        let ledger = crate::seed::sample_ledger().unwrap();
        let mut app = App::new(settings());
        app.refresh(&ledger);

        assert_eq!(app.total_income, dec!(3500));
        assert_eq!(app.total_expenses, dec!(625));
        assert_eq!(app.net_balance, dec!(2875));
        assert_eq!(app.transactions.len(), 6);
        assert_eq!(app.recent.len(), 5);
        assert_eq!(app.recent[0].description, "Restaurant");
        assert_eq!(app.budgets.len(), 5);
        assert_eq!(app.budgets[2].budget.category, "Shopping");
        assert_eq!(app.budgets[2].status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_refresh_empty_ledger_leaves_ratios_undefined() {
        let mut app = App::new(settings());
        app.refresh(&Ledger::new());
        assert!(app.savings_rate.is_none());
        assert!(app.average_expense.is_none());
        assert_eq!(app.transaction_index, 0);
    }

    #[test]
    fn test_cursor_clamped_after_removal() {
        let mut ledger = crate::seed::sample_ledger().unwrap();
        let mut app = App::new(settings());
        app.refresh(&ledger);
        app.transaction_index = 5;

        let last = app.transactions[5].id;
        ledger.remove_transaction(last).unwrap();
        app.refresh(&ledger);
        assert_eq!(app.transaction_index, 4);
    }

    #[test]
    fn test_select_transaction() {
        let mut ledger = Ledger::new();
        let mut ids = Vec::new();
        for i in 0..30 {
            let draft = TransactionDraft::new("income", "2024-02-01", "10", "Income", &format!("Pay {i}"));
            ids.push(ledger.add_transaction(&draft).unwrap().id);
        }
        let mut app = App::new(settings());
        app.visible_rows = 10;
        app.refresh(&ledger);

        app.select_transaction(ids[25]);
        assert_eq!(app.transaction_index, 25);
        assert_eq!(app.transaction_scroll, 16);
    }
}
