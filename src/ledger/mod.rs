mod error;

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub(crate) use error::LedgerError;

use crate::models::{Budget, BudgetStatus, Transaction, TransactionDraft, TransactionId, TransactionKind};

pub(crate) type LedgerResult<T> = std::result::Result<T, LedgerError>;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Owns all transactions and budgets.
///
/// Each budget's `spent` always equals the sum of expense amounts in its
/// category. Mutations keep it in step incrementally, and every mutation
/// either applies completely or leaves the ledger untouched.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    // Ids are monotonic, so key order is insertion order.
    transactions: BTreeMap<TransactionId, Transaction>,
    budgets: Vec<Budget>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self {
            transactions: BTreeMap::new(),
            budgets: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a ledger from an initial state by replaying it through
    /// `upsert_budget` and `add_transaction`.
    pub(crate) fn from_parts(
        budgets: &[(String, Decimal)],
        transactions: &[TransactionDraft],
    ) -> LedgerResult<Self> {
        let mut ledger = Self::new();
        for (category, limit) in budgets {
            ledger.upsert_budget(category, *limit)?;
        }
        for draft in transactions {
            ledger.add_transaction(draft)?;
        }
        Ok(ledger)
    }

    // ── Mutations ─────────────────────────────────────────────

    pub(crate) fn add_transaction(&mut self, draft: &TransactionDraft) -> LedgerResult<Transaction> {
        let txn = self
            .validate_draft(draft)
            .inspect_err(|e| warn!(error = %e, "rejected transaction"))?;
        // Category totals and budget spent are bounded by the kind total.
        let kind_total = if txn.is_income() {
            self.total_income()
        } else {
            self.total_expenses()
        };
        if kind_total.checked_add(txn.amount).is_none() {
            warn!(amount = %txn.amount, kind = %txn.kind, "rejected transaction: total overflow");
            return Err(LedgerError::validation("Amount too large"));
        }
        self.next_id += 1;

        if txn.is_expense() {
            if let Some(budget) = self.budget_mut(&txn.category) {
                budget.spent += txn.amount;
            }
        }

        debug!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            category = %txn.category,
            "transaction added"
        );
        self.transactions.insert(txn.id, txn.clone());
        Ok(txn)
    }

    pub(crate) fn remove_transaction(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let txn = self
            .transactions
            .remove(&id)
            .ok_or(LedgerError::TransactionNotFound(id))
            .inspect_err(|e| warn!(error = %e, "rejected removal"))?;

        if txn.is_expense() {
            if let Some(budget) = self.budget_mut(&txn.category) {
                budget.spent = (budget.spent - txn.amount).max(Decimal::ZERO);
            }
        }

        debug!(id = %txn.id, category = %txn.category, "transaction removed");
        Ok(txn)
    }

    /// Create a budget for `category`, or change the limit of the existing one.
    /// A new budget starts with `spent` summed from the expenses already recorded.
    pub(crate) fn upsert_budget(&mut self, category: &str, limit: Decimal) -> LedgerResult<Budget> {
        let category = category.trim();
        if category.is_empty() {
            warn!("rejected budget without category");
            return Err(LedgerError::validation("Category is required"));
        }
        if limit <= Decimal::ZERO {
            warn!(%category, %limit, "rejected non-positive budget limit");
            return Err(LedgerError::validation(format!(
                "Budget limit must be greater than zero, got {limit}"
            )));
        }

        if let Some(budget) = self.budget_mut(category) {
            budget.limit = limit;
            debug!(%category, %limit, "budget limit updated");
            return Ok(budget.clone());
        }

        let budget = Budget {
            category: category.to_string(),
            limit,
            spent: self.expenses_in(category),
        };
        debug!(%category, %limit, spent = %budget.spent, "budget created");
        self.budgets.push(budget.clone());
        Ok(budget)
    }

    fn validate_draft(&self, draft: &TransactionDraft) -> LedgerResult<Transaction> {
        let amount = parse_amount("Amount", &draft.amount)?;
        let date = parse_date(&draft.date)?;
        let description = required("Description", &draft.description)?;
        let category = required("Category", &draft.category)?;
        let kind_raw = required("Type", &draft.kind)?;
        let kind = TransactionKind::parse(kind_raw).ok_or_else(|| {
            LedgerError::validation(format!("Type must be income or expense, got '{kind_raw}'"))
        })?;

        Ok(Transaction {
            id: TransactionId(self.next_id),
            amount,
            date,
            description: description.to_string(),
            category: category.to_string(),
            kind,
        })
    }

    fn budget_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.category == category)
    }

    fn expenses_in(&self, category: &str) -> Decimal {
        self.expenses()
            .filter(|t| t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values().filter(|t| t.is_expense())
    }

    // ── Lookups ───────────────────────────────────────────────

    pub(crate) fn transactions(&self) -> impl DoubleEndedIterator<Item = &Transaction> {
        self.transactions.values()
    }

    pub(crate) fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn expense_count(&self) -> usize {
        self.expenses().count()
    }

    /// The last `n` transactions added, newest first.
    pub(crate) fn recent_transactions(&self, n: usize) -> Vec<&Transaction> {
        self.transactions.values().rev().take(n).collect()
    }

    pub(crate) fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub(crate) fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    // ── Derived values ────────────────────────────────────────

    pub(crate) fn total_income(&self) -> Decimal {
        self.transactions
            .values()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    pub(crate) fn total_expenses(&self) -> Decimal {
        self.expenses().map(|t| t.amount).sum()
    }

    pub(crate) fn net_balance(&self) -> Decimal {
        self.total_income() - self.total_expenses()
    }

    /// Expense totals per category, in order of first appearance.
    /// Categories without any expense are left out.
    pub(crate) fn expenses_by_category(&self) -> Vec<(String, Decimal)> {
        let mut totals: Vec<(String, Decimal)> = Vec::new();
        for txn in self.expenses() {
            match totals.iter_mut().find(|(name, _)| *name == txn.category) {
                Some((_, sum)) => *sum += txn.amount,
                None => totals.push((txn.category.clone(), txn.amount)),
            }
        }
        totals
    }

    /// Largest expense categories first; ties keep first-appearance order.
    pub(crate) fn top_spending_categories(&self, n: usize) -> Vec<(String, Decimal)> {
        let mut totals = self.expenses_by_category();
        totals.sort_by(|a, b| b.1.cmp(&a.1));
        totals.truncate(n);
        totals
    }

    /// `spent / limit` as a ratio.
    pub(crate) fn budget_utilization(&self, category: &str) -> LedgerResult<Decimal> {
        let budget = self
            .budget(category)
            .ok_or_else(|| LedgerError::BudgetNotFound(category.to_string()))?;
        budget
            .spent
            .checked_div(budget.limit)
            .ok_or(LedgerError::DivisionByZero("budget limit"))
    }

    pub(crate) fn budget_status(&self, category: &str) -> LedgerResult<BudgetStatus> {
        self.budget_utilization(category)
            .map(BudgetStatus::from_utilization)
    }

    /// Net balance as a share of income.
    pub(crate) fn savings_rate(&self) -> LedgerResult<Decimal> {
        self.net_balance()
            .checked_div(self.total_income())
            .ok_or(LedgerError::DivisionByZero("total income"))
    }

    pub(crate) fn average_expense_amount(&self) -> LedgerResult<Decimal> {
        let count = self.expense_count();
        if count == 0 {
            return Err(LedgerError::DivisionByZero("expense count"));
        }
        Ok(self.total_expenses() / Decimal::from(count))
    }
}

// ── Input parsing ─────────────────────────────────────────────

fn required<'a>(field: &str, value: &'a str) -> LedgerResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LedgerError::validation(format!("{field} is required")))
    } else {
        Ok(trimmed)
    }
}

/// Parse a user-entered amount. Accepts `$` and thousands separators; must be > 0.
pub(crate) fn parse_amount(field: &str, raw: &str) -> LedgerResult<Decimal> {
    let value = required(field, raw)?;
    let cleaned = value.replace(['$', ','], "");
    let amount = Decimal::from_str(cleaned.trim())
        .map_err(|_| LedgerError::validation(format!("{field} '{value}' is not a number")))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> LedgerResult<NaiveDate> {
    let value = required("Date", raw)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        LedgerError::validation(format!("Date '{value}' is not a valid YYYY-MM-DD date"))
    })
}
