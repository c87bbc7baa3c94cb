/// Categories offered when entering transactions and budgets.
/// The ledger accepts any non-empty category name.
pub(crate) const DEFAULT_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Income",
    "Other",
];

pub(crate) const INCOME_CATEGORY: &str = "Income";

/// Find a default category by name (case-insensitive), returning its canonical spelling.
pub(crate) fn find_default(name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    DEFAULT_CATEGORIES
        .iter()
        .copied()
        .find(|c| c.to_lowercase() == lower)
}

/// Categories that make sense for a spending budget.
pub(crate) fn budget_categories() -> impl Iterator<Item = &'static str> {
    DEFAULT_CATEGORIES
        .iter()
        .copied()
        .filter(|c| *c != INCOME_CATEGORY)
}
