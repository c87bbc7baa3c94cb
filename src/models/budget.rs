use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Budget {
    pub(crate) category: String,
    pub(crate) limit: Decimal,
    /// Sum of expense amounts in `category`. Maintained by the ledger only.
    pub(crate) spent: Decimal,
}

impl Budget {
    pub(crate) fn remaining(&self) -> Decimal {
        self.limit - self.spent
    }

    /// How far spending is past the limit, zero while under it.
    pub(crate) fn overage(&self) -> Decimal {
        (self.spent - self.limit).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetStatus {
    /// Above 80% of the limit is a warning, above 100% is over budget.
    pub(crate) fn from_utilization(ratio: Decimal) -> Self {
        if ratio > Decimal::ONE {
            Self::OverBudget
        } else if ratio > Decimal::new(8, 1) {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::Warning => "Warning",
            Self::OverBudget => "Over budget",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
