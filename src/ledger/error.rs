use thiserror::Error;

use crate::models::TransactionId;

/// Every ledger failure is recoverable: the caller reports it and the ledger is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LedgerError {
    #[error("{0}")]
    Validation(String),

    #[error("transaction {0} not found")]
    TransactionNotFound(TransactionId),

    #[error("no budget for category '{0}'")]
    BudgetNotFound(String),

    #[error("cannot divide: {0} is zero")]
    DivisionByZero(&'static str),
}

impl LedgerError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
