use crate::common::money::Money;
use crate::domain::entry::{Entry, EntryKind};

/// Derived sums over the ledger. Never persisted; recomputed in full after
/// every ledger change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub debit: Money,
    pub credit: Money,
    pub balance: Money,
}

/// Sums debit and credit amounts over the given entries; `balance` is their
/// difference. Pure and total: every stored entry carries a valid amount (the
/// store coerces malformed ones to zero on load), so this can never fail.
pub fn compute(entries: &[Entry]) -> Totals {
    let mut debit = Money::zero();
    let mut credit = Money::zero();
    for e in entries {
        match e.kind {
            EntryKind::Debit => debit += e.amount,
            EntryKind::Credit => credit += e.amount,
        }
    }
    Totals {
        debit,
        credit,
        balance: debit - credit,
    }
}
