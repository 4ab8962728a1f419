pub mod entry;
pub mod ledger;
pub mod party;
pub mod totals;
