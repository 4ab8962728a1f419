use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::common::money::Money;

/// Transaction direction. Debit grows the owed-to-you balance, credit
/// shrinks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Debit,
    Credit,
}

/// The counterparty's relationship, orthogonal to the entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Seller,
}

/// One recorded transaction, immutable once saved.
///
/// `party` and `party_mobile` are a snapshot of the party taken at creation
/// time, not a reference: later party edits never rewrite history. All fields
/// except the id default when absent from stored data, so old or hand-edited
/// records still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub amount: Money,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub party_mobile: String,
    #[serde(default)]
    pub date: String,
}

/// Draft state for the next entry. Lives only in memory; the raw `amount`
/// text is validated when the save action runs.
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub kind: EntryKind,
    pub role: Role,
    pub amount: String,
    pub note: String,
    pub party: String,
    pub party_mobile: String,
    pub date: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            kind: EntryKind::Debit,
            role: Role::Customer,
            amount: String::new(),
            note: String::new(),
            party: String::new(),
            party_mobile: String::new(),
            date: today(),
        }
    }
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the selected party's name/mobile snapshot into the draft.
    pub fn select_party(&mut self, name: &str, mobile: &str) {
        self.party = name.to_string();
        self.party_mobile = mobile.to_string();
    }

    /// After a successful save only `amount` and `note` reset; kind, role,
    /// party and date stay put for rapid repeated entry.
    pub fn clear_after_save(&mut self) {
        self.amount.clear();
        self.note.clear();
    }
}

/// Current UTC date as `YYYY-MM-DD`, the form's default date.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults() {
        let form = EntryForm::new();
        assert_eq!(form.kind, EntryKind::Debit);
        assert_eq!(form.role, Role::Customer);
        assert!(form.amount.is_empty());
        assert!(form.note.is_empty());
        assert!(form.party.is_empty());
        assert!(form.party_mobile.is_empty());
        assert_eq!(form.date, today());
    }

    #[test]
    fn today_is_iso_date_shaped() {
        let d = today();
        assert_eq!(d.len(), 10);
        assert_eq!(&d[4..5], "-");
        assert_eq!(&d[7..8], "-");
    }

    #[test]
    fn select_party_copies_snapshot() {
        let mut form = EntryForm::new();
        form.select_party("Bob", "9990001");
        assert_eq!(form.party, "Bob");
        assert_eq!(form.party_mobile, "9990001");
    }

    #[test]
    fn clear_after_save_keeps_context_fields() {
        let mut form = EntryForm::new();
        form.kind = EntryKind::Credit;
        form.role = Role::Seller;
        form.select_party("Bob", "9990001");
        form.amount = "120".to_string();
        form.note = "tea".to_string();
        form.date = "2024-01-01".to_string();

        form.clear_after_save();

        assert!(form.amount.is_empty());
        assert!(form.note.is_empty());
        assert_eq!(form.kind, EntryKind::Credit);
        assert_eq!(form.role, Role::Seller);
        assert_eq!(form.party, "Bob");
        assert_eq!(form.party_mobile, "9990001");
        assert_eq!(form.date, "2024-01-01");
    }

    #[test]
    fn entry_serializes_with_camel_case_wire_keys() {
        let entry = Entry {
            id: "1700000000000".to_string(),
            kind: EntryKind::Debit,
            role: Role::Customer,
            amount: Money::new(5_000_000),
            note: "sale".to_string(),
            party: "Bob".to_string(),
            party_mobile: "9990001".to_string(),
            date: "2024-01-01".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"debit\""));
        assert!(json.contains("\"role\":\"customer\""));
        assert!(json.contains("\"partyMobile\":\"9990001\""));
        assert!(json.contains("\"amount\":500"));
    }

    #[test]
    fn entry_deserializes_sparse_record_with_defaults() {
        let entry: Entry = serde_json::from_str("{\"id\":\"42\"}").unwrap();
        assert_eq!(entry.id, "42");
        assert_eq!(entry.kind, EntryKind::Debit);
        assert_eq!(entry.role, Role::Customer);
        assert_eq!(entry.amount, Money::zero());
        assert!(entry.note.is_empty());
        assert!(entry.date.is_empty());
    }

    #[test]
    fn entry_round_trips() {
        let entry = Entry {
            id: "7".to_string(),
            kind: EntryKind::Credit,
            role: Role::Seller,
            amount: Money::new(125_000),
            note: String::new(),
            party: "Asha".to_string(),
            party_mobile: String::new(),
            date: "2024-02-02".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
