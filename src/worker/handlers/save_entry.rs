use std::str::FromStr;

use crate::{
    common::{error::EntryError, ids::IdGen, money::Money},
    domain::{
        entry::{Entry, EntryForm},
        ledger::Ledger,
    },
};

pub fn handle(
    ledger: &mut Ledger,
    form: &mut EntryForm,
    ids: &mut IdGen,
) -> Result<Entry, EntryError> {
    // a party must be selected before anything else is looked at
    if form.party.is_empty() {
        return Err(EntryError::MissingParty);
    }

    let raw_amount = form.amount.trim();
    if raw_amount.is_empty() {
        return Err(EntryError::MissingAmount);
    }

    // reject rather than coerce: a non-numeric or negative amount must not
    // land in the book as a zero-amount entry
    let amount = Money::from_str(raw_amount)
        .map_err(|_| EntryError::InvalidAmount(raw_amount.to_string()))?;
    if amount.is_negative() {
        return Err(EntryError::InvalidAmount(raw_amount.to_string()));
    }

    let entry = Entry {
        id: ids.next_id(),
        kind: form.kind,
        role: form.role,
        amount,
        note: form.note.clone(),
        party: form.party.clone(),
        party_mobile: form.party_mobile.clone(),
        date: form.date.clone(),
    };
    apply_save(ledger, entry.clone());
    form.clear_after_save();
    Ok(entry)
}

fn apply_save(ledger: &mut Ledger, entry: Entry) {
    ledger.prepend(entry);
}
