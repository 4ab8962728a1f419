use crate::{
    common::{
        action::{Action, Outcome},
        ids::IdGen,
    },
    domain::{entry::EntryForm, ledger::Ledger, party::PartyRegistry},
    worker::handlers::{add_party, save_entry},
};

/// Routes one user action at a time into the matching handler. Collection
/// mutations go through the handlers; plain form edits are applied inline.
#[derive(Debug, Default)]
pub struct Processor {}

impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        registry: &mut PartyRegistry,
        form: &mut EntryForm,
        ids: &mut IdGen,
        action: Action,
    ) -> Outcome {
        match action {
            Action::AddParty { name, mobile } => {
                match add_party::handle(registry, ids, &name, &mobile) {
                    Ok(party) => Outcome::PartyAdded(party),
                    Err(rejection) => Outcome::PartyRejected(rejection),
                }
            }
            Action::SaveEntry => match save_entry::handle(ledger, form, ids) {
                Ok(entry) => Outcome::EntrySaved(entry),
                Err(err) => Outcome::EntryRejected(err),
            },
            Action::SetKind(kind) => {
                form.kind = kind;
                Outcome::FormUpdated
            }
            Action::SetRole(role) => {
                form.role = role;
                Outcome::FormUpdated
            }
            Action::SelectParty { name, mobile } => {
                form.select_party(&name, &mobile);
                Outcome::FormUpdated
            }
            Action::EditAmount(value) => {
                form.amount = value;
                Outcome::FormUpdated
            }
            Action::EditNote(value) => {
                form.note = value;
                Outcome::FormUpdated
            }
            Action::EditDate(value) => {
                form.date = value;
                Outcome::FormUpdated
            }
        }
    }
}
