use crate::common::error::{EntryError, PartyRejection};
use crate::domain::entry::{Entry, EntryKind, Role};
use crate::domain::party::Party;

/// One user action fed to the processor: an edit to the draft, a selection,
/// or a submission.
#[derive(Debug, Clone)]
pub enum Action {
    AddParty { name: String, mobile: String },
    SaveEntry,
    SetKind(EntryKind),
    SetRole(Role),
    SelectParty { name: String, mobile: String },
    EditAmount(String),
    EditNote(String),
    EditDate(String),
}

/// What applying an action did. Rejections are named variants so a caller
/// can prompt the user instead of diffing state to find out what happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PartyAdded(Party),
    PartyRejected(PartyRejection),
    EntrySaved(Entry),
    EntryRejected(EntryError),
    FormUpdated,
}
