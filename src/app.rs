use tracing::{debug, info, warn};

use crate::{
    common::{
        action::{Action, Outcome},
        ids::IdGen,
    },
    domain::{
        entry::EntryForm,
        ledger::Ledger,
        party::PartyRegistry,
        totals::{self, Totals},
    },
    io::{
        i18n::{Lang, Strings},
        store::Store,
    },
    worker::processor::Processor,
};

/// The application state and its single controller.
///
/// Owns the ledger, the party registry, the entry draft and the store, with
/// an explicit lifecycle: state is loaded once at construction and the
/// mutated collection is written back after every accepted mutation. Totals
/// are recomputed from scratch whenever the ledger changes.
pub struct App {
    store: Store,
    processor: Processor,
    ids: IdGen,
    ledger: Ledger,
    parties: PartyRegistry,
    form: EntryForm,
    totals: Totals,
    lang: Lang,
    strings: Strings,
}

impl App {
    /// Boots the app over `store`: loads both collections (fail-soft),
    /// computes the initial totals and selects the default language.
    pub fn new(store: Store) -> Self {
        let loaded = store.load();
        let ledger = Ledger::from_vec(loaded.entries);
        let parties = PartyRegistry::from_vec(loaded.parties);
        let totals = totals::compute(ledger.entries());
        info!(
            entries = ledger.len(),
            parties = parties.len(),
            "app state loaded"
        );
        Self {
            store,
            processor: Processor::new(),
            ids: IdGen::new(),
            ledger,
            parties,
            form: EntryForm::new(),
            totals,
            lang: Lang::default(),
            strings: Strings::load(Lang::default()),
        }
    }

    /// Applies one user action: dispatches it through the processor, writes
    /// whichever collection changed back to its slot, and refreshes the
    /// totals when the ledger changed.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let outcome = self.processor.process(
            &mut self.ledger,
            &mut self.parties,
            &mut self.form,
            &mut self.ids,
            action,
        );
        match &outcome {
            Outcome::EntrySaved(_) => {
                self.persist_entries();
                self.totals = totals::compute(self.ledger.entries());
            }
            Outcome::PartyAdded(_) => self.persist_parties(),
            Outcome::EntryRejected(err) => debug!(%err, "entry save refused"),
            Outcome::PartyRejected(rejection) => debug!(%rejection, "party add refused"),
            Outcome::FormUpdated => {}
        }
        outcome
    }

    // Writes are fire-and-forget: a failure is logged and swallowed, the
    // in-memory state stays authoritative.
    fn persist_entries(&self) {
        if let Err(e) = self.store.save_entries(self.ledger.entries()) {
            warn!(error = %e, "failed to persist entries");
        }
    }

    fn persist_parties(&self) {
        if let Err(e) = self.store.save_parties(self.parties.parties()) {
            warn!(error = %e, "failed to persist parties");
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn parties(&self) -> &PartyRegistry {
        &self.parties
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn language(&self) -> Lang {
        self.lang
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    /// Switches the display language; a bundle that cannot be loaded falls
    /// back to English.
    pub fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        self.strings = Strings::load(lang);
    }
}
