use serde::{Deserialize, Serialize};

/// A named counterparty with an optional contact number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mobile: String,
}

/// The registry of known parties, newest first.
///
/// Names are unique under case-insensitive comparison; lookups lowercase both
/// sides with `str::to_lowercase`, so non-ASCII names compare correctly too.
#[derive(Debug, Default)]
pub struct PartyRegistry {
    pub parties: Vec<Party>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self {
            parties: Vec::new(),
        }
    }

    pub fn from_vec(parties: Vec<Party>) -> Self {
        Self { parties }
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.parties.iter().any(|p| p.name.to_lowercase() == needle)
    }
}
