use crate::{
    common::{error::PartyRejection, ids::IdGen},
    domain::party::{Party, PartyRegistry},
};

pub fn handle(
    registry: &mut PartyRegistry,
    ids: &mut IdGen,
    name: &str,
    mobile: &str,
) -> Result<Party, PartyRejection> {
    let name = name.trim();
    let mobile = mobile.trim();

    // an empty name is refused before any other check
    if name.is_empty() {
        return Err(PartyRejection::EmptyName);
    }

    // one party per name, compared case-insensitively
    if registry.contains_name(name) {
        return Err(PartyRejection::DuplicateName(name.to_string()));
    }

    let party = Party {
        id: ids.next_id(),
        name: name.to_string(),
        mobile: mobile.to_string(),
    };
    apply_add(registry, party.clone());
    Ok(party)
}

fn apply_add(registry: &mut PartyRegistry, party: Party) {
    // newest first
    registry.parties.insert(0, party);
}
