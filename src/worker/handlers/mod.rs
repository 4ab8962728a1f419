pub mod add_party;
pub mod save_entry;
