use serde::Deserialize;
use tracing::warn;

const EN: &str = include_str!("i18n/en.json");
const HI: &str = include_str!("i18n/hi.json");

/// Display language. English is the default and the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }
}

/// One bundle of display strings, keyed the way the front end expects them.
/// Carries no behavior; the only contract is that loading always produces a
/// usable bundle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strings {
    pub app_title: String,
    pub language: String,
    pub home: String,
    pub add_entry: String,
    pub ledger: String,
    pub parties: String,
    pub reports: String,
    pub total_debit: String,
    pub total_credit: String,
    pub balance: String,
    pub debit: String,
    pub credit: String,
    pub customer: String,
    pub seller: String,
    pub select_party: String,
    pub amount: String,
    pub note: String,
    pub date: String,
    pub save: String,
    pub party_name: String,
    pub add_party: String,
    pub no_entries: String,
    pub entry_saved: String,
}

impl Strings {
    /// Loads the bundle for `lang`, falling back to English if it cannot be
    /// parsed, and to an empty bundle if even that fails. Never panics.
    pub fn load(lang: Lang) -> Strings {
        match lang {
            Lang::En => Self::from_raw(EN),
            Lang::Hi => Self::from_raw(HI),
        }
    }

    /// Parses one raw bundle. A bundle that does not parse, or is missing
    /// keys, is rejected whole and replaced by English, then by the empty
    /// bundle.
    fn from_raw(raw: &str) -> Strings {
        match serde_json::from_str(raw) {
            Ok(strings) => strings,
            Err(e) => {
                warn!(error = %e, "bad string bundle, falling back to en");
                serde_json::from_str(EN).unwrap_or_else(|e| {
                    warn!(error = %e, "default string bundle unusable");
                    Strings::default()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_parses() {
        let strings = Strings::load(Lang::En);
        assert_eq!(strings.app_title, "Party Ledger");
        assert_eq!(strings.debit, "Debit");
        assert_eq!(strings.entry_saved, "Entry saved");
    }

    #[test]
    fn hindi_bundle_parses() {
        let strings = Strings::load(Lang::Hi);
        assert_eq!(strings.debit, "नामे");
        assert_eq!(strings.credit, "जमा");
        assert!(!strings.app_title.is_empty());
    }

    #[test]
    fn bundles_cover_the_same_keys() {
        // Both files deserialize into the full struct, so a missing key in
        // either bundle fails here rather than at display time.
        let en: Strings = serde_json::from_str(EN).unwrap();
        let hi: Strings = serde_json::from_str(HI).unwrap();
        assert!(!en.no_entries.is_empty());
        assert!(!hi.no_entries.is_empty());
    }

    #[test]
    fn junk_bundle_falls_back_to_english() {
        let strings = Strings::from_raw("{not json");
        assert_eq!(strings.app_title, "Party Ledger");

        // a bundle missing keys is rejected whole, not half-applied
        let strings = Strings::from_raw("{\"appTitle\":\"X\"}");
        assert_eq!(strings.app_title, "Party Ledger");
        assert_eq!(strings.debit, "Debit");
    }

    #[test]
    fn lang_codes() {
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Hi.code(), "hi");
        assert_eq!(Lang::default(), Lang::En);
    }
}
