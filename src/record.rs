use serde::{Deserialize, Serialize};

use crate::store::Preferences;

pub const KEY_ID: &str = "id";
pub const KEY_NAME: &str = "nombre";
pub const KEY_SURNAME: &str = "apellidos";
pub const KEY_BIRTH_YEAR: &str = "nacimiento";

/// Every key a record occupies, in display order.
pub const RECORD_KEYS: [&str; 4] = [KEY_ID, KEY_NAME, KEY_SURNAME, KEY_BIRTH_YEAR];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub birth_year: Option<i32>,
}

impl PersonRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            birth_year,
        }
    }

    /// Builds a record from raw form input. An unparseable year becomes `None`.
    pub fn from_form(id: &str, name: &str, surname: &str, birth_year: &str) -> Self {
        Self::new(id, name, surname, parse_birth_year(birth_year))
    }

    /// The four stored entries for this record.
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            (KEY_ID, self.id.clone()),
            (KEY_NAME, self.name.clone()),
            (KEY_SURNAME, self.surname.clone()),
            (
                KEY_BIRTH_YEAR,
                self.birth_year.map(|year| year.to_string()).unwrap_or_default(),
            ),
        ]
    }
}

/// Parses a birth year as a signed decimal integer.
///
/// Surrounding whitespace is not trimmed, so `" 1815"` is rejected just like
/// `"abc"` or a value outside the `i32` range.
pub fn parse_birth_year(input: &str) -> Option<i32> {
    input.parse().ok()
}

/// Renders the stored record, or `None` when all four entries are empty.
///
/// A record saved with four empty strings is indistinguishable from one that
/// was never saved.
pub fn format_record(preferences: &Preferences) -> Option<String> {
    let id = preferences.get_or_empty(KEY_ID);
    let name = preferences.get_or_empty(KEY_NAME);
    let surname = preferences.get_or_empty(KEY_SURNAME);
    let birth_year = preferences.get_or_empty(KEY_BIRTH_YEAR);

    if id.is_empty() && name.is_empty() && surname.is_empty() && birth_year.is_empty() {
        return None;
    }

    Some(format!(
        "ID: {id}\nNombre: {name}\nApellidos: {surname}\nAño de Nacimiento: {birth_year}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_birth_year_accepts_signed_integers() {
        assert_eq!(parse_birth_year("1815"), Some(1815));
        assert_eq!(parse_birth_year("+1990"), Some(1990));
        assert_eq!(parse_birth_year("-44"), Some(-44));
        assert_eq!(parse_birth_year("0"), Some(0));
    }

    #[test]
    fn parse_birth_year_rejects_everything_else() {
        assert_eq!(parse_birth_year(""), None);
        assert_eq!(parse_birth_year("19x5"), None);
        assert_eq!(parse_birth_year(" 1815"), None);
        assert_eq!(parse_birth_year("1815.0"), None);
        assert_eq!(parse_birth_year("99999999999"), None);
    }

    #[test]
    fn entries_serialize_missing_year_as_empty() {
        let record = PersonRecord::new("1", "Ada", "Lovelace", None);
        let entries = record.entries();
        assert_eq!(entries[3], (KEY_BIRTH_YEAR, String::new()));
        assert_eq!(entries.map(|(key, _)| key), RECORD_KEYS);
    }

    #[test]
    fn from_form_drops_unparseable_year() {
        let record = PersonRecord::from_form("1", "Ada", "Lovelace", "mil");
        assert_eq!(record.birth_year, None);
        assert_eq!(record.entries()[3].1, "");
    }

    #[test]
    fn format_record_renders_all_fields() {
        let prefs: Preferences = PersonRecord::new("42", "Ada", "Lovelace", Some(1815))
            .entries()
            .into_iter()
            .collect();
        assert_eq!(
            format_record(&prefs).as_deref(),
            Some("ID: 42\nNombre: Ada\nApellidos: Lovelace\nAño de Nacimiento: 1815")
        );
    }

    #[test]
    fn format_record_defaults_absent_keys() {
        let prefs: Preferences = [(KEY_NAME, "Ada")].into_iter().collect();
        assert_eq!(
            format_record(&prefs).as_deref(),
            Some("ID: \nNombre: Ada\nApellidos: \nAño de Nacimiento: ")
        );
    }

    #[test]
    fn format_record_treats_all_empty_as_nothing_stored() {
        assert_eq!(format_record(&Preferences::new()), None);

        let prefs: Preferences = PersonRecord::default().entries().into_iter().collect();
        assert_eq!(prefs.len(), 4);
        assert_eq!(format_record(&prefs), None);
    }

    #[test]
    fn format_record_ignores_unrelated_keys() {
        let prefs: Preferences = [("tema", "oscuro")].into_iter().collect();
        assert_eq!(format_record(&prefs), None);
    }
}
