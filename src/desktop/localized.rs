//! Per-locale values of a single desktop entry key.
//!
//! ```text
//! Name=Foo
//! Name[sr_YU]=...
//! Name[sr@Latn]=...
//! Name[sr]=...
//! ```

use crate::desktop::locale::locale_candidates;
use crate::error::LookupError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A value type that can be stored in a [`LocalizedValue`].
pub trait FieldValue: Clone + fmt::Debug + PartialEq {
    /// Build the value from the trimmed text after `=`.
    fn parse_field(raw: &str) -> Self;

    /// Write the value in a human-readable form.
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl FieldValue for String {
    fn parse_field(raw: &str) -> Self {
        raw.to_string()
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldValue for Vec<String> {
    fn parse_field(raw: &str) -> Self {
        split_list(raw)
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Split a `;`-separated list value into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a raw `Key[locale]=Value` line into `(key, locale, value)`.
///
/// Only the first `=` separates key and value. Returns `None` when the line
/// has no `=` at all.
pub(crate) fn split_localized_line(line: &str) -> Option<(&str, Option<&str>, &str)> {
    let (key_part, value) = line.split_once('=')?;
    let key_part = key_part.trim();

    let (key, locale) = match key_part.split_once('[') {
        Some((key, rest)) => {
            let locale = rest.split_once(']').map_or(rest, |(locale, _)| locale);
            (key.trim(), Some(locale.trim()))
        }
        None => (key_part, None),
    };

    Some((key, locale, value.trim()))
}

/// All translations of one key: an optional default plus one value per locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedValue<T = String> {
    key: String,
    #[serde(rename = "default")]
    default_value: Option<T>,
    #[serde(rename = "locales")]
    locale_values: IndexMap<String, T>,
}

impl<T: FieldValue> LocalizedValue<T> {
    /// Create an empty value serving the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_value: None,
            locale_values: IndexMap::new(),
        }
    }

    /// The key this value serves.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Apply a raw `Key[locale]=Value` line.
    ///
    /// Lines for other keys, and lines without `=`, are ignored. Returns
    /// whether the line was applied.
    pub fn apply_line(&mut self, line: &str) -> bool {
        let Some((key, locale, value)) = split_localized_line(line) else {
            return false;
        };

        if key != self.key {
            return false;
        }

        self.set(T::parse_field(value), locale);
        true
    }

    /// Store a value, replacing whatever was there for the same locale.
    ///
    /// `None` targets the default value.
    pub fn set(&mut self, value: T, locale: Option<&str>) {
        match locale {
            Some(locale) => {
                self.locale_values.insert(locale.to_string(), value);
            }
            None => self.default_value = Some(value),
        }
    }

    /// Look up the default value (`None`) or the value for one locale.
    ///
    /// The locale lookup is exact and never falls back to the default.
    pub fn get(&self, locale: Option<&str>) -> Result<Option<&T>, LookupError> {
        match locale {
            Some(locale) => self.get_locale(locale).map(Some),
            None => Ok(self.default_value()),
        }
    }

    /// The value recorded without a locale qualifier.
    pub fn default_value(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    /// The value recorded for exactly `locale`.
    pub fn get_locale(&self, locale: &str) -> Result<&T, LookupError> {
        self.locale_values
            .get(locale)
            .ok_or_else(|| LookupError::LocaleNotFound {
                key: self.key.clone(),
                locale: locale.to_string(),
            })
    }

    /// Resolve the best value for a list of preferred locales.
    ///
    /// Each locale is tried from its most specific form down to the bare
    /// language. Falls back to the default value when nothing matches.
    pub fn resolve(&self, locales: &[&str]) -> Option<&T> {
        locales
            .iter()
            .flat_map(|locale| locale_candidates(locale))
            .find_map(|candidate| self.locale_values.get(&candidate))
            .or(self.default_value.as_ref())
    }

    /// Iterate over locale-qualified values in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &T)> {
        self.locale_values
            .iter()
            .map(|(locale, value)| (locale.as_str(), value))
    }

    /// Whether neither a default nor any localized value was recorded.
    pub fn is_empty(&self) -> bool {
        self.default_value.is_none() && self.locale_values.is_empty()
    }

    /// Multi-line human-readable summary, one line per locale.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: FieldValue> fmt::Display for LocalizedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.key)?;
        match &self.default_value {
            Some(value) => value.fmt_field(f)?,
            None => f.write_str("None")?,
        }

        for (locale, value) in &self.locale_values {
            write!(f, "\n{}[{}]: ", self.key, locale)?;
            value.fmt_field(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let name: LocalizedValue = LocalizedValue::new("Name");
        assert_eq!(name.key(), "Name");
        assert!(name.is_empty());
        assert_eq!(name.get(None), Ok(None));
    }

    #[test]
    fn test_apply_default_and_locales() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        assert!(name.apply_line("Name=Foo\n"));
        assert!(name.apply_line("Name[sr_YU]=Foo YU"));
        assert!(name.apply_line("Name[sr@Latn]=Foo Latn"));

        assert_eq!(name.default_value().map(String::as_str), Some("Foo"));
        assert_eq!(name.get_locale("sr_YU").unwrap(), "Foo YU");
        assert_eq!(name.get(Some("sr@Latn")).unwrap().unwrap(), "Foo Latn");
    }

    #[test]
    fn test_other_key_is_ignored() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        assert!(!name.apply_line("GenericName=Browser"));
        assert!(!name.apply_line("GenericName[de]=Browser"));
        assert!(name.is_empty());
    }

    #[test]
    fn test_line_without_separator_is_ignored() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        assert!(!name.apply_line("Name"));
        assert!(name.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        name.apply_line("Name=First");
        name.apply_line("Name[de]=Erste");
        name.apply_line("Name=Second");
        name.apply_line("Name[de]=Zweite");

        assert_eq!(name.default_value().unwrap(), "Second");
        assert_eq!(name.get_locale("de").unwrap(), "Zweite");
        assert_eq!(name.locales().count(), 1);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let mut comment: LocalizedValue = LocalizedValue::new("Comment");
        comment.apply_line("Comment[en]=a=b=c");
        assert_eq!(comment.get_locale("en").unwrap(), "a=b=c");
    }

    #[test]
    fn test_whitespace_around_key_and_value() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        assert!(name.apply_line("  Name [ fr ] =  Truc  "));
        assert_eq!(name.get_locale("fr").unwrap(), "Truc");
    }

    #[test]
    fn test_unknown_locale_fails() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        name.apply_line("Name=Foo");
        assert_eq!(
            name.get(Some("sr")),
            Err(LookupError::LocaleNotFound {
                key: "Name".to_string(),
                locale: "sr".to_string(),
            })
        );
    }

    #[test]
    fn test_set_mirrors_apply_line() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        name.set("Foo".to_string(), None);
        name.set("Foa".to_string(), Some("sr"));

        let mut parsed: LocalizedValue = LocalizedValue::new("Name");
        parsed.apply_line("Name=Foo");
        parsed.apply_line("Name[sr]=Foa");

        assert_eq!(name, parsed);
    }

    #[test]
    fn test_resolve_falls_back_through_candidates() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        name.apply_line("Name=Default");
        name.apply_line("Name[sr]=Serbian");
        name.apply_line("Name[sr@Latn]=Serbian Latin");

        assert_eq!(name.resolve(&["sr_YU@Latn"]).unwrap(), "Serbian Latin");
        assert_eq!(name.resolve(&["sr_YU"]).unwrap(), "Serbian");
        assert_eq!(name.resolve(&["de", "sr"]).unwrap(), "Serbian");
        assert_eq!(name.resolve(&["de"]).unwrap(), "Default");
        assert_eq!(name.resolve(&[]).unwrap(), "Default");
    }

    #[test]
    fn test_list_values() {
        let mut keywords: LocalizedValue<Vec<String>> = LocalizedValue::new("Keywords");
        keywords.apply_line("Keywords=web; browser ;;internet;");
        keywords.apply_line("Keywords[de]=Netz;Browser");

        assert_eq!(
            keywords.default_value().unwrap(),
            &vec!["web".to_string(), "browser".to_string(), "internet".to_string()]
        );
        assert_eq!(keywords.get_locale("de").unwrap().len(), 2);
    }

    #[test]
    fn test_render() {
        let mut name: LocalizedValue = LocalizedValue::new("Name");
        name.apply_line("Name=Foo");
        name.apply_line("Name[sr]=Foa");
        name.apply_line("Name[de]=Fuh");

        assert_eq!(name.render(), "Name: Foo\nName[sr]: Foa\nName[de]: Fuh");
    }

    #[test]
    fn test_render_unset() {
        let name: LocalizedValue = LocalizedValue::new("Name");
        assert_eq!(name.render(), "Name: None");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("GNOME;GTK;"), vec!["GNOME", "GTK"]);
        assert_eq!(split_list(" a ; ; b"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
    }
}
