//! Locale tag matching for localized keys.
//!
//! A locale tag has the shape `lang_COUNTRY.ENCODING@MODIFIER` where every
//! part but `lang` is optional. Lookups try the most specific form first and
//! then progressively drop the country and the modifier.

/// Split a locale tag into `(lang, country, modifier)`, ignoring the encoding.
fn split_locale(locale: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, modifier) = match locale.split_once('@') {
        Some((rest, modifier)) => (rest, Some(modifier)),
        None => (locale, None),
    };

    let rest = rest.split_once('.').map_or(rest, |(head, _encoding)| head);

    match rest.split_once('_') {
        Some((lang, country)) => (lang, Some(country), modifier),
        None => (rest, None, modifier),
    }
}

/// Return the locale keys to try for `locale`, most specific first.
///
/// `sr_YU.UTF-8@Latn` yields `sr_YU@Latn`, `sr_YU`, `sr@Latn`, `sr`.
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let (lang, country, modifier) = split_locale(locale.trim());
    if lang.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::with_capacity(4);

    if let (Some(country), Some(modifier)) = (country, modifier) {
        candidates.push(format!("{lang}_{country}@{modifier}"));
    }
    if let Some(country) = country {
        candidates.push(format!("{lang}_{country}"));
    }
    if let Some(modifier) = modifier {
        candidates.push(format!("{lang}@{modifier}"));
    }
    candidates.push(lang.to_string());

    candidates
}
