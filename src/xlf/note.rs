//! Developer note parsing (`DEU=Hallo,FRA=Bonjour`).

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|,)\s*([A-Z]{3})=").unwrap());

/// `PREFIX=value` pairs of a note, in order of appearance.
///
/// A prefix opens a pair only at the start of the note or after a comma, so a
/// value runs up to the next `, XYZ=` or the end of the note. Double quotes
/// around a value are dropped.
#[must_use]
pub fn parse_note(note: &str) -> Vec<(&str, &str)> {
    let prefixes: Vec<_> = PREFIX_REGEX.captures_iter(note).collect();

    prefixes
        .iter()
        .enumerate()
        .filter_map(|(index, captures)| {
            let prefix = captures.get(1)?.as_str();
            let value_start = captures.get(0)?.end();
            let value_end = prefixes
                .get(index + 1)
                .and_then(|next| next.get(0))
                .map_or(note.len(), |next| next.start());
            let raw = note.get(value_start..value_end)?;
            Some((prefix, clean_value(raw)))
        })
        .collect()
}

/// Value for `prefix` in `note`, if the note has one.
#[must_use]
pub fn note_value<'a>(note: &'a str, prefix: &str) -> Option<&'a str> {
    parse_note(note).into_iter().find(|(p, _)| *p == prefix).map(|(_, value)| value)
}

fn clean_value(raw: &str) -> &str {
    let value = raw.trim();
    let value = value.strip_suffix(',').unwrap_or(value).trim_end();
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}
