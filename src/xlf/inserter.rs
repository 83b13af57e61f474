//! Copies developer-note translations into `<target>` elements.
//!
//! The document is rewritten with text surgery on regex matches so that
//! everything outside the touched targets stays byte-for-byte identical.

use std::sync::LazyLock;

use regex::Regex;

use super::note::note_value;
use super::{
    GENERIC_MARKER,
    XlfError,
    locale_prefix_for,
};

/// Target values that mean "not translated yet".
pub const PLACEHOLDERS: &[&str] = &["", "[NAB: NOT TRANSLATED]", "[NAB: REVIEW]"];

#[allow(clippy::unwrap_used)]
static TRANS_UNIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<trans-unit\b[^>]*>.*?</trans-unit>").unwrap());

#[allow(clippy::unwrap_used)]
static SOURCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<source\b[^>]*>.*?</source>").unwrap());

#[allow(clippy::unwrap_used)]
static TARGET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<target\b([^>]*?)(?:/>|>(.*?)</target>)").unwrap());

#[allow(clippy::unwrap_used)]
static NOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<note\b([^>]*?)(?:/>|>(.*?)</note>)").unwrap());

/// Result of one pass over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInsertion {
    /// The rewritten document.
    pub text: String,
    /// Number of translation units changed.
    pub updated: usize,
}

impl NoteInsertion {
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.updated == 0
    }
}

/// Replacement of `text[start..end]`.
#[derive(Debug)]
struct Splice {
    start: usize,
    end: usize,
    replacement: String,
}

/// Checks that `file_name` is a translated XLF file and returns its note prefix.
pub fn note_prefix_for_file(file_name: &str) -> Result<&'static str, XlfError> {
    let lower = file_name.to_ascii_lowercase();
    if !lower.ends_with(".xlf") {
        return Err(XlfError::NotXlf(file_name.to_string()));
    }
    if lower.contains(GENERIC_MARKER) {
        return Err(XlfError::GenericFile(file_name.to_string()));
    }
    locale_prefix_for(file_name).ok_or_else(|| XlfError::UnsupportedLanguage(file_name.to_string()))
}

/// Fills empty or placeholder targets of `text` from the developer notes for
/// the language of `file_name`.
pub fn insert_notes(file_name: &str, text: &str) -> Result<NoteInsertion, XlfError> {
    let prefix = note_prefix_for_file(file_name)?;
    let line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };

    let splices: Vec<Splice> = TRANS_UNIT_REGEX
        .find_iter(text)
        .filter_map(|unit| unit_splice(text, unit.start(), unit.as_str(), prefix, line_ending))
        .collect();

    let updated = splices.len();
    tracing::debug!(file_name, prefix, updated, "Developer notes processed");

    Ok(NoteInsertion { text: apply_splices(text, &splices), updated })
}

/// The change for one translation unit, or `None` when it is left alone.
fn unit_splice(
    text: &str,
    unit_start: usize,
    unit: &str,
    prefix: &str,
    line_ending: &str,
) -> Option<Splice> {
    let value = developer_note(unit).and_then(|note| note_value(note, prefix))?;
    if value.is_empty() {
        return None;
    }

    if let Some(target) = TARGET_REGEX.captures(unit) {
        let whole = target.get(0)?;
        let current = target.get(2).map_or("", |m| m.as_str());
        if !PLACEHOLDERS.contains(&current) || current == value {
            return None;
        }

        return Some(match target.get(2) {
            Some(content) => Splice {
                start: unit_start + content.start(),
                end: unit_start + content.end(),
                replacement: value.to_string(),
            },
            None => {
                let attributes = target.get(1).map_or("", |m| m.as_str()).trim_end();
                Splice {
                    start: unit_start + whole.start(),
                    end: unit_start + whole.end(),
                    replacement: format!("<target{attributes}>{value}</target>"),
                }
            }
        });
    }

    let source = SOURCE_REGEX.find(unit)?;
    let indent = line_indent(text, unit_start + source.start());
    let insert_at = unit_start + source.end();
    Some(Splice {
        start: insert_at,
        end: insert_at,
        replacement: format!("{line_ending}{indent}<target>{value}</target>"),
    })
}

/// Content of the unit's developer note. A self-closing note has none.
fn developer_note(unit: &str) -> Option<&str> {
    NOTE_REGEX
        .captures_iter(unit)
        .find(|captures| {
            captures.get(1).is_some_and(|attrs| {
                let attrs = attrs.as_str();
                attrs.contains(r#"from="Developer""#) || attrs.contains("from='Developer'")
            })
        })
        .and_then(|captures| captures.get(2))
        .map(|m| m.as_str())
}

/// Leading whitespace of the line containing byte `offset`.
fn line_indent(text: &str, offset: usize) -> &str {
    let before = text.get(..offset).unwrap_or_default();
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    let line = text.get(line_start..).unwrap_or_default();
    let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
    line.get(..indent_len).unwrap_or_default()
}

/// Splices must be sorted by position and must not overlap.
fn apply_splices(text: &str, splices: &[Splice]) -> String {
    let mut output = String::with_capacity(text.len() + splices.len() * 32);
    let mut cursor = 0;
    for splice in splices {
        output.push_str(text.get(cursor..splice.start).unwrap_or_default());
        output.push_str(&splice.replacement);
        cursor = splice.end;
    }
    output.push_str(text.get(cursor..).unwrap_or_default());
    output
}
