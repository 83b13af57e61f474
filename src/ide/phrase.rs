//! Picks the phrase a translation command works on.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{
    SourcePosition,
    SourceRange,
    byte_offset,
};

#[allow(clippy::unwrap_used)]
static XLF_SOURCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<source>(.*?)</source>").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    #[error("Comment lines cannot be translated")]
    CommentLine,

    #[error("Select a phrase to translate")]
    Empty,
}

/// The phrase to translate: `explicit` when given, else the selection, else
/// the word at the caret. Surrounding double quotes are removed.
///
/// # Errors
/// - the selection starts on a `//` comment line
/// - nothing is left to translate
pub fn resolve_phrase(
    text: &str,
    selection: SourceRange,
    explicit: Option<&str>,
) -> Result<String, PhraseError> {
    let phrase = match explicit {
        Some(phrase) => phrase.to_string(),
        None => {
            let line = text.lines().nth(selection.start.line as usize).unwrap_or("");
            if is_comment_line(line) {
                return Err(PhraseError::CommentLine);
            }
            if selection.is_empty() {
                word_at(line, selection.start.character).unwrap_or_default().to_string()
            } else {
                selected_text(text, selection)
            }
        }
    };

    let phrase = strip_quotes(phrase.trim());
    if phrase.is_empty() { Err(PhraseError::Empty) } else { Ok(phrase.to_string()) }
}

/// Phrase shown on hover: the `<source>` text on XLF source lines, otherwise
/// the word under the cursor.
#[must_use]
pub fn hover_phrase(text: &str, position: SourcePosition) -> Option<String> {
    let line = text.lines().nth(position.line as usize)?;
    if is_comment_line(line) {
        return None;
    }

    let phrase = XLF_SOURCE_REGEX
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|source| source.as_str())
        .or_else(|| word_at(line, position.character))?;

    let phrase = strip_quotes(phrase.trim());
    (!phrase.is_empty()).then(|| phrase.to_string())
}

#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Text covered by `range`, which may span lines.
#[must_use]
pub fn selected_text(text: &str, range: SourceRange) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let (start, end) = (range.start, range.end);

    (start.line..=end.line)
        .filter_map(|index| {
            let line = lines.get(index as usize)?;
            let from = if index == start.line { byte_offset(line, start.character) } else { 0 };
            let to =
                if index == end.line { byte_offset(line, end.character) } else { line.len() };
            line.get(from..to.max(from))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word at `character`: the quoted name around it, or the identifier under it.
#[must_use]
pub fn word_at(line: &str, character: u32) -> Option<&str> {
    let offset = byte_offset(line, character);

    let mut quote_start = None;
    for (index, ch) in line.char_indices() {
        if ch != '"' {
            continue;
        }
        match quote_start {
            None => quote_start = Some(index),
            Some(start) => {
                if (start..=index).contains(&offset) {
                    return line.get(start + 1..index);
                }
                quote_start = None;
            }
        }
    }

    let is_word = |ch: char| ch.is_alphanumeric() || ch == '_';
    let start = line
        .get(..offset)?
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_word(*ch))
        .last()
        .map_or(offset, |(index, _)| index);
    let end = line
        .get(offset..)?
        .char_indices()
        .find(|(_, ch)| !is_word(*ch))
        .map_or(line.len(), |(index, _)| offset + index);

    line.get(start..end).filter(|word| !word.is_empty())
}

fn strip_quotes(phrase: &str) -> &str {
    phrase
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(phrase)
}
