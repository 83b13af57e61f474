//! "Declare variable" quick fix for undeclared well-known variable names.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::{
    CodeAction,
    CodeActionKind,
    Diagnostic,
    Position,
    Range,
    TextEdit,
    Url,
    WorkspaceEdit,
};

use crate::types::byte_offset;
use crate::variables::VariableTable;

#[allow(clippy::unwrap_used)]
static QUOTED_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']+)'").unwrap());

const HEADER_KEYWORDS: &[&str] =
    &["procedure ", "local procedure ", "internal procedure ", "trigger "];

/// Name the diagnostic complains about: the text under its range, else the
/// first quoted name in its message.
#[must_use]
pub fn diagnosed_name(text: &str, diagnostic: &Diagnostic) -> Option<String> {
    let range = diagnostic.range;
    let from_text = (range.start.line == range.end.line)
        .then(|| text.lines().nth(range.start.line as usize))
        .flatten()
        .and_then(|line| {
            let start = byte_offset(line, range.start.character);
            let end = byte_offset(line, range.end.character);
            line.get(start..end)
        })
        .map(|name| name.trim().trim_matches('"'))
        .filter(|name| !name.is_empty());

    from_text.map(String::from).or_else(|| {
        QUOTED_NAME_REGEX
            .captures(&diagnostic.message)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str().to_string())
    })
}

/// Edit that declares `name: type_and_name;` for a use on `line`.
///
/// The declaration goes into the nearest `var` section above `line`. When the
/// enclosing procedure or trigger header is reached first, a new `var` section
/// is opened right before its `begin`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // documents never exceed u32::MAX lines
pub fn declaration_edit(
    text: &str,
    line: u32,
    name: &str,
    type_and_name: &str,
) -> Option<TextEdit> {
    let lines: Vec<&str> = text.lines().collect();
    let line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let use_line = (line as usize).min(lines.len().checked_sub(1)?);

    for index in (0..=use_line).rev() {
        let current = lines.get(index)?;
        let trimmed = current.trim();

        if trimmed.eq_ignore_ascii_case("var") {
            let indent = leading_whitespace(current);
            return Some(TextEdit {
                range: caret(index as u32 + 1),
                new_text: format!("{indent}    {name}: {type_and_name};{line_ending}"),
            });
        }

        if is_header(trimmed) {
            let begin = lines
                .iter()
                .enumerate()
                .take(use_line + 1)
                .skip(index + 1)
                .find(|(_, candidate)| candidate.trim().eq_ignore_ascii_case("begin"))
                .map(|(begin, _)| begin)?;
            let indent = lines.get(begin).map_or("", |begin_line| leading_whitespace(begin_line));
            return Some(TextEdit {
                range: caret(begin as u32),
                new_text: format!(
                    "{indent}var{line_ending}{indent}    {name}: {type_and_name};{line_ending}"
                ),
            });
        }
    }

    None
}

/// The quick fix for the first diagnostic, when its name is a known variable.
#[must_use]
pub fn declare_variable_action(
    uri: &Url,
    text: &str,
    diagnostic: &Diagnostic,
    table: &VariableTable,
) -> Option<CodeAction> {
    let name = diagnosed_name(text, diagnostic)?;
    let entry = table.find(&name)?;
    let type_and_name = entry.data_type().render();
    let edit = declaration_edit(text, diagnostic.range.start.line, &name, &type_and_name)?;

    let mut changes = HashMap::new();
    changes.insert(uri.clone(), vec![edit]);

    Some(CodeAction {
        title: format!("Declare variable {name} ({})", entry.display_name),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic.clone()]),
        edit: Some(WorkspaceEdit { changes: Some(changes), ..Default::default() }),
        is_preferred: Some(true),
        ..CodeAction::default()
    })
}

fn is_header(trimmed: &str) -> bool {
    let lower = trimmed.to_ascii_lowercase();
    HEADER_KEYWORDS.iter().any(|keyword| lower.starts_with(keyword))
}

fn leading_whitespace(line: &str) -> &str {
    let content_start = line.len() - line.trim_start().len();
    line.get(..content_start).unwrap_or("")
}

const fn caret(line: u32) -> Range {
    let position = Position { line, character: 0 };
    Range { start: position, end: position }
}
