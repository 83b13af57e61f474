//! Copies developer-note translations into the targets of an XLF document.

use tower_lsp::lsp_types::{
    MessageType,
    Position,
    Range,
    Url,
};

use crate::ide::host::EditorHost;
use crate::types::utf16_len;
use crate::xlf::insert_notes;

/// Range covering all of `text`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // documents never exceed u32::MAX lines
pub fn full_document_range(text: &str) -> Range {
    let last_line = text.split('\n').count().saturating_sub(1);
    let last_text = text.rsplit('\n').next().unwrap_or("");
    Range {
        start: Position { line: 0, character: 0 },
        end: Position { line: last_line as u32, character: utf16_len(last_text) },
    }
}

/// Fills the targets of `uri` from its developer notes with one edit.
///
/// Returns the number of units written; zero when nothing was applied.
pub async fn insert_translations_from_notes(
    host: &impl EditorHost,
    uri: &Url,
    text: &str,
) -> usize {
    let file_name = uri.path().rsplit('/').next().unwrap_or_default();

    let insertion = match insert_notes(file_name, text) {
        Ok(insertion) => insertion,
        Err(error) => {
            tracing::warn!(uri = %uri, %error, "XLF document rejected");
            host.show_message(MessageType::WARNING, error.to_string()).await;
            return 0;
        }
    };

    if insertion.is_unchanged() {
        host.show_message(MessageType::INFO, "No translations to insert".to_string()).await;
        return 0;
    }

    let updated = insertion.updated;
    if host.apply_edit(uri.clone(), full_document_range(text), insertion.text).await {
        tracing::info!(uri = %uri, updated, "Inserted translations from developer notes");
        host.show_message(
            MessageType::INFO,
            format!("Inserted {updated} translation(s) from developer notes"),
        )
        .await;
        updated
    } else {
        tracing::error!(uri = %uri, "Editor rejected the XLF edit");
        host.show_message(MessageType::ERROR, "Failed to insert translations".to_string()).await;
        0
    }
}
