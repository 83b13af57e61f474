//! Hover implementation

use std::fmt::Write as _;

use crate::config::TranslationConfig;
use crate::ide::phrase::hover_phrase;
use crate::translation::{
    Direction,
    Translator,
};
use crate::types::SourcePosition;

/// Markdown listing the candidates found for `phrase`.
#[must_use]
pub fn format_hover_content(phrase: &str, language: &str, candidates: &[String]) -> String {
    let mut content = format!("**Translation:** `{phrase}`\n\n");
    for candidate in candidates {
        let _ = writeln!(content, "**{language}**: {candidate}");
    }
    content
}

/// Translates the phrase under `position`.
///
/// Lookups never prompt; failures and empty results give no hover.
pub async fn generate_hover_content(
    translator: &Translator,
    config: &TranslationConfig,
    text: &str,
    position: SourcePosition,
) -> Option<String> {
    let phrase = hover_phrase(text, position)?;

    let candidates = match translator
        .fetch_translations(
            config,
            &phrase,
            Direction::Forward,
            config.product_id,
            config.max_translations.max(1),
        )
        .await
    {
        Ok(candidates) => candidates,
        Err(error) => {
            tracing::warn!(%error, phrase = %phrase, "Hover lookup failed");
            return None;
        }
    };

    if candidates.is_empty() {
        tracing::debug!(phrase = %phrase, "No translation for hover");
        return None;
    }

    Some(format_hover_content(&phrase, &config.target_language, &candidates))
}
