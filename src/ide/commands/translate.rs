//! Translation lookups started from the editor.

use tower_lsp::lsp_types::MessageType;

use crate::config::TranslationConfig;
use crate::ide::host::EditorHost;
use crate::translation::{
    Direction,
    Translator,
};

/// Looks `phrase` up, offering the fallback products once when nothing is found.
///
/// Failures are reported through the host; the result is then empty.
pub async fn lookup_with_fallback(
    host: &impl EditorHost,
    translator: &Translator,
    config: &TranslationConfig,
    phrase: &str,
    direction: Direction,
) -> Vec<String> {
    let limit = config.max_translations.max(1);

    let Some(candidates) =
        lookup_once(host, translator, config, phrase, direction, config.product_id, limit).await
    else {
        return Vec::new();
    };
    if !candidates.is_empty() {
        return candidates;
    }

    let labels = config.fallback_products.iter().map(|product| product.label.clone()).collect();
    let prompt = format!("No translation found for '{phrase}'. Search in another product?");
    let Some(choice) = host.choose(prompt, labels).await else {
        tracing::debug!(phrase = %phrase, "Product fallback dismissed");
        return Vec::new();
    };
    let Some(product) = config.fallback_products.iter().find(|product| product.label == choice)
    else {
        tracing::warn!(choice = %choice, "Unknown product chosen");
        return Vec::new();
    };

    let Some(candidates) =
        lookup_once(host, translator, config, phrase, direction, product.id, limit).await
    else {
        return Vec::new();
    };
    if candidates.is_empty() {
        host.show_message(
            MessageType::INFO,
            format!("No translation found for '{phrase}' in {}", product.label),
        )
        .await;
    }
    candidates
}

/// Shows the candidates for `phrase` and returns them.
pub async fn show_translation(
    host: &impl EditorHost,
    translator: &Translator,
    config: &TranslationConfig,
    phrase: &str,
    direction: Direction,
) -> Vec<String> {
    let candidates = lookup_with_fallback(host, translator, config, phrase, direction).await;
    if !candidates.is_empty() {
        host.show_message(MessageType::INFO, format!("{phrase}: {}", candidates.join(" | ")))
            .await;
    }
    candidates
}

/// First candidate for `phrase`, for the client to put on the clipboard.
pub async fn copy_translation(
    host: &impl EditorHost,
    translator: &Translator,
    config: &TranslationConfig,
    phrase: &str,
) -> Option<String> {
    let first = lookup_with_fallback(host, translator, config, phrase, Direction::Forward)
        .await
        .into_iter()
        .next()?;
    host.show_message(MessageType::INFO, format!("Copied '{first}' to the clipboard")).await;
    Some(first)
}

async fn lookup_once(
    host: &impl EditorHost,
    translator: &Translator,
    config: &TranslationConfig,
    phrase: &str,
    direction: Direction,
    product_id: u32,
    limit: usize,
) -> Option<Vec<String>> {
    match translator.fetch_translations(config, phrase, direction, product_id, limit).await {
        Ok(candidates) => Some(candidates),
        Err(error) => {
            tracing::error!(%error, phrase = %phrase, "Translation lookup failed");
            host.show_message(MessageType::ERROR, format!("Translation lookup failed: {error}"))
                .await;
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use googletest::prelude::*;

    use super::*;
    use crate::ide::host::test_support::{
        HostCall,
        RecordingHost,
    };
    use crate::translation::test_support::{
        CannedSource,
        result_page,
    };

    fn translator(source: &Arc<CannedSource>) -> Translator {
        Translator::new(source.clone())
    }

    #[tokio::test]
    async fn shows_found_candidates() {
        let page = result_page(&[("Item Ledger Entry", "Artikelposten")]);
        let source = Arc::new(CannedSource::with_pages(vec![Some(page.as_str())]));
        let host = RecordingHost::default();

        let found = show_translation(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Item Ledger Entry",
            Direction::Forward,
        )
        .await;

        assert_that!(found, elements_are![eq("Artikelposten")]);
        assert_that!(host.messages(), elements_are![eq("Item Ledger Entry: Artikelposten")]);
        assert_that!(source.requested(), len(eq(1)));
    }

    #[tokio::test]
    async fn reverse_lookup_reads_source_column() {
        let page = result_page(&[("Item Ledger Entry", "Artikelposten")]);
        let source = Arc::new(CannedSource::with_pages(vec![Some(page.as_str())]));
        let host = RecordingHost::default();

        let found = show_translation(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Artikelposten",
            Direction::Reverse,
        )
        .await;

        assert_that!(found, elements_are![eq("Item Ledger Entry")]);
        assert_that!(source.requested()[0].as_str(), contains_substring("Source=false"));
    }

    #[tokio::test]
    async fn offers_products_when_nothing_found() {
        let empty = result_page(&[]);
        let found = result_page(&[("Posting Date", "Buchungsdatum")]);
        let source = Arc::new(CannedSource::with_pages(vec![
            Some(empty.as_str()),
            Some(found.as_str()),
        ]));
        let host = RecordingHost::choosing("Dynamics 365 Business Central");

        let candidates = lookup_with_fallback(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Posting Date",
            Direction::Forward,
        )
        .await;

        assert_that!(candidates, elements_are![eq("Buchungsdatum")]);
        let requests = source.requested();
        assert_that!(requests, len(eq(2)));
        assert_that!(requests[0].as_str(), contains_substring("productid=0"));
        assert_that!(requests[1].as_str(), contains_substring("productid=3"));
        assert!(matches!(
            host.calls().first(),
            Some(HostCall::Choose(_, choices)) if choices.len() == 3
        ));
    }

    #[tokio::test]
    async fn fallback_happens_once() {
        let empty = result_page(&[]);
        let source = Arc::new(CannedSource::with_pages(vec![
            Some(empty.as_str()),
            Some(empty.as_str()),
        ]));
        let host = RecordingHost::choosing("Dynamics NAV");

        let candidates = lookup_with_fallback(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Posting Date",
            Direction::Forward,
        )
        .await;

        assert_that!(candidates, is_empty());
        assert_that!(source.requested(), len(eq(2)));
        assert_that!(
            host.messages(),
            elements_are![eq("No translation found for 'Posting Date' in Dynamics NAV")]
        );
    }

    #[tokio::test]
    async fn dismissed_fallback_stops() {
        let empty = result_page(&[]);
        let source = Arc::new(CannedSource::with_pages(vec![Some(empty.as_str())]));
        let host = RecordingHost::default();

        let candidates = lookup_with_fallback(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Posting Date",
            Direction::Forward,
        )
        .await;

        assert_that!(candidates, is_empty());
        assert_that!(source.requested(), len(eq(1)));
    }

    #[tokio::test]
    async fn reports_failed_request_without_retry() {
        let source = Arc::new(CannedSource::with_pages(vec![None]));
        let host = RecordingHost::choosing("All Products");

        let candidates = lookup_with_fallback(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Posting Date",
            Direction::Forward,
        )
        .await;

        assert_that!(candidates, is_empty());
        assert_that!(source.requested(), len(eq(1)));
        assert_that!(
            host.messages(),
            elements_are![contains_substring("Translation lookup failed")]
        );
    }

    #[tokio::test]
    async fn failed_fallback_request_ends_the_lookup() {
        let empty = result_page(&[]);
        let source = Arc::new(CannedSource::with_pages(vec![Some(empty.as_str()), None]));
        let host = RecordingHost::choosing("Dynamics NAV");

        let candidates = lookup_with_fallback(
            &host,
            &translator(&source),
            &TranslationConfig::default(),
            "Posting Date",
            Direction::Forward,
        )
        .await;

        assert_that!(candidates, is_empty());
        assert_that!(source.requested(), len(eq(2)));
        assert_that!(
            host.messages(),
            elements_are![eq("Translation lookup failed: Translation service returned HTTP 503")]
        );
    }

    #[tokio::test]
    async fn copies_first_candidate() {
        let page = result_page(&[("Item", "Artikel"), ("Item", "Posten")]);
        let source = Arc::new(CannedSource::with_pages(vec![Some(page.as_str())]));
        let host = RecordingHost::default();
        let config = TranslationConfig { max_translations: 2, ..TranslationConfig::default() };

        let copied = copy_translation(&host, &translator(&source), &config, "Item").await;

        assert_that!(copied, some(eq("Artikel")));
    }
}
