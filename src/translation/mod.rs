//! Term translation lookups against the terminology search portal.

mod error;
mod language;
mod search;
mod source;

use std::sync::Arc;

pub use error::TranslationError;
pub use language::{
    DEFAULT_LANGUAGE_ID,
    LANGUAGE_IDS,
    language_id_for,
};
pub use search::{
    Direction,
    build_search_url,
    scrape_translations,
};
pub use source::{
    HttpTranslationSource,
    TranslationSource,
};

use crate::config::TranslationConfig;

/// Looks phrases up through a [`TranslationSource`].
#[derive(Clone)]
pub struct Translator {
    /// Page fetcher.
    source: Arc<dyn TranslationSource>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("source", &"<TranslationSource>").finish()
    }
}

impl Translator {
    #[must_use]
    pub fn new(source: Arc<dyn TranslationSource>) -> Self {
        Self { source }
    }

    /// Fetches up to `limit` distinct candidates for `phrase` with one request.
    pub async fn fetch_translations(
        &self,
        config: &TranslationConfig,
        phrase: &str,
        direction: Direction,
        product_id: u32,
        limit: usize,
    ) -> Result<Vec<String>, TranslationError> {
        let language_id = language_id_for(&config.target_language);
        let url =
            build_search_url(&config.search_url, phrase, direction, language_id, product_id)?;

        let page = self.source.fetch_page(&url).await?;
        let candidates = scrape_translations(&page, direction, limit);

        tracing::debug!(
            phrase = %phrase,
            language_id,
            product_id,
            found = candidates.len(),
            "Translation lookup finished"
        );

        Ok(candidates)
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;

    use super::test_support::{
        CannedSource,
        result_page,
    };
    use super::*;

    #[tokio::test]
    async fn fetch_uses_configured_language_and_product() {
        let page = result_page(&[("Item", "Artikel")]);
        let source = Arc::new(CannedSource::with_pages(vec![Some(page.as_str())]));
        let translator = Translator::new(source.clone());
        let config = TranslationConfig {
            target_language: "French".to_string(),
            ..TranslationConfig::default()
        };

        let found =
            translator.fetch_translations(&config, "Item", Direction::Forward, 12, 1).await.unwrap();

        assert_that!(found, elements_are![eq("Artikel")]);
        let requested = source.requested();
        assert_that!(requested, len(eq(1)));
        assert_that!(requested[0], contains_substring("langID=345"));
        assert_that!(requested[0], contains_substring("productid=12"));
    }

    #[tokio::test]
    async fn failed_request_surfaces_error() {
        let translator = Translator::new(Arc::new(CannedSource::with_pages(vec![None])));

        let result = translator
            .fetch_translations(&TranslationConfig::default(), "Item", Direction::Forward, 0, 1)
            .await;

        assert_that!(result, err(anything()));
    }
}
