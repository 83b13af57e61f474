//! Search URL construction and result-page scraping.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::TranslationError;

/// Which side of the term pair the phrase is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The phrase is English; candidates come from the target column.
    Forward,
    /// The phrase is in the target language; candidates come from the source column.
    Reverse,
}

impl Direction {
    /// Value of the `Source` query parameter.
    #[must_use]
    pub const fn source_param(self) -> &'static str {
        match self {
            Self::Forward => "true",
            Self::Reverse => "false",
        }
    }

    /// Class of the result cells holding candidates.
    #[must_use]
    pub const fn cell_class(self) -> &'static str {
        match self {
            Self::Forward => "trs_target_clm",
            Self::Reverse => "trs_source_clm",
        }
    }
}

/// Builds the portal search URL for `phrase`.
///
/// The phrase is form-encoded, so spaces become `+`.
pub fn build_search_url(
    base: &str,
    phrase: &str,
    direction: Direction,
    language_id: u32,
    product_id: u32,
) -> Result<Url, TranslationError> {
    let mut url = Url::parse(base)
        .map_err(|source| TranslationError::InvalidUrl { url: base.to_string(), source })?;
    url.query_pairs_mut()
        .append_pair("searchTerm", phrase)
        .append_pair("langID", &language_id.to_string())
        .append_pair("productid", &product_id.to_string())
        .append_pair("Source", direction.source_param());
    Ok(url)
}

#[allow(clippy::unwrap_used)]
static CELL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<td\b[^>]*?\bclass\s*=\s*["']([^"']*)["'][^>]*>(.*?)</td\s*>"#).unwrap()
});

#[allow(clippy::unwrap_used)]
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

#[allow(clippy::unwrap_used)]
static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

/// Extracts up to `limit` distinct candidates from a result page.
#[must_use]
pub fn scrape_translations(html: &str, direction: Direction, limit: usize) -> Vec<String> {
    let wanted = direction.cell_class();
    let mut candidates: Vec<String> = Vec::new();

    for captures in CELL_REGEX.captures_iter(html) {
        if candidates.len() >= limit {
            break;
        }
        let (Some(class), Some(content)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        if !class.as_str().split_whitespace().any(|c| c == wanted) {
            continue;
        }

        let text = cell_text(content.as_str());
        if !text.is_empty() && !candidates.contains(&text) {
            candidates.push(text);
        }
    }

    candidates
}

/// Visible text of a cell: tags dropped, entities decoded, whitespace collapsed.
fn cell_text(content: &str) -> String {
    let without_tags = TAG_REGEX.replace_all(content, "");
    let decoded = ENTITY_REGEX.replace_all(&without_tags, |caps: &regex::Captures<'_>| {
        let entity = caps.get(1).map_or("", |m| m.as_str());
        decode_entity(entity).map_or_else(|| format!("&{entity};"), String::from)
    });
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = entity.strip_prefix('#') {
        return decimal.parse().ok().and_then(char::from_u32);
    }
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => None,
    }
}
