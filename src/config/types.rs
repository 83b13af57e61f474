use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// フィールドの JSON パス（例: "translation.fallbackProducts[0].label"）
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `alHelper` 以下にまとめて送られてくる設定
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    pub al_helper: AlHelperSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlHelperSettings {
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationConfig {
    /// 翻訳先の言語名（ポータルの言語 ID に変換される）
    pub target_language: String,

    /// 1 回の検索で集める候補数
    pub max_translations: usize,

    /// 最初の検索で使う製品 ID（`0` は全製品）
    pub product_id: u32,

    pub search_url: String,

    /// ホバー時にカーソル下のフレーズを翻訳する
    pub hover: bool,

    /// 検索結果がない場合に提示する製品
    pub fallback_products: Vec<ProductChoice>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            target_language: "German".to_string(),
            max_translations: 1,
            product_id: 0,
            search_url: "https://www.microsoft.com/en-us/language/Search".to_string(),
            hover: false,
            fallback_products: vec![
                ProductChoice::new("All Products", 0),
                ProductChoice::new("Dynamics NAV", 2),
                ProductChoice::new("Dynamics 365 Business Central", 3),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductChoice {
    pub label: String,
    pub id: u32,
}

impl ProductChoice {
    #[must_use]
    pub fn new(label: impl Into<String>, id: u32) -> Self {
        Self { label: label.into(), id }
    }
}

impl AlHelperSettings {
    /// 設定を検証する
    ///
    /// # Errors
    /// - `maxTranslations` が 0
    /// - `searchUrl` が http(s) の URL ではない
    /// - フォールバック製品が空、またはラベルのない製品がある
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let translation = &self.translation;

        if translation.max_translations == 0 {
            errors.push(ValidationError::new(
                "translation.maxTranslations",
                "Must be at least 1. Example: 3",
            ));
        }

        match url::Url::parse(&translation.search_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError::new(
                "translation.searchUrl",
                format!("Unsupported scheme '{}'. Use an http or https URL", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                "translation.searchUrl",
                format!("Invalid URL '{}': {e}", translation.search_url),
            )),
        }

        if translation.fallback_products.is_empty() {
            errors.push(ValidationError::new(
                "translation.fallbackProducts",
                "At least one product is required. Example: [{\"label\": \"All Products\", \"id\": 0}]",
            ));
        }

        for (index, product) in translation.fallback_products.iter().enumerate() {
            if product.label.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("translation.fallbackProducts[{index}].label"),
                    "The label cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
