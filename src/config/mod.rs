//! サーバー設定（型定義・バリデーション・設定ファイルの読み込み）
/// 設定ファイルの読み込み
mod loader;
/// 設定管理
mod manager;
/// 設定の型定義
mod types;

pub use manager::ConfigManager;
pub use types::{
    AlHelperSettings,
    ConfigError,
    ProductChoice,
    ServerSettings,
    TranslationConfig,
    ValidationError,
};
