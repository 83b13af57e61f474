//! al-helper-language-server
//!
//! AL (Business Central) 開発向けの補助機能を提供する Language Server Protocol (LSP) 実装

pub mod config;
pub mod data_type;
pub mod ide;
pub mod navigation;
pub mod translation;
pub mod types;
pub mod variables;
pub mod xlf;

// Backend を再エクスポート
pub use ide::backend::Backend;
