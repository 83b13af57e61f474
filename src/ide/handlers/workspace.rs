//! ワークスペース関連のハンドラー

use tower_lsp::lsp_types::DidChangeConfigurationParams;

use super::super::backend::Backend;
use crate::config::{
    AlHelperSettings,
    ServerSettings,
};

/// クライアントから送られた設定（そのまま、または `alHelper` 以下）
pub(crate) fn parse_settings(settings: serde_json::Value) -> Option<AlHelperSettings> {
    serde_json::from_value::<ServerSettings>(settings.clone())
        .map(|wrapped| wrapped.al_helper)
        .or_else(|_| serde_json::from_value::<AlHelperSettings>(settings))
        .ok()
}

pub async fn handle_did_change_configuration(
    backend: &Backend,
    params: DidChangeConfigurationParams,
) {
    tracing::info!(settings = %params.settings, "didChangeConfiguration received");

    let Some(new_settings) = parse_settings(params.settings) else {
        tracing::warn!("ignoring unparsable settings");
        return;
    };

    let mut config_manager = backend.config_manager.lock().await;
    match config_manager.update_settings(new_settings) {
        Ok(()) => tracing::info!("configuration updated successfully"),
        Err(error) => tracing::error!(%error, "configuration validation error"),
    }
}
