//! LSP 機能ハンドラー
//!
//! `hover` の処理を担当します。

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    Hover,
    HoverContents,
    HoverParams,
    MarkupContent,
    MarkupKind,
};

use super::super::backend::Backend;
use crate::ide::hover::generate_hover_content;
use crate::types::SourcePosition;

/// `textDocument/hover` リクエストを処理
///
/// キャンセルされたリクエストはこの future ごと破棄され、検索も中断される
pub async fn handle_hover(backend: &Backend, params: HoverParams) -> Result<Option<Hover>> {
    let uri = params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    tracing::debug!(uri = %uri, line = position.line, character = position.character, "Hover request");

    let config = backend.translation_config().await;
    if !config.hover {
        return Ok(None);
    }

    let Some(text) = backend.state.document_text(&uri).await else {
        tracing::debug!("Document not open: {}", uri);
        return Ok(None);
    };

    let Some(value) = generate_hover_content(
        &backend.state.translator,
        &config,
        &text,
        SourcePosition::from(position),
    )
    .await
    else {
        return Ok(None);
    };

    Ok(Some(Hover {
        contents: HoverContents::Markup(MarkupContent { kind: MarkupKind::Markdown, value }),
        range: None,
    }))
}
