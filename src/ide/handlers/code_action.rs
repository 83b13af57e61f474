//! Code Action ハンドラー
//!
//! `textDocument/codeAction` リクエストを処理し、
//! 未宣言の変数に対する「Declare variable」アクションを提供します。

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CodeActionOrCommand,
    CodeActionParams,
    CodeActionResponse,
};

use super::super::backend::Backend;
use crate::ide::code_actions::declare_variable_action;
use crate::ide::diagnostics::first_matching_diagnostic;

/// `textDocument/codeAction` リクエストを処理
///
/// 要求範囲を含み、対応コードを持つ最初の AL 診断だけを対象にする
pub async fn handle_code_action(
    backend: &Backend,
    params: CodeActionParams,
) -> Result<Option<CodeActionResponse>> {
    let uri = &params.text_document.uri;
    let range = params.range;

    tracing::debug!(uri = %uri, line = range.start.line, character = range.start.character, "Code Action request");

    let Some(diagnostic) = first_matching_diagnostic(range, &params.context.diagnostics) else {
        return Ok(Some(vec![]));
    };

    let Some(text) = backend.state.document_text(uri).await else {
        tracing::debug!("Document not open: {}", uri);
        return Ok(Some(vec![]));
    };

    let actions: Vec<CodeActionOrCommand> =
        declare_variable_action(uri, &text, diagnostic, &backend.state.variables)
            .map(CodeActionOrCommand::CodeAction)
            .into_iter()
            .collect();

    tracing::debug!("Generated {} code actions", actions.len());

    Ok(Some(actions))
}
