//! Execute Command ハンドラー
//!
//! `workspace/executeCommand` リクエストを処理し、
//! カスタムコマンドを実行します。

use serde::de::DeserializeOwned;
use serde_json::Value;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    ExecuteCommandParams,
    MessageType,
};

use super::super::backend::Backend;
use crate::ide::commands::{
    self,
    DocumentArgs,
    INSERT_TRANSLATION_FROM_COMMENT,
    PhraseArgs,
    PositionArgs,
    TRANSLATE_AND_COPY,
};
use crate::ide::phrase::resolve_phrase;
use crate::navigation::Marker;
use crate::translation::Direction;

/// `workspace/executeCommand` リクエストを処理
pub async fn handle_execute_command(
    backend: &Backend,
    params: ExecuteCommandParams,
) -> Result<Option<Value>> {
    let command = params.command.as_str();
    tracing::debug!(command = %command, "Execute Command request");

    if let Some(marker) = commands::jump_marker(command) {
        return handle_jump(backend, command, params.arguments, marker).await;
    }
    if command == TRANSLATE_AND_COPY {
        return handle_copy_translation(backend, params.arguments).await;
    }
    if let Some(direction) = commands::translation_direction(command) {
        return handle_show_translation(backend, command, params.arguments, direction).await;
    }
    if command == INSERT_TRANSLATION_FROM_COMMENT {
        return handle_insert_from_notes(backend, params.arguments).await;
    }

    tracing::warn!("Unknown command: {}", command);
    Ok(None)
}

/// `al.jumpToNext*` コマンドを実行
///
/// # Arguments
/// * `arguments[0]` - `{ uri, position }`
///
/// `{ caret, reveal }` を返す
async fn handle_jump(
    backend: &Backend,
    command: &str,
    arguments: Vec<Value>,
    marker: Marker,
) -> Result<Option<Value>> {
    let Some(args) = parse_args::<PositionArgs>(command, arguments) else {
        return Ok(None);
    };
    let Some(text) = backend.state.document_text(&args.uri).await else {
        tracing::warn!(uri = %args.uri, "Jump requested for a document that is not open");
        return Ok(None);
    };

    let target =
        commands::jump_to_next(&backend.client, &args.uri, &text, args.position.line, marker)
            .await;

    Ok(serde_json::to_value(target).ok())
}

/// `al.showTranslation` / `al.showTranslationReverse` コマンドを実行
///
/// # Arguments
/// * `arguments[0]` - `{ uri, range, phrase? }`
///
/// 候補を JSON 配列で返す
async fn handle_show_translation(
    backend: &Backend,
    command: &str,
    arguments: Vec<Value>,
    direction: Direction,
) -> Result<Option<Value>> {
    let Some(phrase) = phrase_from_args(backend, command, arguments).await else {
        return Ok(None);
    };
    let config = backend.translation_config().await;

    let candidates = commands::show_translation(
        &backend.client,
        &backend.state.translator,
        &config,
        &phrase,
        direction,
    )
    .await;

    Ok(Some(Value::from(candidates)))
}

/// `al.translateAndCopyToClipboard` コマンドを実行
///
/// クライアントのクリップボード用に最初の候補を JSON 文字列で返す
async fn handle_copy_translation(
    backend: &Backend,
    arguments: Vec<Value>,
) -> Result<Option<Value>> {
    let Some(phrase) = phrase_from_args(backend, TRANSLATE_AND_COPY, arguments).await else {
        return Ok(None);
    };
    let config = backend.translation_config().await;

    let copied =
        commands::copy_translation(&backend.client, &backend.state.translator, &config, &phrase)
            .await;

    Ok(copied.map(Value::String))
}

/// `al.insertTranslationFromComment` コマンドを実行
///
/// # Arguments
/// * `arguments[0]` - `{ uri }`
///
/// 書き込んだ翻訳ユニット数を返す
async fn handle_insert_from_notes(
    backend: &Backend,
    arguments: Vec<Value>,
) -> Result<Option<Value>> {
    let Some(args) = parse_args::<DocumentArgs>(INSERT_TRANSLATION_FROM_COMMENT, arguments) else {
        return Ok(None);
    };
    let Some(text) = backend.state.document_text(&args.uri).await else {
        backend
            .client
            .show_message(MessageType::WARNING, "Open the XLF file before inserting translations")
            .await;
        return Ok(None);
    };

    let updated = commands::insert_translations_from_notes(&backend.client, &args.uri, &text).await;

    Ok(Some(Value::from(updated)))
}

/// 翻訳コマンドのフレーズを解決する（解決できない場合はユーザーに通知）
async fn phrase_from_args(
    backend: &Backend,
    command: &str,
    arguments: Vec<Value>,
) -> Option<String> {
    let args = parse_args::<PhraseArgs>(command, arguments)?;

    let text = if args.phrase.is_some() {
        String::new()
    } else {
        backend.state.document_text(&args.uri).await.unwrap_or_default()
    };

    match resolve_phrase(&text, args.range.into(), args.phrase.as_deref()) {
        Ok(phrase) => Some(phrase),
        Err(error) => {
            backend.client.show_message(MessageType::WARNING, error).await;
            None
        }
    }
}

fn parse_args<T: DeserializeOwned>(command: &str, arguments: Vec<Value>) -> Option<T> {
    let Some(first) = arguments.into_iter().next() else {
        tracing::warn!("Missing arguments for {}", command);
        return None;
    };

    match serde_json::from_value(first) {
        Ok(args) => Some(args),
        Err(error) => {
            tracing::warn!(%error, "Invalid arguments for {}", command);
            None
        }
    }
}
