//! LSPサーバーの統合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]
#![allow(deprecated)]
#![allow(clippy::match_wildcard_for_single_variants)]

use std::sync::Arc;

use al_helper_language_server::Backend;
use al_helper_language_server::translation::{
    TranslationError,
    TranslationSource,
    Translator,
};
use googletest::prelude::*;
use serde_json::json;
use tower_lsp::lsp_types::*;
use tower_lsp::{
    LanguageServer,
    LspService,
};

/// Answers every lookup with the same result page.
struct FixedPage(&'static str);

#[tower_lsp::async_trait]
impl TranslationSource for FixedPage {
    async fn fetch_page(&self, _url: &Url) -> std::result::Result<String, TranslationError> {
        Ok(self.0.to_string())
    }
}

const RESULT_PAGE: &str = "<table><tr>\
                           <td class=\"trs_source_clm\">Posting Date</td>\
                           <td class=\"trs_target_clm\">Buchungsdatum</td>\
                           </tr></table>";

const CODEUNIT: &str = "codeunit 50100 \"Post Helper\"\n\
                        {\n\
                        \x20   procedure Run()\n\
                        \x20   begin\n\
                        \x20       Customer.Get('10000');\n\
                        \x20   end;\n\
                        }";

fn create_test_backend() -> Backend {
    let translator = Translator::new(Arc::new(FixedPage(RESULT_PAGE)));
    let (service, _socket) = LspService::new(move |client| Backend::new(client, translator));
    service.inner().clone()
}

fn uri(path: &str) -> Url {
    Url::parse(&format!("file:///work/{path}")).unwrap()
}

async fn open(backend: &Backend, uri: &Url, language_id: &str, text: &str) {
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: language_id.to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
        .await;
}

fn hover_params(uri: &Url, line: u32, character: u32) -> HoverParams {
    HoverParams {
        text_document_position_params: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            position: Position { line, character },
        },
        work_done_progress_params: WorkDoneProgressParams { work_done_token: None },
    }
}

#[tokio::test]
async fn initialize_advertises_commands() {
    let backend = create_test_backend();

    let result = backend.initialize(InitializeParams::default()).await.unwrap();

    let commands = result.capabilities.execute_command_provider.unwrap().commands;
    assert_that!(
        commands,
        contains_each![
            eq("al.jumpToNextDataItem"),
            eq("al.jumpToNextOnAfterGetRecord"),
            eq("al.jumpToNextKeys"),
            eq("al.jumpToNextTrigger"),
            eq("al.showTranslation"),
            eq("al.showTranslationReverse"),
            eq("al.translateAndCopyToClipboard"),
            eq("al.insertTranslationFromComment")
        ]
    );
    assert!(matches!(
        result.capabilities.text_document_sync,
        Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL))
    ));
    assert!(result.capabilities.code_action_provider.is_some());
    assert!(result.capabilities.hover_provider.is_some());
}

#[tokio::test]
async fn code_action_declares_known_variable() {
    let backend = create_test_backend();
    let uri = uri("PostHelper.Codeunit.al");
    open(&backend, &uri, "al", CODEUNIT).await;

    let range = Range {
        start: Position { line: 4, character: 8 },
        end: Position { line: 4, character: 16 },
    };
    let diagnostic = Diagnostic {
        range,
        source: Some("AL".to_string()),
        code: Some(NumberOrString::String("AL0118".to_string())),
        message: "The name 'Customer' does not exist in the current context.".to_string(),
        ..Diagnostic::default()
    };

    let actions = backend
        .code_action(CodeActionParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            range: Range { start: Position { line: 4, character: 10 }, ..range },
            context: CodeActionContext { diagnostics: vec![diagnostic], ..Default::default() },
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
        .await
        .unwrap()
        .unwrap();

    assert_that!(actions, len(eq(1)));
    let CodeActionOrCommand::CodeAction(action) = &actions[0] else {
        panic!("expected a code action");
    };
    assert_that!(action.title.as_str(), eq("Declare variable Customer (Customer)"));
    let edits = action.edit.as_ref().unwrap().changes.as_ref().unwrap().get(&uri).unwrap();
    assert_that!(edits[0].new_text.as_str(), eq("    var\n        Customer: Record Customer;\n"));
}

#[tokio::test]
async fn code_action_ignores_other_diagnostics() {
    let backend = create_test_backend();
    let uri = uri("PostHelper.Codeunit.al");
    open(&backend, &uri, "al", CODEUNIT).await;

    let range = Range {
        start: Position { line: 4, character: 8 },
        end: Position { line: 4, character: 16 },
    };
    let diagnostic = Diagnostic {
        range,
        source: Some("AL".to_string()),
        code: Some(NumberOrString::String("AL0185".to_string())),
        message: "Codeunit 'Customer' is missing".to_string(),
        ..Diagnostic::default()
    };

    let actions = backend
        .code_action(CodeActionParams {
            text_document: TextDocumentIdentifier { uri },
            range,
            context: CodeActionContext { diagnostics: vec![diagnostic], ..Default::default() },
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
        .await
        .unwrap();

    assert_that!(actions, some(is_empty()));
}

#[tokio::test]
async fn hover_is_disabled_by_default() {
    let backend = create_test_backend();
    let uri = uri("MyApp.de-DE.xlf");
    open(&backend, &uri, "xml", "  <source>Posting Date</source>").await;

    let hover = backend.hover(hover_params(&uri, 0, 12)).await.unwrap();

    assert!(hover.is_none());
}

#[tokio::test]
async fn hover_translates_after_enabling_it() {
    let backend = create_test_backend();
    let uri = uri("MyApp.de-DE.xlf");
    open(&backend, &uri, "xml", "  <source>Posting Date</source>").await;

    backend
        .did_change_configuration(DidChangeConfigurationParams {
            settings: json!({ "alHelper": { "translation": { "hover": true } } }),
        })
        .await;
    let hover = backend.hover(hover_params(&uri, 0, 12)).await.unwrap().unwrap();

    match hover.contents {
        HoverContents::Markup(markup) => {
            assert!(markup.kind == MarkupKind::Markdown);
            assert_that!(markup.value.as_str(), contains_substring("**German**: Buchungsdatum"));
        }
        _ => panic!("Expected Markup content"),
    }
}

#[tokio::test]
async fn closed_documents_are_forgotten() {
    let backend = create_test_backend();
    let uri = uri("MyApp.de-DE.xlf");
    open(&backend, &uri, "xml", "  <source>Posting Date</source>").await;
    backend
        .did_change_configuration(DidChangeConfigurationParams {
            settings: json!({ "translation": { "hover": true } }),
        })
        .await;

    backend
        .did_close(DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
        })
        .await;

    assert!(backend.hover(hover_params(&uri, 0, 12)).await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_command_returns_nothing() {
    let backend = create_test_backend();

    let result = backend
        .execute_command(ExecuteCommandParams {
            command: "al.doesNotExist".to_string(),
            arguments: vec![],
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
        .await
        .unwrap();

    assert!(result.is_none());
}
