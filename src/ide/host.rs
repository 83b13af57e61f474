//! The editor operations commands need, behind a trait so flows can be tested
//! without a connected client.

use std::collections::HashMap;

use tower_lsp::Client;
use tower_lsp::lsp_types::{
    MessageActionItem,
    MessageType,
    Range,
    ShowDocumentParams,
    TextEdit,
    Url,
    WorkspaceEdit,
};

#[tower_lsp::async_trait]
pub trait EditorHost: Send + Sync {
    /// Shows a message to the user (`window/showMessage`).
    async fn show_message(&self, typ: MessageType, message: String);

    /// Asks the user to pick one of `choices`; `None` when dismissed.
    async fn choose(&self, message: String, choices: Vec<String>) -> Option<String>;

    /// Replaces `range` of `uri` with `new_text` in one edit; `true` when applied.
    async fn apply_edit(&self, uri: Url, range: Range, new_text: String) -> bool;

    /// Moves the selection of `uri` to `selection`; `true` when the editor complied.
    async fn set_selection(&self, uri: Url, selection: Range) -> bool;
}

#[tower_lsp::async_trait]
impl EditorHost for Client {
    async fn show_message(&self, typ: MessageType, message: String) {
        Self::show_message(self, typ, message).await;
    }

    async fn choose(&self, message: String, choices: Vec<String>) -> Option<String> {
        let actions = choices
            .into_iter()
            .map(|title| MessageActionItem { title, properties: HashMap::new() })
            .collect();
        match self.show_message_request(MessageType::INFO, message, Some(actions)).await {
            Ok(choice) => choice.map(|item| item.title),
            Err(e) => {
                tracing::error!("Failed to show choice prompt: {}", e);
                None
            }
        }
    }

    async fn apply_edit(&self, uri: Url, range: Range, new_text: String) -> bool {
        let mut changes = HashMap::new();
        changes.insert(uri, vec![TextEdit { range, new_text }]);

        match Self::apply_edit(self, WorkspaceEdit { changes: Some(changes), ..Default::default() })
            .await
        {
            Ok(response) => {
                if let Some(reason) = response.failure_reason {
                    tracing::warn!(%reason, "Workspace edit rejected");
                }
                response.applied
            }
            Err(e) => {
                tracing::error!("Failed to apply workspace edit: {}", e);
                false
            }
        }
    }

    async fn set_selection(&self, uri: Url, selection: Range) -> bool {
        let params = ShowDocumentParams {
            uri,
            external: Some(false),
            take_focus: Some(true),
            selection: Some(selection),
        };
        match self.show_document(params).await {
            Ok(success) => success,
            Err(e) => {
                tracing::error!("Failed to show document: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Recording [`EditorHost`] for tests.

    use std::sync::Mutex;

    use super::*;

    /// What a flow asked the editor to do.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum HostCall {
        Message(MessageType, String),
        Choose(String, Vec<String>),
        ApplyEdit(Url, Range, String),
        SetSelection(Url, Range),
    }

    /// Records calls and answers prompts from a script.
    #[derive(Debug)]
    pub(crate) struct RecordingHost {
        /// Calls in order.
        pub(crate) calls: Mutex<Vec<HostCall>>,
        /// Answer for every `choose` prompt.
        pub(crate) choice: Option<String>,
        /// Result of `apply_edit`.
        pub(crate) accept_edits: bool,
    }

    impl Default for RecordingHost {
        fn default() -> Self {
            Self { calls: Mutex::new(Vec::new()), choice: None, accept_edits: true }
        }
    }

    impl RecordingHost {
        pub(crate) fn choosing(choice: &str) -> Self {
            Self { choice: Some(choice.to_string()), ..Self::default() }
        }

        pub(crate) fn rejecting_edits() -> Self {
            Self { accept_edits: false, ..Self::default() }
        }

        pub(crate) fn calls(&self) -> Vec<HostCall> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }

        pub(crate) fn messages(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    HostCall::Message(_, message) => Some(message),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: HostCall) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }
    }

    #[tower_lsp::async_trait]
    impl EditorHost for RecordingHost {
        async fn show_message(&self, typ: MessageType, message: String) {
            self.record(HostCall::Message(typ, message));
        }

        async fn choose(&self, message: String, choices: Vec<String>) -> Option<String> {
            self.record(HostCall::Choose(message, choices));
            self.choice.clone()
        }

        async fn apply_edit(&self, uri: Url, range: Range, new_text: String) -> bool {
            self.record(HostCall::ApplyEdit(uri, range, new_text));
            self.accept_edits
        }

        async fn set_selection(&self, uri: Url, selection: Range) -> bool {
            self.record(HostCall::SetSelection(uri, selection));
            true
        }
    }
}
