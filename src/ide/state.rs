//! サーバーの共有状態

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tower_lsp::lsp_types::Url;

use crate::translation::Translator;
use crate::variables::VariableTable;

/// ハンドラー間で共有する状態
///
/// クローンしても同じドキュメントを共有する。変数テーブルは不変
#[derive(Clone)]
pub struct ServerState {
    /// 開いているドキュメント（URI → 全文）
    pub documents: Arc<Mutex<HashMap<Url, String>>>,
    /// よく使う変数名
    pub variables: Arc<VariableTable>,
    /// 翻訳検索
    pub translator: Translator,
}

impl ServerState {
    #[must_use]
    pub fn new(variables: VariableTable, translator: Translator) -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
            variables: Arc::new(variables),
            translator,
        }
    }

    /// 開いているドキュメントのテキスト
    pub async fn document_text(&self, uri: &Url) -> Option<String> {
        self.documents.lock().await.get(uri).cloned()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("documents", &"<HashMap<Url, String>>")
            .field("variables", &self.variables.entries().len())
            .field("translator", &self.translator)
            .finish()
    }
}
