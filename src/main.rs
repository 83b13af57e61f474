//! Entry point for the Language Server Protocol implementation.

use std::process::ExitCode;
use std::sync::Arc;

use al_helper_language_server::Backend;
use al_helper_language_server::translation::{
    HttpTranslationSource,
    Translator,
};
use tower_lsp::{
    LspService,
    Server,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory for daily log files; logs go to stderr when unset.
const LOG_DIR_ENV: &str = "AL_HELPER_LOG_DIR";

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = init_tracing();

    let source = match HttpTranslationSource::new() {
        Ok(source) => source,
        Err(error) => {
            tracing::error!(%error, "Failed to create HTTP client");
            return ExitCode::FAILURE;
        }
    };
    let translator = Translator::new(Arc::new(source));

    let (stdin, stdout) = (tokio::io::stdin(), tokio::io::stdout());
    let (service, socket) = LspService::new(move |client| Backend::new(client, translator));
    Server::new(stdin, stdout, socket).serve(service).await;

    ExitCode::SUCCESS
}

/// Installs the subscriber. stdout carries the protocol, so logs never go there.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        let appender = tracing_appender::rolling::daily(dir, "al-helper.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        None
    }
}
