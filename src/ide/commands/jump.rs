//! Jumps to the next AL structure marker below the caret.

use tower_lsp::lsp_types::Url;

use crate::ide::host::EditorHost;
use crate::navigation::{
    JumpTarget,
    Marker,
    jump_target,
};

/// Moves the caret of `uri` to the next `marker` line below `cursor_line`.
pub async fn jump_to_next(
    host: &impl EditorHost,
    uri: &Url,
    text: &str,
    cursor_line: u32,
    marker: Marker,
) -> JumpTarget {
    let target = jump_target(text, cursor_line, marker);

    tracing::debug!(
        uri = %uri,
        marker = marker.text(),
        from = cursor_line,
        to = target.caret.start.line,
        "Jumping to next marker"
    );

    if !host.set_selection(uri.clone(), target.caret.into()).await {
        tracing::warn!(uri = %uri, "Editor did not move the caret");
    }

    target
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use tower_lsp::lsp_types::{
        Position,
        Range,
    };

    use super::*;
    use crate::ide::host::test_support::{
        HostCall,
        RecordingHost,
    };

    const REPORT: &str = "report 50100 Customers\n\
                          {\n\
                          \x20   dataset\n\
                          \x20   {\n\
                          \x20       dataitem(Customer; Customer)\n\
                          \x20       {\n\
                          \x20       }\n\
                          \x20   }\n\
                          }";

    #[tokio::test]
    async fn selects_end_of_marker_line() {
        let host = RecordingHost::default();
        let uri = Url::parse("file:///work/Customers.Report.al").unwrap();

        let target = jump_to_next(&host, &uri, REPORT, 0, Marker::DataItem).await;

        let caret = Position { line: 4, character: 36 };
        assert_that!(
            host.calls(),
            elements_are![eq(&HostCall::SetSelection(
                uri.clone(),
                Range { start: caret, end: caret }
            ))]
        );
        assert_that!(target.reveal.end.line, eq(8));
    }

    #[tokio::test]
    async fn falls_back_to_second_line() {
        let host = RecordingHost::default();
        let uri = Url::parse("file:///work/Customers.Report.al").unwrap();

        let target = jump_to_next(&host, &uri, REPORT, 4, Marker::Keys).await;

        assert_that!(target.caret.start.line, eq(1));
        assert_that!(target.caret.start.character, eq(1));
    }
}
