//! `workspace/executeCommand` commands and their arguments.

mod jump;
mod translate;
mod xlf_notes;

use serde::Deserialize;
use tower_lsp::lsp_types::{
    Position,
    Range,
    Url,
};

pub use jump::jump_to_next;
pub use translate::{
    copy_translation,
    lookup_with_fallback,
    show_translation,
};
pub use xlf_notes::{
    full_document_range,
    insert_translations_from_notes,
};

use crate::navigation::Marker;
use crate::translation::Direction;

pub const JUMP_TO_NEXT_DATA_ITEM: &str = "al.jumpToNextDataItem";
pub const JUMP_TO_NEXT_ON_AFTER_GET_RECORD: &str = "al.jumpToNextOnAfterGetRecord";
pub const JUMP_TO_NEXT_KEYS: &str = "al.jumpToNextKeys";
pub const JUMP_TO_NEXT_TRIGGER: &str = "al.jumpToNextTrigger";
pub const SHOW_TRANSLATION: &str = "al.showTranslation";
pub const SHOW_TRANSLATION_REVERSE: &str = "al.showTranslationReverse";
pub const TRANSLATE_AND_COPY: &str = "al.translateAndCopyToClipboard";
pub const INSERT_TRANSLATION_FROM_COMMENT: &str = "al.insertTranslationFromComment";

/// Every command the server registers.
pub const ALL_COMMANDS: &[&str] = &[
    JUMP_TO_NEXT_DATA_ITEM,
    JUMP_TO_NEXT_ON_AFTER_GET_RECORD,
    JUMP_TO_NEXT_KEYS,
    JUMP_TO_NEXT_TRIGGER,
    SHOW_TRANSLATION,
    SHOW_TRANSLATION_REVERSE,
    TRANSLATE_AND_COPY,
    INSERT_TRANSLATION_FROM_COMMENT,
];

/// Marker a jump command looks for.
#[must_use]
pub fn jump_marker(command: &str) -> Option<Marker> {
    match command {
        JUMP_TO_NEXT_DATA_ITEM => Some(Marker::DataItem),
        JUMP_TO_NEXT_ON_AFTER_GET_RECORD => Some(Marker::OnAfterGetRecord),
        JUMP_TO_NEXT_KEYS => Some(Marker::Keys),
        JUMP_TO_NEXT_TRIGGER => Some(Marker::Trigger),
        _ => None,
    }
}

/// Lookup direction of a translation command.
#[must_use]
pub fn translation_direction(command: &str) -> Option<Direction> {
    match command {
        SHOW_TRANSLATION | TRANSLATE_AND_COPY => Some(Direction::Forward),
        SHOW_TRANSLATION_REVERSE => Some(Direction::Reverse),
        _ => None,
    }
}

/// Arguments of the jump commands.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionArgs {
    pub uri: Url,
    pub position: Position,
}

/// Arguments of the translation commands.
#[derive(Debug, Clone, Deserialize)]
pub struct PhraseArgs {
    pub uri: Url,
    /// Current selection; empty for a plain caret.
    pub range: Range,
    /// Phrase to use instead of the selection.
    #[serde(default)]
    pub phrase: Option<String>,
}

/// Arguments of commands acting on a whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentArgs {
    pub uri: Url,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::data_item(JUMP_TO_NEXT_DATA_ITEM, Some(Marker::DataItem))]
    #[case::on_after_get_record(JUMP_TO_NEXT_ON_AFTER_GET_RECORD, Some(Marker::OnAfterGetRecord))]
    #[case::keys(JUMP_TO_NEXT_KEYS, Some(Marker::Keys))]
    #[case::trigger(JUMP_TO_NEXT_TRIGGER, Some(Marker::Trigger))]
    #[case::not_a_jump(SHOW_TRANSLATION, None)]
    fn maps_jump_commands(#[case] command: &str, #[case] expected: Option<Marker>) {
        assert_that!(jump_marker(command), eq(expected));
    }

    #[rstest]
    #[case::show(SHOW_TRANSLATION, Some(Direction::Forward))]
    #[case::copy(TRANSLATE_AND_COPY, Some(Direction::Forward))]
    #[case::reverse(SHOW_TRANSLATION_REVERSE, Some(Direction::Reverse))]
    #[case::xlf(INSERT_TRANSLATION_FROM_COMMENT, None)]
    fn maps_translation_commands(#[case] command: &str, #[case] expected: Option<Direction>) {
        assert_that!(translation_direction(command), eq(expected));
    }

    #[googletest::test]
    fn phrase_is_optional() {
        let args: PhraseArgs = serde_json::from_value(json!({
            "uri": "file:///work/Item.Table.al",
            "range": {
                "start": { "line": 2, "character": 4 },
                "end": { "line": 2, "character": 9 }
            }
        }))
        .unwrap();

        expect_that!(args.phrase, none());
        expect_that!(args.range.end.character, eq(9));
    }
}
