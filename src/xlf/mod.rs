//! XLF localization files: developer-note translations copied into targets.

mod inserter;
mod locale;
mod note;

use thiserror::Error;

pub use inserter::{
    NoteInsertion,
    PLACEHOLDERS,
    insert_notes,
    note_prefix_for_file,
};
pub use locale::{
    GENERIC_MARKER,
    LOCALE_PREFIXES,
    locale_prefix_for,
};
pub use note::{
    note_value,
    parse_note,
};

/// Why a document cannot be processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XlfError {
    #[error("'{0}' is not an XLF file")]
    NotXlf(String),

    #[error("'{0}' is the generated source file; open a translated XLF file instead")]
    GenericFile(String),

    #[error("The language of '{0}' is not supported")]
    UnsupportedLanguage(String),
}
