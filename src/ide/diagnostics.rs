//! Filters the compiler diagnostics that a quick fix can act on.

use tower_lsp::lsp_types::{
    Diagnostic,
    NumberOrString,
    Range,
};

use crate::types::SourceRange;

/// `source` of diagnostics reported by the AL compiler.
pub const AL_SOURCE: &str = "AL";

/// Diagnostics the "Declare variable" quick fix understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedDiagnostic {
    /// The name does not exist in the current context.
    NameDoesNotExist,
    /// The type does not contain a definition for the member.
    MemberNotFound,
}

impl SupportedDiagnostic {
    pub const ALL: [Self; 2] = [Self::NameDoesNotExist, Self::MemberNotFound];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NameDoesNotExist => "AL0118",
            Self::MemberNotFound => "AL0132",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|supported| supported.code() == code)
    }
}

/// Whether the diagnostic comes from the AL compiler.
#[must_use]
pub fn is_relevant_language(diagnostic: &Diagnostic) -> bool {
    diagnostic.source.as_deref().is_some_and(|source| source.eq_ignore_ascii_case(AL_SOURCE))
}

/// Whether the diagnostic's code is one of [`SupportedDiagnostic`].
#[must_use]
pub fn has_supported_code(diagnostic: &Diagnostic) -> bool {
    match &diagnostic.code {
        Some(NumberOrString::String(code)) => SupportedDiagnostic::from_code(code).is_some(),
        _ => false,
    }
}

/// Whether the diagnostic covers both ends of `range`.
#[must_use]
pub fn contains_position(diagnostic: &Diagnostic, range: Range) -> bool {
    SourceRange::from(diagnostic.range).contains_range(&SourceRange::from(range))
}

/// First AL diagnostic with a supported code that covers `range`.
#[must_use]
pub fn first_matching_diagnostic(range: Range, diagnostics: &[Diagnostic]) -> Option<&Diagnostic> {
    diagnostics.iter().find(|diagnostic| {
        is_relevant_language(diagnostic)
            && contains_position(diagnostic, range)
            && has_supported_code(diagnostic)
    })
}
