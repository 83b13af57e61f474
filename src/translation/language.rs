//! Language names accepted in `translation.targetLanguage` and the portal ids they map to.

/// Id used when the configured language is not in [`LANGUAGE_IDS`] (German).
pub const DEFAULT_LANGUAGE_ID: u32 = 354;

/// Spoken-language name to terminology portal language id.
pub const LANGUAGE_IDS: &[(&str, u32)] = &[
    ("Czech", 328),
    ("Danish", 332),
    ("Dutch", 560),
    ("English", 253),
    ("Finnish", 341),
    ("French", 345),
    ("German", 354),
    ("Icelandic", 394),
    ("Italian", 402),
    ("Norwegian", 536),
    ("Polish", 565),
    ("Portuguese", 567),
    ("Russian", 595),
    ("Spanish", 642),
    ("Swedish", 648),
    ("Turkish", 673),
];

/// Portal language id for `name` (case-insensitive), [`DEFAULT_LANGUAGE_ID`] when unmapped.
#[must_use]
pub fn language_id_for(name: &str) -> u32 {
    let name = name.trim();
    LANGUAGE_IDS
        .iter()
        .find(|(language, _)| language.eq_ignore_ascii_case(name))
        .map_or(DEFAULT_LANGUAGE_ID, |(_, id)| *id)
}
