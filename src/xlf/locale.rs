//! File-name locale tags and the note prefixes used for them.

/// Locale tag found in an XLF file name, and the prefix developer notes use for it.
pub const LOCALE_PREFIXES: &[(&str, &str)] = &[
    ("cs-CZ", "CSY"),
    ("da-DK", "DAN"),
    ("de-AT", "DEA"),
    ("de-CH", "DES"),
    ("de-DE", "DEU"),
    ("en-AU", "ENA"),
    ("en-CA", "ENC"),
    ("en-GB", "ENG"),
    ("en-NZ", "ENZ"),
    ("en-US", "ENU"),
    ("es-ES", "ESP"),
    ("es-MX", "ESM"),
    ("fi-FI", "FIN"),
    ("fr-BE", "FRB"),
    ("fr-CA", "FRC"),
    ("fr-CH", "FRS"),
    ("fr-FR", "FRA"),
    ("is-IS", "ISL"),
    ("it-CH", "ITS"),
    ("it-IT", "ITA"),
    ("nb-NO", "NOR"),
    ("nl-BE", "NLB"),
    ("nl-NL", "NLD"),
    ("pl-PL", "PLK"),
    ("ru-RU", "RUS"),
    ("sv-SE", "SVE"),
];

/// Marker in the file name of the compiler-generated source XLF.
pub const GENERIC_MARKER: &str = ".g.xlf";

/// Note prefix for the first locale tag contained in `file_name` (case-insensitive).
#[must_use]
pub fn locale_prefix_for(file_name: &str) -> Option<&'static str> {
    let file_name = file_name.to_ascii_lowercase();
    LOCALE_PREFIXES
        .iter()
        .find(|(tag, _)| file_name.contains(&tag.to_ascii_lowercase()))
        .map(|(_, prefix)| *prefix)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::german("MyApp.de-DE.xlf", Some("DEU"))]
    #[case::swiss_german("MyApp.de-CH.xlf", Some("DES"))]
    #[case::lower_case_tag("myapp.fr-fr.xlf", Some("FRA"))]
    #[case::dutch_belgium("Translations/App.nl-BE.xlf", Some("NLB"))]
    #[case::unsupported("MyApp.ja-JP.xlf", None)]
    #[case::no_tag("MyApp.xlf", None)]
    fn resolves_prefix_from_file_name(#[case] file_name: &str, #[case] expected: Option<&str>) {
        assert_that!(locale_prefix_for(file_name), eq(expected));
    }
}
