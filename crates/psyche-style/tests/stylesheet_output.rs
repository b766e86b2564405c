//! End-to-end stylesheet generation against realistic configurations.

use psyche_style::{generate, properties, scoped, ScrollbarStyle, SearchConfig, TOKEN_PROPERTIES};

/// Collects every custom-property name referenced via `var(--…)`.
fn var_references(css: &str) -> Vec<String> {
    let mut references = Vec::new();
    let mut rest = css;
    while let Some(pos) = rest.find("var(") {
        rest = &rest[pos + "var(".len()..];
        let end = rest
            .find(|c| c == ')' || c == ',')
            .expect("unterminated var() reference");
        references.push(rest[..end].trim().to_string());
        rest = &rest[end..];
    }
    references
}

#[test]
fn test_media_square_configuration_end_to_end() {
    let config = SearchConfig::from_yaml(
        r#"
theme:
  darkMode: media
  scrollbarStyle: square
messages:
  empty: No "results" found
"#,
    )
    .unwrap();

    let sheet = generate(&config).unwrap();

    // Dark overrides live inside a media-query wrapper.
    assert!(sheet
        .properties
        .contains("@media (prefers-color-scheme: dark) { psyche-search {"));

    // The message is quoted with its inner quotes escaped.
    assert!(sheet
        .properties
        .contains("--message-empty: \"No \\\"results\\\" found\";"));

    // Square scrollbar fragment, and no trace of the rounded thumb border.
    assert!(sheet.scoped.contains("width: 0.5rem"));
    assert!(!sheet
        .scoped
        .contains("border: 3px solid var(--theme-background)"));
}

#[test]
fn test_every_referenced_token_is_declared() {
    for style in [ScrollbarStyle::Square, ScrollbarStyle::Rounded] {
        let mut config = SearchConfig::default();
        config.theme.scrollbar_style = style;

        let tokens = properties(&config).unwrap();
        let rules = scoped(&config).unwrap();

        for reference in var_references(&rules) {
            assert!(
                tokens.contains(&format!("{}: ", reference)),
                "scoped rules reference {} but the token block never declares it",
                reference
            );
        }
    }
}

#[test]
fn test_token_block_declares_the_full_contract() {
    let out = properties(&SearchConfig::default()).unwrap();
    for name in TOKEN_PROPERTIES {
        assert!(out.contains(&format!("{}: ", name)), "missing {}", name);
    }
}

#[test]
fn test_identical_configurations_produce_identical_output() {
    let first = SearchConfig::from_yaml("theme: { darkMode: media }").unwrap();
    let second = first.clone();

    assert_eq!(
        generate(&first).unwrap(),
        generate(&second).unwrap()
    );
}
