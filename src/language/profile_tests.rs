use indexmap::IndexMap;

use super::*;
use crate::config::{BodyKind, CustomLanguageConfig};
use crate::error::MetricsGuardError;

fn kotlin_config() -> CustomLanguageConfig {
    CustomLanguageConfig {
        extensions: vec!["kt".to_string()],
        line_comments: vec!["//".to_string()],
        block_comments: vec![("/*".to_string(), "*/".to_string())],
        signature_pattern: r"^\s*(?:fun)\s+([A-Za-z_]\w*)".to_string(),
        body: BodyKind::Brace,
        arrow_marker: "=>".to_string(),
        terminator: ";".to_string(),
    }
}

#[test]
fn default_registry_has_dart_and_rust() {
    let registry = ProfileRegistry::default();

    assert_eq!(registry.get_by_extension("dart").unwrap().name, "Dart");
    assert_eq!(registry.get_by_extension("rs").unwrap().name, "Rust");
    assert_eq!(registry.all().len(), 2);
}

#[test]
fn unknown_extension_returns_none() {
    let registry = ProfileRegistry::default();
    assert!(registry.get_by_extension("py").is_none());
}

#[test]
fn extensions_lists_all_registered() {
    let registry = ProfileRegistry::default();
    assert_eq!(registry.extensions(), vec!["dart", "rs"]);
}

#[test]
fn dart_profile_is_arrow_delimited() {
    let registry = ProfileRegistry::default();
    let dart = registry.get_by_extension("dart").unwrap();

    assert_eq!(
        dart.body_delimiter,
        BodyDelimiter::Arrow {
            marker: "=>".to_string(),
            terminator: ";".to_string(),
        }
    );
}

#[test]
fn rust_profile_is_brace_delimited() {
    let registry = ProfileRegistry::default();
    let rust = registry.get_by_extension("rs").unwrap();

    assert_eq!(rust.body_delimiter, BodyDelimiter::Brace);
}

#[test]
fn rust_signature_matches_declarations() {
    let registry = ProfileRegistry::default();
    let signature = &registry.get_by_extension("rs").unwrap().signature;

    for line in [
        "fn plain() {",
        "pub fn visible() {",
        "    pub(crate) async fn scoped() {",
        "pub const fn fixed() -> usize {",
        "unsafe fn raw() {",
    ] {
        assert!(signature.is_match(line), "expected match: {line}");
    }

    for line in ["struct Foo {", "let f = 1;", "// fn commented() {"] {
        assert!(!signature.is_match(line), "unexpected match: {line}");
    }
}

#[test]
fn dart_signature_matches_brace_and_arrow_forms() {
    let registry = ProfileRegistry::default();
    let signature = &registry.get_by_extension("dart").unwrap().signature;

    for line in [
        "void main() {",
        "int total() =>",
        "Future<void> load() async {",
        "  static String label(int id) {",
    ] {
        assert!(signature.is_match(line), "expected match: {line}");
    }

    for line in ["final total = 3;", "class Widget {"] {
        assert!(!signature.is_match(line), "unexpected match: {line}");
    }
}

#[test]
fn custom_language_registered() {
    let mut custom = IndexMap::new();
    custom.insert("Kotlin".to_string(), kotlin_config());

    let registry = ProfileRegistry::with_custom_languages(&custom).unwrap();
    let kotlin = registry.get_by_extension("kt").unwrap();

    assert_eq!(kotlin.name, "Kotlin");
    assert!(kotlin.signature.is_match("fun greet() {"));
    // Built-ins remain available.
    assert!(registry.get_by_extension("rs").is_some());
}

#[test]
fn custom_language_overrides_builtin_extension() {
    let mut config = kotlin_config();
    config.extensions = vec!["rs".to_string()];

    let mut custom = IndexMap::new();
    custom.insert("NotRust".to_string(), config);

    let registry = ProfileRegistry::with_custom_languages(&custom).unwrap();
    assert_eq!(registry.get_by_extension("rs").unwrap().name, "NotRust");
}

#[test]
fn invalid_signature_pattern_is_error() {
    let mut config = kotlin_config();
    config.signature_pattern = "(".to_string();

    let mut custom = IndexMap::new();
    custom.insert("Broken".to_string(), config);

    let err = ProfileRegistry::with_custom_languages(&custom).unwrap_err();
    assert!(matches!(
        err,
        MetricsGuardError::InvalidSignature { language, .. } if language == "Broken"
    ));
}

#[test]
fn arrow_body_kind_from_custom_config() {
    let mut config = kotlin_config();
    config.body = BodyKind::Arrow;
    config.arrow_marker = "=".to_string();
    config.terminator = ";".to_string();

    let profile = LanguageProfile::from_custom("Expr", &config).unwrap();
    assert_eq!(
        profile.body_delimiter,
        BodyDelimiter::Arrow {
            marker: "=".to_string(),
            terminator: ";".to_string(),
        }
    );
}
