//! Tests for the public parsing API.

use std::io::Write;

use naive_css::prelude::*;
use naive_css::Error;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn decl(property: &str, value: &str) -> Declaration {
    Declaration::with_value(property, value)
}

#[test]
fn test_single_block_in_source_order() {
    let sheet = parse_css(".card { margin: 0; padding: 4px 8px; color: #333; }");

    assert_eq!(sheet.len(), 1);
    assert_eq!(
        sheet.get(".card").unwrap(),
        &[
            decl("margin", "0"),
            decl("padding", "4px 8px"),
            decl("color", "#333"),
        ]
    );
}

#[test]
fn test_declaration_without_value() {
    assert_eq!(
        parse_css("a { display; }").get("a").unwrap(),
        &[Declaration::without_value("display")]
    );
    assert_eq!(
        parse_css("a { display }").get("a").unwrap(),
        &[Declaration::without_value("display")]
    );
}

#[test]
fn test_duplicate_selectors_accumulate() {
    let sheet = parse_css("a { x: 1; } a { y: 2; }");

    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet.get("a").unwrap(), &[decl("x", "1"), decl("y", "2")]);
}

#[test]
fn test_unbalanced_trailing_block_discarded() {
    init_logging();

    let (sheet, diagnostics) = CssParser::new().parse_with_diagnostics("a { x: 1;");

    assert!(sheet.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        &diagnostics[0].kind,
        DiagnosticKind::UnclosedBlock { selector } if selector == "a"
    ));
}

#[test]
fn test_whitespace_tolerance() {
    let spaced = parse_css("  a  {  color : red ; }");
    let compact = parse_css("a{color:red;}");

    assert_eq!(spaced, compact);
    assert_eq!(compact.get("a").unwrap(), &[decl("color", "red")]);
}

#[test]
fn test_parser_reuse_is_isolated() {
    let mut parser = CssParser::new();

    let first = parser.parse("a { x: 1; } b { y");
    let second = parser.parse("c { z: 3; }");

    assert_eq!(first.selectors().collect::<Vec<_>>(), ["a"]);
    assert_eq!(second.selectors().collect::<Vec<_>>(), ["c"]);
    assert_eq!(second.get("c").unwrap(), &[decl("z", "3")]);
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn test_multiline_stylesheet() {
    init_logging();

    let css = r#"
        body {
            font: 12px/1.5 "Helvetica Neue", sans-serif;
            margin: 0
        }

        ul li > a:hover {
            text-decoration: underline;
        }

        body { color: black; }
    "#;
    let sheet = parse_css(css);

    assert_eq!(
        sheet.selectors().collect::<Vec<_>>(),
        ["body", "ul li > a:hover"]
    );
    assert_eq!(
        sheet.get("body").unwrap(),
        &[
            decl("font", "12px/1.5 \"Helvetica Neue\", sans-serif"),
            decl("margin", "0"),
            decl("color", "black"),
        ]
    );
    assert_eq!(
        sheet.get("ul li > a:hover").unwrap(),
        &[decl("text-decoration", "underline")]
    );
}

#[test]
fn test_config_policies() {
    let config = ParserConfig::new()
        .duplicate_selectors(DuplicatePolicy::Replace)
        .empty_selectors(EmptySelectorPolicy::Keep);
    let mut parser = CssParser::with_config(config);

    let sheet = parser.parse("a { x: 1; } { y: 2; } a { z: 3; }");

    assert_eq!(sheet.selectors().collect::<Vec<_>>(), ["a", ""]);
    assert_eq!(sheet.get("a").unwrap(), &[decl("z", "3")]);
    assert_eq!(sheet.get("").unwrap(), &[decl("y", "2")]);
    assert_eq!(parser.diagnostics()[0].kind, DiagnosticKind::EmptySelector);
}

#[test]
fn test_strict_mode_reports_first_problem() {
    let mut parser = CssParser::with_config(ParserConfig::new().strict(true));

    match parser.try_parse("{ x: 1; }\na { : 2; }") {
        Err(Error::Malformed { count, first }) => {
            assert_eq!(count, 2);
            assert_eq!(first, Diagnostic::new(DiagnosticKind::EmptySelector, 1, 1));
        }
        other => panic!("expected malformed error, got {other:?}"),
    }
}

#[test]
fn test_empty_input() {
    let mut parser = CssParser::new();

    assert!(parser.parse("").is_empty());
    assert!(parser.parse("   \n\t ").is_empty());
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "h1 {{ font-weight: bold; }}").unwrap();

    let sheet = Stylesheet::from_file(file.path()).unwrap();

    assert_eq!(sheet.get("h1").unwrap(), &[decl("font-weight", "bold")]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.css");

    let err = Stylesheet::from_file(&path).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.css"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_to_json() {
    let sheet = parse_css("b { x: 1; } a { y }");
    let json = serde_json::to_string(&sheet).unwrap();

    assert_eq!(
        json,
        r#"{"b":[{"property":"x","value":"1"}],"a":[{"property":"y","value":null}]}"#
    );
}
