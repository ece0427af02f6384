//! Token stream tests for the tabdown lexer
//!
//! Table-driven checks of the exact tokens produced for small documents, and of the error
//! each malformed document is rejected with.

use rstest::rstest;
use tabdown::{lex, LexerConfig, TabdownError, Token};

fn c(text: &str) -> Token {
    Token::content(text)
}

#[rstest]
#[case::empty("", vec![])]
#[case::single_line("hello", vec![c("hello")])]
#[case::two_lines("hello\nworld", vec![c("hello"), c("world")])]
#[case::trailing_newline("hello\n", vec![c("hello")])]
#[case::child("hello\n world", vec![c("hello"), Token::IndentBy(1), c("world"), Token::DedentBy(1)])]
#[case::siblings(
    "a\n b\n c\nd",
    vec![c("a"), Token::IndentBy(1), c("b"), c("c"), Token::DedentBy(1), c("d")]
)]
#[case::dedent_many_levels(
    "a\n b\n  c\n   d\ne",
    vec![
        c("a"), Token::IndentBy(1), c("b"), Token::IndentBy(1), c("c"), Token::IndentBy(1),
        c("d"), Token::DedentBy(1), Token::DedentBy(1), Token::DedentBy(1), c("e"),
    ]
)]
#[case::dedent_to_middle(
    "a\n b\n   c\n d",
    vec![c("a"), Token::IndentBy(1), c("b"), Token::IndentBy(2), c("c"), Token::DedentBy(2), c("d"), Token::DedentBy(1)]
)]
#[case::blank_lines_ignored("a\n\n\n b", vec![c("a"), Token::IndentBy(1), c("b"), Token::DedentBy(1)])]
fn test_lex_default_config(#[case] source: &str, #[case] expected: Vec<Token>) {
    assert_eq!(lex(source, &LexerConfig::default()).unwrap(), expected);
}

#[rstest]
#[case::blank_stays_in_block(
    "A\n B\n\n C",
    vec![c("A"), Token::IndentBy(1), c("B"), c(""), c("C"), Token::DedentBy(1)]
)]
#[case::blank_after_dedent(
    "A\n B\n\nC",
    vec![c("A"), Token::IndentBy(1), c("B"), Token::DedentBy(1), c(""), c("C")]
)]
#[case::blank_before_indent(
    "A\n\n B",
    vec![c("A"), c(""), Token::IndentBy(1), c("B"), Token::DedentBy(1)]
)]
#[case::several_blanks("A\n\n\nB", vec![c("A"), c(""), c(""), c("B")])]
#[case::leading_blank("\nA", vec![c(""), c("A")])]
#[case::trailing_blanks_dropped("A\n\n\n", vec![c("A")])]
#[case::whitespace_only_is_blank("A\n   \nB", vec![c("A"), c(""), c("B")])]
fn test_lex_with_blank_lines(#[case] source: &str, #[case] expected: Vec<Token>) {
    let config = LexerConfig::new().with_blank_lines(true);
    assert_eq!(lex(source, &config).unwrap(), expected);
}

#[test]
fn test_inconsistent_dedent_is_rejected() {
    let err = lex("hello\n  world\n !", &LexerConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        TabdownError::InconsistentIndentation {
            line: 3,
            found: 1,
            ..
        }
    ));
}

#[test]
fn test_tab_in_space_indentation_is_rejected() {
    let err = lex("hello\n  world\n\tx", &LexerConfig::default()).unwrap_err();
    assert!(matches!(err, TabdownError::MixedIndentation { line: 3, .. }));
}

#[test]
fn test_space_in_tab_indentation_is_rejected() {
    let config = LexerConfig::new().with_indent("\t").unwrap();
    let err = lex("a\n\tb\n c", &config).unwrap_err();
    assert!(matches!(err, TabdownError::MixedIndentation { line: 3, .. }));
}

#[rstest]
#[case::tab_on_blank_line("a\n \t \nb", 2, 2)]
#[case::tab_leading_blank_line("a\n\t\nb", 2, 1)]
#[case::tab_before_content("a\n \tb", 2, 2)]
fn test_off_char_is_rejected_on_any_line(
    #[case] source: &str,
    #[case] line: usize,
    #[case] column: usize,
) {
    assert_eq!(
        lex(source, &LexerConfig::default()),
        Err(TabdownError::MixedIndentation { line, column })
    );
}

#[test]
fn test_indented_first_line_tokens() {
    assert_eq!(
        lex("  x\ny", &LexerConfig::default()).unwrap(),
        vec![Token::IndentBy(2), c("x"), Token::DedentBy(2), c("y")]
    );
}

#[rstest]
#[case::tab_then_space("\t ")]
#[case::space_then_tab(" \t")]
#[case::empty("")]
#[case::letters("ab")]
fn test_invalid_unit_is_a_configuration_error(#[case] unit: &str) {
    assert_eq!(
        LexerConfig::new().with_indent(unit),
        Err(TabdownError::Configuration {
            unit: unit.to_string()
        })
    );
}

#[test]
fn test_dedent_pops_each_open_step() {
    // Dedenting from 3 units to 0 closes the 2-step level, then the 1-step level.
    let tokens = lex("a\n b\n   c\nd", &LexerConfig::default()).unwrap();
    assert_eq!(
        tokens,
        vec![
            c("a"),
            Token::IndentBy(1),
            c("b"),
            Token::IndentBy(2),
            c("c"),
            Token::DedentBy(2),
            Token::DedentBy(1),
            c("d"),
        ]
    );
}

#[test]
fn test_auto_detection_matches_explicit_unit() {
    let source = "root\n    child\n        grandchild\n    sibling\nnext";
    let auto = lex(source, &LexerConfig::new().with_auto_indent()).unwrap();
    let explicit = lex(source, &LexerConfig::new().with_indent("    ").unwrap()).unwrap();
    assert_eq!(auto, explicit);
}

#[test]
fn test_unindented_document_with_auto_detection() {
    let tokens = lex("a\nb\nc", &LexerConfig::new().with_auto_indent()).unwrap();
    assert_eq!(tokens, vec![c("a"), c("b"), c("c")]);
}
