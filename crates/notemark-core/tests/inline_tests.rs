//! Integration tests for inline parsing and the tokenizer

use notemark_core::ast::{Bold, CodeSpan, Image, Inline, Italic, Link, Strikethrough};
use notemark_core::lexer::stringify;
use notemark_core::{parse_inlines, restore_inlines, tokenize, TokenKind};

fn inlines(input: &str) -> Vec<Inline<'_>> {
    parse_inlines(&tokenize(input))
}

// ============================================================================
// Tokenizer Tests
// ============================================================================

#[test]
fn test_tokenize_merges_text_runs() {
    let tokens = tokenize("Hello world");
    let values: Vec<&str> = tokens.iter().map(|t| t.value).collect();

    assert_eq!(values, ["Hello", " ", "world"]);
    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[1].kind, TokenKind::Space);
}

#[test]
fn test_tokenize_number_runs_split_from_text() {
    let tokens = tokenize("abc123def.");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        [
            TokenKind::Text,
            TokenKind::Number,
            TokenKind::Text,
            TokenKind::Dot
        ]
    );
    assert_eq!(tokens[1].value, "123");
}

#[test]
fn test_tokenize_markers_are_single_tokens() {
    let tokens = tokenize("```");

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Backtick));
}

#[test]
fn test_tokenize_multibyte_spans() {
    let tokens = tokenize("> 你好");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].value, "你好");
    assert_eq!(tokens[2].span.start, 2);
    assert_eq!(tokens[2].span.end, 8);
}

#[test]
fn test_tokenize_is_lossless() {
    let input = "# Ti_tle\n> **a** [b](c) ![d](e) ~~f~~ `g` 12. 你好!\r\n";
    let tokens = tokenize(input);

    assert_eq!(stringify(&tokens), input);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
}

// ============================================================================
// Emphasis Tests
// ============================================================================

#[test]
fn test_bold_and_italic() {
    assert_eq!(
        inlines("**a** _b_"),
        vec![
            Inline::Bold(Bold {
                symbol: '*',
                children: vec![Inline::text("a")],
            }),
            Inline::text(" "),
            Inline::Italic(Italic {
                symbol: '_',
                children: vec![Inline::text("b")],
            }),
        ]
    );
}

#[test]
fn test_bold_underscore() {
    assert_eq!(
        inlines("__strong__"),
        vec![Inline::Bold(Bold {
            symbol: '_',
            children: vec![Inline::text("strong")],
        })]
    );
}

#[test]
fn test_italic_wraps_bold() {
    assert_eq!(
        inlines("*a **b** c*"),
        vec![Inline::Italic(Italic {
            symbol: '*',
            children: vec![
                Inline::text("a "),
                Inline::Bold(Bold {
                    symbol: '*',
                    children: vec![Inline::text("b")],
                }),
                Inline::text(" c"),
            ],
        })]
    );
}

#[test]
fn test_unmatched_delimiters_degrade_to_text() {
    assert_eq!(inlines("**open"), vec![Inline::text("**open")]);
    assert_eq!(inlines("a * b * c"), vec![Inline::text("a * b * c")]);
    assert_eq!(inlines("**"), vec![Inline::text("**")]);
}

#[test]
fn test_underscore_inside_word_is_literal() {
    assert_eq!(
        inlines("snake_case_name"),
        vec![Inline::text("snake_case_name")]
    );
}

#[test]
fn test_strikethrough() {
    assert_eq!(
        inlines("~~gone~~"),
        vec![Inline::Strikethrough(Strikethrough {
            children: vec![Inline::text("gone")],
        })]
    );
    assert_eq!(inlines("~single~"), vec![Inline::text("~single~")]);
}

// ============================================================================
// Code Span Tests
// ============================================================================

#[test]
fn test_code_span_content_is_verbatim() {
    assert_eq!(
        inlines("run `**x**` now"),
        vec![
            Inline::text("run "),
            Inline::CodeSpan(CodeSpan {
                content: "**x**".into(),
            }),
            Inline::text(" now"),
        ]
    );
}

#[test]
fn test_empty_code_span_is_text() {
    assert_eq!(inlines("``"), vec![Inline::text("``")]);
}

// ============================================================================
// Link and Image Tests
// ============================================================================

#[test]
fn test_link() {
    assert_eq!(
        inlines("[home](https://example.com)"),
        vec![Inline::Link(Link {
            label: vec![Inline::text("home")],
            url: "https://example.com".into(),
        })]
    );
}

#[test]
fn test_link_label_is_formatted() {
    let parsed = inlines("[**x**](y)");

    let Inline::Link(link) = &parsed[0] else {
        panic!("Expected link, got {:?}", parsed[0]);
    };
    assert!(matches!(link.label[0], Inline::Bold(_)));
}

#[test]
fn test_image() {
    assert_eq!(
        inlines("see ![a cat](cat.png)"),
        vec![
            Inline::text("see "),
            Inline::Image(Image {
                alt: "a cat".into(),
                url: "cat.png".into(),
            }),
        ]
    );
}

#[test]
fn test_malformed_links_degrade_to_text() {
    for input in ["[a](b c)", "[a]()", "[a] (b)", "[a(b)", "![a]"] {
        assert_eq!(inlines(input), vec![Inline::text(input)], "input: {input}");
    }
}

// ============================================================================
// Inline Round Trip Tests
// ============================================================================

#[test]
fn test_inline_round_trip() {
    let inputs = [
        "***a***",
        "**a***",
        "_a_b_",
        "[x](y)z`w`",
        "~~a ~~ b~~",
        "!![a](b)",
        "*a **b** c*",
    ];

    for input in inputs {
        assert_eq!(restore_inlines(&inlines(input)), input, "input: {input}");
    }
}
