//! Single-pass tokenizer.
//!
//! The tokenizer turns note text into a flat sequence of [`Token`]s that the
//! block and inline parsers pattern-match against.
//!
//! - Zero-copy: every token value borrows from the input
//! - Lossless: concatenating token values reproduces the input exactly
//! - Multi-character markers (a fence of three backticks, a `**` delimiter)
//!   are repeated single tokens; counting them is the parsers' job

use std::borrow::Cow;

use crate::ast::CowStr;
use crate::span::Span;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// `_`
    Underscore,
    /// `*`
    Asterisk,
    /// `#`
    Hash,
    /// `` ` ``
    Backtick,
    /// `[`
    LeftSquareBracket,
    /// `]`
    RightSquareBracket,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `!`
    ExclamationMark,
    /// `~`
    Tilde,
    /// `-`
    Dash,
    /// `>`
    GreaterThan,
    /// `.`
    Dot,
    /// `\n`
    Newline,
    /// ` `
    Space,
    /// A run of ASCII digits.
    Number,
    /// A run of any other characters.
    Text,
}

impl TokenKind {
    /// Classify a single character. Digits and unrecognized characters are
    /// run kinds and report [`TokenKind::Number`] / [`TokenKind::Text`].
    #[inline]
    pub fn of(c: char) -> TokenKind {
        match c {
            '_' => TokenKind::Underscore,
            '*' => TokenKind::Asterisk,
            '#' => TokenKind::Hash,
            '`' => TokenKind::Backtick,
            '[' => TokenKind::LeftSquareBracket,
            ']' => TokenKind::RightSquareBracket,
            '(' => TokenKind::LeftParenthesis,
            ')' => TokenKind::RightParenthesis,
            '!' => TokenKind::ExclamationMark,
            '~' => TokenKind::Tilde,
            '-' => TokenKind::Dash,
            '>' => TokenKind::GreaterThan,
            '.' => TokenKind::Dot,
            '\n' => TokenKind::Newline,
            ' ' => TokenKind::Space,
            '0'..='9' => TokenKind::Number,
            _ => TokenKind::Text,
        }
    }

    /// Whether consecutive characters of this kind merge into one token.
    #[inline]
    pub const fn is_run(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Text)
    }
}

/// A lexical unit borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub value: &'a str,
    /// Byte span in the input.
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline(always)]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Tokenize `input` in a single pass over its characters.
///
/// ```rust
/// use notemark_core::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("1. abc");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Number, TokenKind::Dot, TokenKind::Space, TokenKind::Text]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::with_capacity(input.len() / 2 + 1);

    for (offset, c) in input.char_indices() {
        let kind = TokenKind::of(c);
        let end = offset + c.len_utf8();

        // Runs grow the trailing token in place by widening its slice.
        if kind.is_run() {
            if let Some(last) = tokens.last_mut() {
                if last.kind == kind {
                    let start = last.span.start as usize;
                    last.value = &input[start..end];
                    last.span.end = end as u32;
                    continue;
                }
            }
        }

        tokens.push(Token {
            kind,
            value: &input[offset..end],
            span: Span::new(offset as u32, end as u32),
        });
    }

    tokens
}

/// Concatenate token values back into text.
///
/// A single token is returned borrowed; longer windows are joined into an
/// owned string.
pub fn stringify<'a>(tokens: &[Token<'a>]) -> CowStr<'a> {
    match tokens {
        [] => Cow::Borrowed(""),
        [only] => Cow::Borrowed(only.value),
        _ => {
            let len = tokens.iter().map(|t| t.value.len()).sum();
            let mut text = String::with_capacity(len);
            for token in tokens {
                text.push_str(token.value);
            }
            Cow::Owned(text)
        }
    }
}

/// Split `tokens` into rows at newline tokens. Separators are not included;
/// `n` newlines always yield `n + 1` rows.
pub fn split_rows<'t, 'a>(tokens: &'t [Token<'a>]) -> impl Iterator<Item = &'t [Token<'a>]> {
    tokens.split(|t| t.kind == TokenKind::Newline)
}

/// Index of the first newline token, or `tokens.len()` when the window is a
/// single row.
#[inline]
pub fn row_end(tokens: &[Token<'_>]) -> usize {
    tokens
        .iter()
        .position(|t| t.kind == TokenKind::Newline)
        .unwrap_or(tokens.len())
}

/// Span covering the whole window, or an empty span for an empty window.
pub fn window_span(tokens: &[Token<'_>]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span::default(),
    }
}
