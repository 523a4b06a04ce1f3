//! Inline parser over token windows.
//!
//! Greedy, left-to-right. At each position the constructs are tried in a
//! fixed order and the first one that closes wins; anything that does not
//! close stays literal text. Inline parsing never fails.

use crate::ast::{Bold, CodeSpan, Image, Inline, Italic, Link, Strikethrough, Text};
use crate::lexer::{stringify, Token, TokenKind};

/// Parse the inline content of one block.
#[inline]
pub fn parse_inlines<'a>(tokens: &[Token<'a>]) -> Vec<Inline<'a>> {
    if tokens.is_empty() {
        return Vec::new();
    }

    InlineParser::new(tokens).parse()
}

struct InlineParser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> InlineParser<'t, 'a> {
    #[inline]
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(&mut self) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(4);
        let mut text_start = 0;

        while self.pos < self.tokens.len() {
            let parsed = match self.tokens[self.pos].kind {
                TokenKind::Backtick => self.try_parse_code_span(),
                TokenKind::ExclamationMark => self.try_parse_image(),
                TokenKind::LeftSquareBracket => self.try_parse_link(),
                TokenKind::Asterisk | TokenKind::Underscore => self
                    .try_parse_bold()
                    .or_else(|| self.try_parse_italic()),
                TokenKind::Tilde => self.try_parse_strikethrough(),
                _ => None,
            };

            match parsed {
                Some((inline, next)) => {
                    self.flush_text(&mut inlines, text_start);
                    inlines.push(inline);
                    self.pos = next;
                    text_start = next;
                }
                None => self.pos += 1,
            }
        }

        self.flush_text(&mut inlines, text_start);
        inlines
    }

    /// Emit the literal tokens between `text_start` and the cursor.
    #[inline(always)]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: usize) {
        if text_start < self.pos {
            inlines.push(Inline::Text(Text {
                content: stringify(&self.tokens[text_start..self.pos]),
            }));
        }
    }

    #[inline(always)]
    fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    /// Words glue to Text and Number tokens.
    #[inline(always)]
    fn is_word_at(&self, index: usize) -> bool {
        matches!(
            self.kind_at(index),
            Some(TokenKind::Text | TokenKind::Number)
        )
    }

    fn try_parse_code_span(&self) -> Option<(Inline<'a>, usize)> {
        let start = self.pos;
        let close = start + 1 + self.find(start + 1, TokenKind::Backtick)?;
        if close == start + 1 {
            return None;
        }

        Some((
            Inline::CodeSpan(CodeSpan {
                content: stringify(&self.tokens[start + 1..close]),
            }),
            close + 1,
        ))
    }

    fn try_parse_image(&self) -> Option<(Inline<'a>, usize)> {
        if self.kind_at(self.pos + 1) != Some(TokenKind::LeftSquareBracket) {
            return None;
        }

        let (label_end, url_end) = self.link_shape(self.pos + 1)?;
        Some((
            Inline::Image(Image {
                alt: stringify(&self.tokens[self.pos + 2..label_end]),
                url: stringify(&self.tokens[label_end + 2..url_end]),
            }),
            url_end + 1,
        ))
    }

    fn try_parse_link(&self) -> Option<(Inline<'a>, usize)> {
        let (label_end, url_end) = self.link_shape(self.pos)?;
        Some((
            Inline::Link(Link {
                label: parse_inlines(&self.tokens[self.pos + 1..label_end]),
                url: stringify(&self.tokens[label_end + 2..url_end]),
            }),
            url_end + 1,
        ))
    }

    /// Locate `[label](url)` starting at the `[` at `open`.
    ///
    /// Returns the indices of the `]` and the closing `)`. The label may not
    /// contain another `[`; the url must be non-empty and may not contain
    /// spaces or parentheses.
    fn link_shape(&self, open: usize) -> Option<(usize, usize)> {
        let mut label_end = None;
        for (index, token) in self.tokens.iter().enumerate().skip(open + 1) {
            match token.kind {
                TokenKind::RightSquareBracket => {
                    label_end = Some(index);
                    break;
                }
                TokenKind::LeftSquareBracket | TokenKind::Newline => return None,
                _ => {}
            }
        }
        let label_end = label_end?;

        if self.kind_at(label_end + 1) != Some(TokenKind::LeftParenthesis) {
            return None;
        }

        let url_start = label_end + 2;
        for (index, token) in self.tokens.iter().enumerate().skip(url_start) {
            match token.kind {
                TokenKind::RightParenthesis if index > url_start => {
                    return Some((label_end, index));
                }
                TokenKind::RightParenthesis
                | TokenKind::LeftParenthesis
                | TokenKind::Space
                | TokenKind::Newline => return None,
                _ => {}
            }
        }

        None
    }

    fn try_parse_bold(&self) -> Option<(Inline<'a>, usize)> {
        let kind = self.tokens[self.pos].kind;
        if self.kind_at(self.pos + 1) != Some(kind) {
            return None;
        }

        let (content_start, close) = self.find_delimited(kind, 2)?;
        Some((
            Inline::Bold(Bold {
                symbol: symbol_of(kind),
                children: parse_inlines(&self.tokens[content_start..close]),
            }),
            close + 2,
        ))
    }

    fn try_parse_italic(&self) -> Option<(Inline<'a>, usize)> {
        let kind = self.tokens[self.pos].kind;
        let (content_start, close) = self.find_delimited(kind, 1)?;
        Some((
            Inline::Italic(Italic {
                symbol: symbol_of(kind),
                children: parse_inlines(&self.tokens[content_start..close]),
            }),
            close + 1,
        ))
    }

    fn try_parse_strikethrough(&self) -> Option<(Inline<'a>, usize)> {
        if self.kind_at(self.pos + 1) != Some(TokenKind::Tilde) {
            return None;
        }

        let (content_start, close) = self.find_delimited(TokenKind::Tilde, 2)?;
        Some((
            Inline::Strikethrough(Strikethrough {
                children: parse_inlines(&self.tokens[content_start..close]),
            }),
            close + 2,
        ))
    }

    /// Find the closer for an emphasis-style delimiter of `width` tokens of
    /// `kind` opening at the cursor.
    ///
    /// Content must be non-empty, must not start with another delimiter
    /// token, and must not start or end with a space. Underscores do not open or close inside a word. Single-width
    /// delimiters skip over doubled ones, so `*a **b** c*` closes at the end.
    fn find_delimited(&self, kind: TokenKind, width: usize) -> Option<(usize, usize)> {
        let start = self.pos;
        let content_start = start + width;

        if kind == TokenKind::Underscore && start > 0 && self.is_word_at(start - 1) {
            return None;
        }
        match self.kind_at(content_start) {
            None | Some(TokenKind::Space) | Some(TokenKind::Newline) => return None,
            Some(first) if first == kind => return None,
            _ => {}
        }

        let mut index = content_start + 1;
        while index + width <= self.tokens.len() {
            let token = &self.tokens[index];
            if token.kind == TokenKind::Newline {
                return None;
            }
            if token.kind != kind {
                index += 1;
                continue;
            }

            let run_matches = (0..width).all(|i| self.kind_at(index + i) == Some(kind));
            if width == 1 && self.kind_at(index + 1) == Some(kind) {
                index += 2;
                continue;
            }

            let after = index + width;
            let flanked = self.tokens[index - 1].kind != TokenKind::Space;
            let intraword = kind == TokenKind::Underscore && self.is_word_at(after);

            if run_matches && flanked && !intraword {
                return Some((content_start, index));
            }
            index += 1;
        }

        None
    }

    /// Offset of the first `kind` token at or after `from`, relative to `from`.
    #[inline]
    fn find(&self, from: usize, kind: TokenKind) -> Option<usize> {
        self.tokens.get(from..)?.iter().position(|t| t.kind == kind)
    }
}

#[inline]
fn symbol_of(kind: TokenKind) -> char {
    if kind == TokenKind::Underscore {
        '_'
    } else {
        '*'
    }
}
