//! Block parsers.
//!
//! Every block construct implements the same two-step contract:
//!
//! - [`BlockParser::matches`] inspects the window from its first token and
//!   reports how many tokens the construct spans, without building anything.
//! - [`BlockParser::parse`] re-derives that length, slices the window and
//!   builds the node, recursing into inline (or, for quotes, block) parsing.
//!
//! The set is closed; the engine holds them in a fixed priority order.

use std::borrow::Cow;

use crate::ast::{
    Block, Blockquote, CodeBlock, Heading, HorizontalRule, OrderedList, UnorderedList,
};
use crate::error::ParseError;
use crate::inline::parse_inlines;
use crate::lexer::{row_end, split_rows, stringify, window_span, Token, TokenKind};
use crate::parser::parse_blocks;

/// Maximum heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// A block-level construct recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockParser {
    /// A single newline token between blocks.
    LineBreak,
    /// ```` ```lang ```` ... ```` ``` ````
    CodeBlock,
    /// `# ` to `###### `
    Heading,
    /// `> ` lines, nested by re-matching each dedented line.
    Blockquote,
    /// `---` or `***`
    HorizontalRule,
    /// `1. `
    OrderedList,
    /// `- ` or `* `
    UnorderedList,
}

impl BlockParser {
    /// Stable name used in logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            BlockParser::LineBreak => "line_break",
            BlockParser::CodeBlock => "code_block",
            BlockParser::Heading => "heading",
            BlockParser::Blockquote => "blockquote",
            BlockParser::HorizontalRule => "horizontal_rule",
            BlockParser::OrderedList => "ordered_list",
            BlockParser::UnorderedList => "unordered_list",
        }
    }

    /// Number of tokens this construct spans from the start of `tokens`, or
    /// `None` when it does not start here. Never mutates anything, so the
    /// engine can probe several parsers at the same position.
    pub fn matches(self, tokens: &[Token<'_>]) -> Option<usize> {
        match self {
            BlockParser::LineBreak => match_line_break(tokens),
            BlockParser::CodeBlock => match_code_block(tokens),
            BlockParser::Heading => match_heading(tokens),
            BlockParser::Blockquote => match_blockquote(tokens),
            BlockParser::HorizontalRule => match_horizontal_rule(tokens),
            BlockParser::OrderedList => match_ordered_list(tokens),
            BlockParser::UnorderedList => match_unordered_list(tokens),
        }
    }

    /// Build the node for the window starting at `tokens`.
    ///
    /// Fails with [`crate::ParseErrorKind::NotMatched`] when
    /// [`matches`](Self::matches) rejects the window.
    pub fn parse<'a>(self, tokens: &[Token<'a>]) -> Result<Block<'a>, ParseError> {
        let size = self
            .matches(tokens)
            .ok_or_else(|| ParseError::not_matched(self.name(), window_span(tokens)))?;
        let window = &tokens[..size];

        match self {
            BlockParser::LineBreak => Ok(Block::LineBreak),
            BlockParser::CodeBlock => Ok(build_code_block(window)),
            BlockParser::Heading => Ok(build_heading(window)),
            BlockParser::Blockquote => build_blockquote(window),
            BlockParser::HorizontalRule => Ok(Block::HorizontalRule(HorizontalRule {
                symbol: symbol_of(window[0].kind),
            })),
            BlockParser::OrderedList => Ok(Block::OrderedList(OrderedList {
                number: Cow::Borrowed(window[0].value),
                children: parse_inlines(&window[3..]),
            })),
            BlockParser::UnorderedList => Ok(Block::UnorderedList(UnorderedList {
                symbol: symbol_of(window[0].kind),
                children: parse_inlines(&window[2..]),
            })),
        }
    }
}

#[inline]
fn kind_at(tokens: &[Token<'_>], index: usize) -> Option<TokenKind> {
    tokens.get(index).map(|t| t.kind)
}

#[inline]
fn symbol_of(kind: TokenKind) -> char {
    if kind == TokenKind::Asterisk {
        '*'
    } else {
        '-'
    }
}

#[inline]
fn is_bullet(kind: Option<TokenKind>) -> bool {
    matches!(kind, Some(TokenKind::Dash | TokenKind::Asterisk))
}

fn match_line_break(tokens: &[Token<'_>]) -> Option<usize> {
    (kind_at(tokens, 0)? == TokenKind::Newline).then_some(1)
}

// ============================================================================
// Horizontal rule
// ============================================================================

/// Exactly three `-` or three `*`, alone on the line.
fn match_horizontal_rule(tokens: &[Token<'_>]) -> Option<usize> {
    let kind = kind_at(tokens, 0);
    if !is_bullet(kind) || kind_at(tokens, 1) != kind || kind_at(tokens, 2) != kind {
        return None;
    }

    match kind_at(tokens, 3) {
        None | Some(TokenKind::Newline) => Some(3),
        _ => None,
    }
}

// ============================================================================
// Lists
// ============================================================================

/// `NUMBER . SPACE` followed by at least one token on the same line.
fn match_ordered_list(tokens: &[Token<'_>]) -> Option<usize> {
    if kind_at(tokens, 0) != Some(TokenKind::Number)
        || kind_at(tokens, 1) != Some(TokenKind::Dot)
        || kind_at(tokens, 2) != Some(TokenKind::Space)
    {
        return None;
    }

    let end = row_end(tokens);
    (end > 3).then_some(end)
}

/// `- ` or `* ` followed by at least one token on the same line.
fn match_unordered_list(tokens: &[Token<'_>]) -> Option<usize> {
    if !is_bullet(kind_at(tokens, 0)) || kind_at(tokens, 1) != Some(TokenKind::Space) {
        return None;
    }

    let end = row_end(tokens);
    (end > 2).then_some(end)
}

// ============================================================================
// Heading
// ============================================================================

fn match_heading(tokens: &[Token<'_>]) -> Option<usize> {
    let level = tokens.iter().take_while(|t| t.is(TokenKind::Hash)).count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    if kind_at(tokens, level) != Some(TokenKind::Space) {
        return None;
    }

    let end = row_end(tokens);
    (end > level + 1).then_some(end)
}

fn build_heading<'a>(window: &[Token<'a>]) -> Block<'a> {
    let level = window.iter().take_while(|t| t.is(TokenKind::Hash)).count();
    Block::Heading(Heading {
        level: level as u8,
        children: parse_inlines(&window[level + 1..]),
    })
}

// ============================================================================
// Code block
// ============================================================================

#[inline]
fn is_fence(row: &[Token<'_>]) -> bool {
    row.len() == 3 && row.iter().all(|t| t.is(TokenKind::Backtick))
}

/// Opening fence with an optional single-word language, content rows, and a
/// closing fence alone on its line.
fn match_code_block(tokens: &[Token<'_>]) -> Option<usize> {
    if tokens.len() < 3 || !tokens[..3].iter().all(|t| t.is(TokenKind::Backtick)) {
        return None;
    }

    let open_end = row_end(tokens);
    if open_end == tokens.len() {
        return None;
    }
    let language_ok = tokens[3..open_end]
        .iter()
        .all(|t| !matches!(t.kind, TokenKind::Space | TokenKind::Backtick));
    if !language_ok {
        return None;
    }

    let mut start = open_end + 1;
    while start <= tokens.len() {
        let rest = &tokens[start..];
        let len = row_end(rest);
        if is_fence(&rest[..len]) {
            return Some(start + len);
        }
        if len == rest.len() {
            break;
        }
        start += len + 1;
    }

    None
}

fn build_code_block<'a>(window: &[Token<'a>]) -> Block<'a> {
    let open_end = row_end(window);
    let close_start = window.len() - 3;
    Block::CodeBlock(CodeBlock {
        language: stringify(&window[3..open_end]),
        content: stringify(&window[open_end + 1..close_start]),
    })
}

// ============================================================================
// Blockquote
// ============================================================================

/// `> ` followed by at least one token.
#[inline]
fn is_quote_row(row: &[Token<'_>]) -> bool {
    row.len() > 2 && row[0].is(TokenKind::GreaterThan) && row[1].is(TokenKind::Space)
}

/// Consecutive quote rows, up to but excluding the newline after the last.
fn match_blockquote(tokens: &[Token<'_>]) -> Option<usize> {
    let mut end = None;
    let mut start = 0;

    while start < tokens.len() {
        let rest = &tokens[start..];
        let len = row_end(rest);
        if !is_quote_row(&rest[..len]) {
            break;
        }
        end = Some(start + len);
        start += len + 1;
    }

    end
}

/// Each row loses its `> ` prefix and is parsed on its own; a row that is
/// still quoted becomes a nested blockquote, anything else a paragraph.
fn build_blockquote<'a>(window: &[Token<'a>]) -> Result<Block<'a>, ParseError> {
    let mut children = Vec::new();

    for row in split_rows(window) {
        let dedented = &row[2..];
        let mut nodes = parse_blocks(dedented, &[BlockParser::Blockquote])?;
        match (nodes.pop(), nodes.is_empty()) {
            (Some(node), true) => children.push(node),
            _ => {
                return Err(ParseError::inconsistent(
                    BlockParser::Blockquote.name(),
                    "quoted line did not parse to exactly one block",
                    window_span(row),
                ))
            }
        }
    }

    Ok(Block::Blockquote(Blockquote { children }))
}
