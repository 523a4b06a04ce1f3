//! Block parser engine.
//!
//! Tokenizes the input once and walks it with a cursor. At each position the
//! registered [`BlockParser`]s are probed in order and the first match wins;
//! there is no longest-match selection and no backtracking. When nothing
//! matches, the default consumer turns the rest of the line into a
//! [`Paragraph`] (or a lone newline into a [`Block::LineBreak`]).

use crate::ast::{Block, Paragraph};
use crate::blocks::BlockParser;
use crate::error::ParseError;
use crate::inline::parse_inlines;
use crate::lexer::{row_end, tokenize, window_span, Token, TokenKind};

/// Parsing profile that selects the registered block parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Blockquotes, horizontal rules and ordered lists over the default
    /// paragraph.
    Basic,
    /// Everything in `Basic` plus headings, fenced code blocks and unordered
    /// lists.
    #[default]
    Full,
}

impl Profile {
    /// The registration order for this profile. Earlier parsers win when
    /// two constructs could start at the same position.
    pub fn parsers(self) -> Vec<BlockParser> {
        match self {
            Profile::Basic => vec![
                BlockParser::LineBreak,
                BlockParser::Blockquote,
                BlockParser::HorizontalRule,
                BlockParser::OrderedList,
            ],
            Profile::Full => vec![
                BlockParser::LineBreak,
                BlockParser::CodeBlock,
                BlockParser::Heading,
                BlockParser::Blockquote,
                BlockParser::HorizontalRule,
                BlockParser::OrderedList,
                BlockParser::UnorderedList,
            ],
        }
    }
}

/// notemark parser with a fixed block parser registry.
///
/// The registry is read-only after construction, so one parser can be
/// shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    parsers: Vec<BlockParser>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl Parser {
    /// Create a new parser with the given profile.
    #[inline]
    pub fn new(profile: Profile) -> Self {
        Self {
            parsers: profile.parsers(),
        }
    }

    /// Create a parser with an explicit registration order.
    pub fn with_parsers(parsers: Vec<BlockParser>) -> Self {
        Self { parsers }
    }

    /// Registered block parsers in priority order.
    pub fn parsers(&self) -> &[BlockParser] {
        &self.parsers
    }

    /// Parse note text into block nodes.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Vec<Block<'a>>, ParseError> {
        let tokens = tokenize(input);
        let blocks = self.parse_tokens(&tokens)?;
        log::debug!(
            "parsed {} bytes ({} tokens) into {} blocks",
            input.len(),
            tokens.len(),
            blocks.len()
        );
        Ok(blocks)
    }

    /// Parse an already tokenized window.
    #[inline]
    pub fn parse_tokens<'a>(&self, tokens: &[Token<'a>]) -> Result<Vec<Block<'a>>, ParseError> {
        parse_blocks(tokens, &self.parsers)
    }
}

/// Drive `parsers` over `tokens` until the window is exhausted.
///
/// A node is appended only once fully built; the first error aborts the
/// whole parse.
pub(crate) fn parse_blocks<'a>(
    tokens: &[Token<'a>],
    parsers: &[BlockParser],
) -> Result<Vec<Block<'a>>, ParseError> {
    let mut blocks = Vec::with_capacity(8);
    let mut cursor = 0;

    while cursor < tokens.len() {
        let rest = &tokens[cursor..];
        let matched = parsers
            .iter()
            .find_map(|parser| parser.matches(rest).map(|size| (*parser, size)));

        let (block, size) = match matched {
            Some((parser, size)) => {
                if size == 0 || size > rest.len() {
                    return Err(ParseError::inconsistent(
                        parser.name(),
                        format!("matched {} of {} tokens", size, rest.len()),
                        window_span(rest),
                    ));
                }
                log::trace!("{} matched {} tokens at {}", parser.name(), size, cursor);
                (parser.parse(&rest[..size])?, size)
            }
            None => parse_default(rest),
        };

        blocks.push(block);
        cursor += size;
    }

    Ok(blocks)
}

/// Fallback for a position no registered parser claims.
fn parse_default<'a>(tokens: &[Token<'a>]) -> (Block<'a>, usize) {
    if tokens[0].is(TokenKind::Newline) {
        return (Block::LineBreak, 1);
    }

    let end = row_end(tokens);
    (
        Block::Paragraph(Paragraph {
            children: parse_inlines(&tokens[..end]),
        }),
        end,
    )
}
