//! # notemark core
//!
//! A small markdown-like engine for note text: a lossless tokenizer, a block
//! parser engine with pluggable-by-order block parsers, an inline parser, and
//! a restorer that turns the AST back into the exact source text.
//!
//! ## Quick Start
//!
//! ```rust
//! use notemark_core::{restore, Block, Parser, Profile};
//!
//! let input = "> Hello\n> > world";
//! let parser = Parser::new(Profile::Full);
//! let blocks = parser.parse(input).unwrap();
//!
//! assert!(matches!(blocks[0], Block::Blockquote(_)));
//! assert_eq!(restore(&blocks), input);
//! ```
//!
//! ## Profiles
//!
//! - `Profile::Basic` - blockquotes, horizontal rules, ordered lists
//! - `Profile::Full` - adds headings, fenced code blocks, unordered lists

pub mod ast;
pub mod blocks;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod restore;
pub mod span;

pub use ast::{Block, Inline};
pub use blocks::BlockParser;
pub use error::{ParseError, ParseErrorKind};
pub use inline::parse_inlines;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{Parser, Profile};
pub use restore::{restore, restore_inlines, Restore};

/// Parse `input` with the default (`Full`) profile.
pub fn parse(input: &str) -> Result<Vec<Block<'_>>, ParseError> {
    Parser::default().parse(input)
}
