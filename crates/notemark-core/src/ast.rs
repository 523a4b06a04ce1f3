//! Abstract Syntax Tree types for notemark documents.
//!
//! The AST is designed to be:
//!
//! - **Owned top-down**: composite nodes own their children, nothing points up
//! - **Borrowing where cheap**: strings are `Cow<'a, str>`, borrowed from the
//!   input whenever a value is a single token
//! - **Restorable**: every node has one textual form, see [`crate::restore`]

/// Block-level AST nodes.
///
/// Blocks are produced by the block parser engine in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Block<'a> {
    /// A line of inline content.
    Paragraph(Paragraph<'a>),
    /// The newline separating two blocks.
    LineBreak,
    /// `> ` quoted lines, possibly nested.
    Blockquote(Blockquote<'a>),
    /// `---` or `***`.
    HorizontalRule(HorizontalRule),
    /// `1. item`
    OrderedList(OrderedList<'a>),
    /// `- item` or `* item`
    UnorderedList(UnorderedList<'a>),
    /// `# Title` through `###### Title`.
    Heading(Heading<'a>),
    /// Fenced code block.
    CodeBlock(CodeBlock<'a>),
}

/// Inline content of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Paragraph<'a> {
    pub children: Vec<Inline<'a>>,
}

/// Block quotation.
///
/// Each child corresponds to one quoted source line: a [`Paragraph`], or a
/// nested [`Blockquote`] when the line was quoted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Blockquote<'a> {
    pub children: Vec<Block<'a>>,
}

/// Thematic break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalRule {
    /// `'-'` or `'*'`.
    pub symbol: char,
}

/// One numbered list line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderedList<'a> {
    /// The numeral exactly as written; never renumbered.
    pub number: CowStr<'a>,
    pub children: Vec<Inline<'a>>,
}

/// One bulleted list line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnorderedList<'a> {
    /// `'-'` or `'*'`.
    pub symbol: char,
    pub children: Vec<Inline<'a>>,
}

/// Section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Heading<'a> {
    /// Heading level (1-6).
    pub level: u8,
    pub children: Vec<Inline<'a>>,
}

/// Fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeBlock<'a> {
    /// Language identifier after the opening fence, possibly empty.
    pub language: CowStr<'a>,
    /// Raw text between the fences, including its trailing newline.
    pub content: CowStr<'a>,
}

/// Inline-level AST nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Inline<'a> {
    /// Literal text.
    Text(Text<'a>),
    /// `**bold**` or `__bold__`.
    Bold(Bold<'a>),
    /// `*italic*` or `_italic_`.
    Italic(Italic<'a>),
    /// `~~struck~~`.
    Strikethrough(Strikethrough<'a>),
    /// `` `code` ``.
    CodeSpan(CodeSpan<'a>),
    /// `[label](url)`.
    Link(Link<'a>),
    /// `![alt](url)`.
    Image(Image<'a>),
}

/// Literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Text<'a> {
    pub content: CowStr<'a>,
}

/// Strong emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bold<'a> {
    /// Delimiter character, `'*'` or `'_'`.
    pub symbol: char,
    pub children: Vec<Inline<'a>>,
}

/// Emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Italic<'a> {
    /// Delimiter character, `'*'` or `'_'`.
    pub symbol: char,
    pub children: Vec<Inline<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Strikethrough<'a> {
    pub children: Vec<Inline<'a>>,
}

/// Inline code; content is not parsed for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeSpan<'a> {
    pub content: CowStr<'a>,
}

/// Hyperlink with a formatted label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Link<'a> {
    pub label: Vec<Inline<'a>>,
    pub url: CowStr<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Image<'a> {
    /// Alt text, kept verbatim.
    pub alt: CowStr<'a>,
    pub url: CowStr<'a>,
}

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

impl<'a> Text<'a> {
    /// Convenience constructor, mostly for building expected trees.
    pub fn new(content: impl Into<CowStr<'a>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl<'a> Inline<'a> {
    /// Shorthand for `Inline::Text(Text::new(content))`.
    pub fn text(content: impl Into<CowStr<'a>>) -> Self {
        Inline::Text(Text::new(content))
    }
}

impl<'a> Paragraph<'a> {
    pub fn new(children: Vec<Inline<'a>>) -> Self {
        Self { children }
    }
}
