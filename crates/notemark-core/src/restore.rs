//! Reconstruct source text from the AST.
//!
//! The restorer is the inverse of the parser: for any input `text`,
//! `restore(&parser.parse(text)?) == text`. It walks the tree top-down and
//! writes each node's literal syntax into one buffer.

use crate::ast::{Block, Inline};

/// Types that can write their literal source syntax.
pub trait Restore {
    /// Append this node's source text to `out`.
    fn restore_into(&self, out: &mut String);
}

/// Restore a sequence of block nodes.
pub fn restore(blocks: &[Block<'_>]) -> String {
    let mut out = String::new();
    blocks.restore_into(&mut out);
    out
}

/// Restore a sequence of inline nodes.
pub fn restore_inlines(inlines: &[Inline<'_>]) -> String {
    let mut out = String::new();
    inlines.restore_into(&mut out);
    out
}

impl<T: Restore> Restore for [T] {
    fn restore_into(&self, out: &mut String) {
        for node in self {
            node.restore_into(out);
        }
    }
}

impl<T: Restore> Restore for Vec<T> {
    fn restore_into(&self, out: &mut String) {
        self.as_slice().restore_into(out);
    }
}

impl Restore for Block<'_> {
    fn restore_into(&self, out: &mut String) {
        match self {
            Block::Paragraph(p) => p.children.restore_into(out),
            Block::LineBreak => out.push('\n'),
            Block::Blockquote(q) => {
                for (i, child) in q.children.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str("> ");
                    child.restore_into(out);
                }
            }
            Block::HorizontalRule(hr) => {
                for _ in 0..3 {
                    out.push(hr.symbol);
                }
            }
            Block::OrderedList(l) => {
                out.push_str(&l.number);
                out.push_str(". ");
                l.children.restore_into(out);
            }
            Block::UnorderedList(l) => {
                out.push(l.symbol);
                out.push(' ');
                l.children.restore_into(out);
            }
            Block::Heading(h) => {
                for _ in 0..h.level {
                    out.push('#');
                }
                out.push(' ');
                h.children.restore_into(out);
            }
            Block::CodeBlock(c) => {
                out.push_str("```");
                out.push_str(&c.language);
                out.push('\n');
                out.push_str(&c.content);
                out.push_str("```");
            }
        }
    }
}

impl Restore for Inline<'_> {
    fn restore_into(&self, out: &mut String) {
        match self {
            Inline::Text(t) => out.push_str(&t.content),
            Inline::Bold(b) => {
                out.push(b.symbol);
                out.push(b.symbol);
                b.children.restore_into(out);
                out.push(b.symbol);
                out.push(b.symbol);
            }
            Inline::Italic(i) => {
                out.push(i.symbol);
                i.children.restore_into(out);
                out.push(i.symbol);
            }
            Inline::Strikethrough(s) => {
                out.push_str("~~");
                s.children.restore_into(out);
                out.push_str("~~");
            }
            Inline::CodeSpan(c) => {
                out.push('`');
                out.push_str(&c.content);
                out.push('`');
            }
            Inline::Link(l) => {
                out.push('[');
                l.label.restore_into(out);
                out.push_str("](");
                out.push_str(&l.url);
                out.push(')');
            }
            Inline::Image(img) => {
                out.push_str("![");
                out.push_str(&img.alt);
                out.push_str("](");
                out.push_str(&img.url);
                out.push(')');
            }
        }
    }
}
