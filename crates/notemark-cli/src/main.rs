//! nmcli - Parse, inspect, and round-trip notemark documents
//!
//! Usage:
//!   nmcli [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   parse     Parse and display document structure
//!   tokens    Show the token stream
//!   restore   Parse, then print the restored source
//!   check     Verify that restoring reproduces the input

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use notemark_core::{restore, tokenize, Block, Inline, Parser, Profile, TokenKind};
use serde::Serialize;

#[derive(Debug, ClapParser)]
#[command(name = "nmcli", version, about = "notemark document parser and round-trip checker")]
struct Cli {
    /// Block parser registry to use
    #[arg(long, value_enum, global = true, default_value_t = ProfileArg::Full)]
    profile: ProfileArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse and display document structure
    Parse {
        /// Input file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
        /// Output the AST as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show the token stream
    Tokens {
        file: Option<PathBuf>,
        #[arg(short, long)]
        json: bool,
    },
    /// Parse, then print the restored source
    Restore { file: Option<PathBuf> },
    /// Verify that restoring the parsed document reproduces the input
    Check { file: Option<PathBuf> },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    Basic,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Basic => Profile::Basic,
            ProfileArg::Full => Profile::Full,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let parser = Parser::new(cli.profile.into());
    log::debug!("using block parsers {:?}", parser.parsers());

    match cli.command {
        Command::Parse { file, json } => {
            let input = read_input(file.as_ref())?;
            cmd_parse(&parser, &input, json)
        }
        Command::Tokens { file, json } => {
            let input = read_input(file.as_ref())?;
            cmd_tokens(&input, json)
        }
        Command::Restore { file } => {
            let input = read_input(file.as_ref())?;
            let blocks = parser.parse(&input).context("failed to parse input")?;
            print!("{}", restore(&blocks));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => {
            let input = read_input(file.as_ref())?;
            cmd_check(&parser, &input)
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(parser: &Parser, input: &str, json: bool) -> Result<ExitCode> {
    let blocks = parser.parse(input).context("failed to parse input")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        println!("Blocks: {}", blocks.len());
        for (i, block) in blocks.iter().enumerate() {
            if matches!(block, Block::LineBreak) {
                continue;
            }
            println!("  [{}] {}", i + 1, describe_block(block));
            print_children(block, 2);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Paragraph(p) => format!("Paragraph: {}", describe_inlines(&p.children)),
        Block::LineBreak => "LineBreak".to_string(),
        Block::Blockquote(q) => format!("Blockquote ({} lines)", q.children.len()),
        Block::HorizontalRule(hr) => format!("HorizontalRule ({})", hr.symbol),
        Block::OrderedList(l) => {
            format!("OrderedList {}: {}", l.number, describe_inlines(&l.children))
        }
        Block::UnorderedList(l) => {
            format!("UnorderedList {}: {}", l.symbol, describe_inlines(&l.children))
        }
        Block::Heading(h) => {
            format!("Heading (level {}): {}", h.level, describe_inlines(&h.children))
        }
        Block::CodeBlock(c) => {
            let lines = c.content.lines().count();
            format!("CodeBlock (lang: {:?}, {} lines)", c.language, lines)
        }
    }
}

fn print_children(block: &Block, indent: usize) {
    if let Block::Blockquote(q) = block {
        let prefix = "  ".repeat(indent);
        for child in &q.children {
            println!("{}{}", prefix, describe_block(child));
            print_children(child, indent + 1);
        }
    }
}

fn describe_inlines(inlines: &[Inline]) -> String {
    let parts: Vec<String> = inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(t) => format!("{:?}", t.content),
            Inline::Bold(b) => format!("Bold[{}]", describe_inlines(&b.children)),
            Inline::Italic(i) => format!("Italic[{}]", describe_inlines(&i.children)),
            Inline::Strikethrough(s) => format!("Strike[{}]", describe_inlines(&s.children)),
            Inline::CodeSpan(c) => format!("Code({:?})", c.content),
            Inline::Link(l) => format!("Link[{}]({})", describe_inlines(&l.label), l.url),
            Inline::Image(img) => format!("Image({:?})({})", img.alt, img.url),
        })
        .collect();
    parts.join(" ")
}

// =============================================================================
// Tokens Command
// =============================================================================

#[derive(Serialize)]
struct TokenSummary {
    tokens: usize,
    text_runs: usize,
    newlines: usize,
}

fn cmd_tokens(input: &str, json: bool) -> Result<ExitCode> {
    let tokens = tokenize(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(ExitCode::SUCCESS);
    }

    for token in &tokens {
        println!(
            "{:>6}..{:<6} {:<20} {:?}",
            token.span.start,
            token.span.end,
            format!("{:?}", token.kind),
            token.value
        );
    }

    let summary = TokenSummary {
        tokens: tokens.len(),
        text_runs: tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Text)
            .count(),
        newlines: tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .count(),
    };
    eprintln!("{}", serde_json::to_string(&summary)?);

    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// Check Command
// =============================================================================

fn cmd_check(parser: &Parser, input: &str) -> Result<ExitCode> {
    let blocks = parser.parse(input).context("failed to parse input")?;
    let restored = restore(&blocks);

    if restored == input {
        println!("OK: {} blocks round-trip exactly", blocks.len());
        return Ok(ExitCode::SUCCESS);
    }

    let offset = input
        .char_indices()
        .zip(restored.chars())
        .find(|((_, a), b)| a != b)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| input.len().min(restored.len()));
    eprintln!(
        "MISMATCH: restored text differs from input at byte {} ({} vs {} bytes)",
        offset,
        restored.len(),
        input.len()
    );
    Ok(ExitCode::FAILURE)
}
