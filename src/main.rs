use std::io::{self, BufRead, IsTerminal};

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typesig::lexer::{Token, TokenKind};

#[derive(Parser, Debug)]
#[command(version, about = "Parse and normalize Haskell-style type annotations", long_about = None)]
struct Args {
    /// Annotations to parse; read one per line from stdin when omitted
    annotations: Vec<String>,
    /// Print the parsed tree instead of the canonical form
    #[arg(long)]
    tree: bool,
    /// Print the token stream
    #[arg(long)]
    tokens: bool,
    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `-v` wins; otherwise `RUST_LOG` is used as is, falling back to `warn`.
fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn token_lines(input: &str) -> Result<Vec<String>, typesig::LexError> {
    let tokens = Token::lex(input)?;
    Ok(tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| format!("{} {} @{}", t.kind, t.value, t.position))
        .collect())
}

/// Everything printed for one annotation.
fn render(input: &str, args: &Args) -> Result<Vec<String>, typesig::Error> {
    let mut lines = if args.tokens {
        token_lines(input)?
    } else {
        Vec::new()
    };
    let ty = typesig::parse(input)?;
    lines.push(if args.tree {
        ty.structure()
    } else {
        ty.to_string()
    });
    Ok(lines)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let inputs = if args.annotations.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        args.annotations.clone()
    };

    let mut failures = 0;
    for input in &inputs {
        match render(input, &args) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
            }
            Err(err) => {
                eprintln!("{}: {}", input.trim(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} annotations failed to parse", failures, inputs.len());
    }
    Ok(())
}
