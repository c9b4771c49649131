//! litscan: scan literal tokens out of a file or an inline string.
//!
//! Usage:
//!   litscan [options] [FILE]
//!   litscan --kind number --text '1 2.5 -3e4'
//!
//! One literal parser runs repeatedly until the input is exhausted. Each
//! node is printed on its own line; on failure the furthest error is
//! reported as a diagnostic and the exit code is 2.

use clap::{ArgAction, Parser as ClapParser, ValueEnum};
use litscan_core::LineMap;
use litscan_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use litscan_scanner::{
    ascii_whitespace, no_whitespace, number_lit, unicode_whitespace, EscapeTable, LiteralNode,
    LiteralOptions, LiteralParser, QuoteSet, ScanError, ScanState, UnicodeDelimiters,
    WhitespaceFn,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};

#[derive(ClapParser, Debug)]
#[command(name = "litscan", version, about = "Scan string, number and regexp literals")]
struct Cli {
    /// File to scan. Reads standard input when neither FILE nor --text is given.
    #[arg(value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Scan this text instead of a file.
    #[arg(short = 'e', long)]
    text: Option<String>,

    /// Which literal parser to run.
    #[arg(short, long, value_enum, default_value_t = Kind::Quoted)]
    kind: Kind,

    /// Allowed quote characters for `--kind string`.
    #[arg(short, long, default_value = "\"'")]
    quotes: String,

    /// Whitespace skipped before each literal.
    #[arg(long, value_enum, default_value_t = Whitespace::Ascii)]
    whitespace: Whitespace,

    /// Disable the single-letter escape table (`\n`, `\t`, ...).
    #[arg(long = "noEscapes")]
    no_escapes: bool,

    /// Disable colored output.
    #[arg(long = "noColor")]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Quoted string with a fixed quote set.
    #[value(name = "string")]
    Quoted,
    /// String with Unicode-paired delimiters.
    UnicodeString,
    Number,
    /// Regexp match literal, `/re/`.
    Regexp,
    /// Regexp replace literal, `/re/repl/` or `(re)[repl]`.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Whitespace {
    #[value(name = "none")]
    Off,
    Ascii,
    Unicode,
}

impl Whitespace {
    fn policy(self) -> WhitespaceFn {
        match self {
            Whitespace::Off => no_whitespace,
            Whitespace::Ascii => ascii_whitespace,
            Whitespace::Unicode => unicode_whitespace,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (file_name, source) = match read_source(&cli) {
        Ok(input) => input,
        Err(msg) => {
            print_error(&msg);
            process::exit(1);
        }
    };

    let parser = build_parser(&cli);
    info!(parser = parser.name(), file = %file_name, bytes = source.len(), "scanning");
    let outcome = scan_literals(&source, parser.as_ref(), cli.whitespace.policy());

    let use_color = !cli.no_color && io::stdout().is_terminal();
    for node in &outcome.nodes {
        print_node(node, use_color);
    }

    let mut diagnostics = DiagnosticCollection::new();
    match outcome.error {
        Some(error) => diagnostics.add(error.to_diagnostic().in_file(file_name)),
        None if outcome.nodes.is_empty() => {
            diagnostics.add(Diagnostic::new(&messages::NO_LITERALS_FOUND, &[]).in_file(file_name))
        }
        None => {}
    }

    let line_map = LineMap::new(&source);
    for diag in diagnostics.iter() {
        print_diagnostic(diag, &line_map, use_color);
    }
    let exit_code = if diagnostics.has_errors() { 2 } else { 0 };
    process::exit(exit_code);
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("litscan_scanner=debug,litscan_cli=debug"),
        _ => EnvFilter::new("litscan_scanner=trace,litscan_cli=trace"),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Resolve the input: `--text`, then FILE, then stdin.
fn read_source(cli: &Cli) -> Result<(String, String), String> {
    if let Some(ref text) = cli.text {
        return Ok(("<text>".to_string(), text.clone()));
    }
    match cli.file {
        Some(ref path) => std::fs::read_to_string(path)
            .map(|source| (path.display().to_string(), source))
            .map_err(|e| format!("Cannot read file '{}': {}", path.display(), e)),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Cannot read standard input: {}", e))?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

fn build_parser(cli: &Cli) -> Box<dyn LiteralParser> {
    let escapes = if cli.no_escapes {
        EscapeTable::EMPTY
    } else {
        EscapeTable::DEFAULT
    };
    let unicode = LiteralOptions::new(UnicodeDelimiters).with_escapes(escapes.clone());
    match cli.kind {
        Kind::Quoted => Box::new(
            LiteralOptions::new(QuoteSet::new(cli.quotes.clone()))
                .with_escapes(escapes)
                .string_lit(),
        ),
        Kind::UnicodeString => Box::new(unicode.string_lit()),
        Kind::Number => Box::new(number_lit()),
        Kind::Regexp => Box::new(unicode.regexp_match_lit()),
        Kind::Replace => Box::new(unicode.regexp_replace_lit()),
    }
}

struct ScanOutcome<'src> {
    nodes: Vec<LiteralNode<'src>>,
    error: Option<ScanError>,
}

/// Parse literals back to back until only whitespace is left or a parse fails.
fn scan_literals<'src>(
    source: &'src str,
    parser: &dyn LiteralParser,
    whitespace: WhitespaceFn,
) -> ScanOutcome<'src> {
    let mut state = ScanState::with_whitespace(source, whitespace);
    let mut nodes = Vec::new();
    loop {
        state.skip_whitespace();
        if state.is_eof() {
            break;
        }
        match parser.parse(&mut state) {
            Ok(node) => {
                debug!(kind = %node.kind, range = ?node.range, "literal");
                nodes.push(node);
            }
            Err(_) => break,
        }
    }
    ScanOutcome {
        nodes,
        error: state.take_error(),
    }
}

fn print_node(node: &LiteralNode<'_>, use_color: bool) {
    if use_color {
        let line = node.to_string();
        // `kind range value`; color the first two fields.
        let mut fields = line.splitn(3, ' ');
        let kind = fields.next().unwrap_or_default();
        let range = fields.next().unwrap_or_default();
        let value = fields.next().unwrap_or_default();
        println!("{}{}{} {}{}{} {}", BOLD, kind, RESET, GRAY, range, RESET, value);
    } else {
        println!("{}", node);
    }
}

fn print_diagnostic(diag: &Diagnostic, line_map: &LineMap, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(range) = diag.range {
                eprint!("({})", line_map.line_and_column_of(range.pos));
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}{}{} {}LS{}{}: {}",
            BOLD, color, diag.category, RESET, GRAY, diag.code, RESET, diag.message_text
        );
    } else {
        eprintln!("{}", diag.render(line_map));
    }
}

fn print_error(msg: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litscan_scanner::{Expected, Number};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("litscan").chain(args.iter().copied()))
    }

    #[test]
    fn test_scan_strings_until_eof() {
        let cli = cli(&["--text", r#""a" 'b\tc'  "d""#]);
        let parser = build_parser(&cli);
        let source = cli.text.clone().unwrap();
        let outcome = scan_literals(&source, parser.as_ref(), cli.whitespace.policy());
        let tokens: Vec<_> = outcome.nodes.iter().filter_map(|n| n.token()).collect();
        assert_eq!(tokens, vec!["a", "b\tc", "d"]);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_scan_numbers_stops_at_error() {
        let cli = cli(&["--kind", "number", "--text", "1 2.5 x"]);
        let parser = build_parser(&cli);
        let source = cli.text.clone().unwrap();
        let outcome = scan_literals(&source, parser.as_ref(), cli.whitespace.policy());
        let numbers: Vec<_> = outcome.nodes.iter().filter_map(|n| n.number_value()).collect();
        assert_eq!(numbers, vec![Number::Int(1), Number::Float(2.5)]);
        assert_eq!(outcome.error, Some(ScanError::new(Expected::Number, 6)));
    }

    #[test]
    fn test_no_escapes_flag() {
        let cli = cli(&["--noEscapes", "--quotes", "'", "--text", r"'a\nb'"]);
        let parser = build_parser(&cli);
        let source = cli.text.clone().unwrap();
        let outcome = scan_literals(&source, parser.as_ref(), cli.whitespace.policy());
        assert_eq!(outcome.nodes[0].token(), Some("a\\nb"));
    }

    #[test]
    fn test_replace_kind() {
        let cli = cli(&["-k", "replace", "--text", "(a+)[b]"]);
        let parser = build_parser(&cli);
        let source = cli.text.clone().unwrap();
        let outcome = scan_literals(&source, parser.as_ref(), cli.whitespace.policy());
        let (pattern, replacement) = outcome.nodes[0].children().unwrap();
        assert_eq!((pattern.token(), replacement.token()), (Some("a+"), Some("b")));
    }

    #[test]
    fn test_whitespace_none_rejects_leading_space() {
        let cli = cli(&["--whitespace", "none", "--text", " \"a\""]);
        let parser = build_parser(&cli);
        let source = cli.text.clone().unwrap();
        let outcome = scan_literals(&source, parser.as_ref(), cli.whitespace.policy());
        assert!(outcome.nodes.is_empty());
        assert_eq!(
            outcome.error,
            Some(ScanError::new(Expected::Quotes("\"'".to_string()), 0))
        );
    }
}
