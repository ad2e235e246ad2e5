//! Command-line tool for reading JSON documents and querying values.
//!
//! Usage: jsondoc [OPTIONS] [FILE]
//!
//! Options:
//!   -q, --query <PATH>     Print the value at a dotted path (repeatable)
//!   -t, --to <FORMAT>      Output layout for containers (compact, pretty)
//!       --strict           Reject unterminated strings and trailing content
//!       --check            Exit 0 if the document parses, 1 otherwise
//!   -v, --verbose          Log parser activity to stderr (-vv for trace)
//!   -h, --help             Print help
//!   -V, --version          Print version

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use libjsondoc::{encode, parse_with_context, Format, ParseContext, Value};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(
    name = "jsondoc",
    version,
    about = "Read a JSON document and query values by path"
)]
struct Cli {
    /// Input file; reads stdin when omitted or "-"
    file: Option<PathBuf>,

    /// Dotted path to print, e.g. db.host or servers.0.name
    #[arg(short, long = "query", value_name = "PATH")]
    queries: Vec<String>,

    /// Output layout for arrays and objects
    #[arg(short = 't', long = "to", value_enum, default_value_t = Layout::Pretty)]
    to: Layout,

    /// Reject unterminated strings and content after the top-level value
    #[arg(long)]
    strict: bool,

    /// Only check that the document parses
    #[arg(long)]
    check: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Compact,
    Pretty,
}

impl From<Layout> for Format {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Compact => Format::Compact,
            Layout::Pretty => Format::Pretty,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let input_path = cli.file.as_ref().filter(|p| p.as_os_str() != "-");

    let input = match read_input(input_path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let filename = input_path.map(|p| p.to_string_lossy().to_string());
    let mut ctx = ParseContext::new(filename.as_deref());
    if cli.strict {
        ctx = ctx.strict();
    }

    let doc = match parse_with_context(&input, &ctx) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if cli.check {
        println!("ok");
        return 0;
    }

    let format = Format::from(cli.to);
    if cli.queries.is_empty() {
        println!("{}", render(doc.root(), format));
        return 0;
    }

    for query in &cli.queries {
        debug!(query = query.as_str(), "looking up path");
        match doc.path(query) {
            Ok(value) => println!("{}", render(value, format)),
            Err(e) => {
                eprintln!("Error: {}: {}", query, e);
                return 1;
            }
        }
    }
    0
}

fn read_input(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {}", path.display(), e)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("reading stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

/// Strings print raw; everything else through the encoder.
fn render(value: &Value, format: Format) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => encode(other, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from(["jsondoc", "in.json", "-q", "db.host", "-q", "db.port", "-vv"]);
        assert_eq!(cli.file, Some(PathBuf::from("in.json")));
        assert_eq!(cli.queries, vec!["db.host", "db.port"]);
        assert_eq!(cli.to, Layout::Pretty);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.strict);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&Value::from("localhost"), Format::Pretty), "localhost");
        assert_eq!(render(&Value::from(5432), Format::Pretty), "5432");
        let arr = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(render(&arr, Format::Compact), "[1,2]");
    }
}
