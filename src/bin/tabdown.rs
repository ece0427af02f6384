//! Command-line interface for tabdown
//! This binary lexes or parses tabdown files and prints the result in one of the output formats.
//!
//! Usage:
//!   tabdown lex `<path>` [--format simple|json|yaml]               - Print the token stream
//!   tabdown parse `<path>` [--format treeviz|source|json|yaml]     - Print the parsed tree
//!
//! `<path>` may be `-` to read standard input. Shared options: --indent `<unit|auto>`,
//! --blank-lines, --config `<yaml>`, -v. Logging goes to stderr and honours TABDOWN_LOG.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use std::path::Path;
use tabdown::tabdown::formats::{format_document, format_tokens, OutputFormat};
use tabdown::{lex, LexerConfig, Parser};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("tabdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex and parse indentation-structured tabdown outlines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log lexer and parser events to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            with_shared_args(Command::new("lex").about("Print the token stream")).arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .help("Output format: simple, json or yaml")
                    .default_value("simple"),
            ),
        )
        .subcommand(
            with_shared_args(Command::new("parse").about("Print the parsed tree")).arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .help("Output format: treeviz, source, json or yaml")
                    .default_value("treeviz"),
            ),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("lex", sub)) => handle_lex_command(sub),
        Some(("parse", sub)) => handle_parse_command(sub),
        _ => unreachable!(),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    }
}

fn with_shared_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("path")
                .help("Path to the tabdown file, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .short('i')
                .help("Indent unit (e.g. '  ' or '\\t'), or 'auto' to detect it"),
        )
        .arg(
            Arg::new("blank-lines")
                .long("blank-lines")
                .short('b')
                .help("Keep blank lines as empty content")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("YAML configuration file; flags override it"),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tabdown=debug")
    } else {
        EnvFilter::try_from_env("TABDOWN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the lex command
fn handle_lex_command(matches: &ArgMatches) -> Result<String, String> {
    let format = output_format(matches)?;
    let config = load_config(matches)?;
    let source = read_source(required(matches, "path")?)?;
    let tokens = lex(&source, &config).map_err(|e| e.to_string())?;
    format_tokens(&tokens, format).map_err(|e| e.to_string())
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<String, String> {
    let format = output_format(matches)?;
    let config = load_config(matches)?;
    let source = read_source(required(matches, "path")?)?;
    let document = Parser::new(config)
        .parse(&source)
        .map_err(|e| e.to_string())?;
    format_document(&document, format).map_err(|e| e.to_string())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("missing argument <{name}>"))
}

fn output_format(matches: &ArgMatches) -> Result<OutputFormat, String> {
    required(matches, "format")?
        .parse()
        .map_err(|e: tabdown::tabdown::formats::FormatError| e.to_string())
}

fn load_config(matches: &ArgMatches) -> Result<LexerConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read config {path}: {e}"))?;
            LexerConfig::from_yaml_str(&yaml).map_err(|e| format!("invalid config {path}: {e}"))?
        }
        None => LexerConfig::default(),
    };

    if let Some(indent) = matches.get_one::<String>("indent") {
        config = config
            .with_indent(&unescape(indent))
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("blank-lines") {
        config = config.with_blank_lines(true);
    }
    tracing::debug!(indent = %config.indent, blank_lines = config.emit_blank_lines, "configuration");
    Ok(config)
}

/// Expand the `\t` and `\s` escapes accepted by --indent.
fn unescape(value: &str) -> String {
    value.replace("\\t", "\t").replace("\\s", " ")
}

fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        return Ok(source);
    }
    std::fs::read_to_string(Path::new(path)).map_err(|e| format!("cannot read {path}: {e}"))
}
