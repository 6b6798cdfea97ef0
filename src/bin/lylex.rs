//! Command-line interface for lylex
//! Lexes LilyPond files and reports tokens or lexing problems.
//!
//! Usage:
//!   lylex tokens `<path>` [--format `<format>`] [--config `<file>`]  - List the tokens of a file
//!   lylex check `<path>`... [--config `<file>`]                      - Report error tokens and unterminated constructs
//!   lylex words `<category>` [--config `<file>`]                     - Print the vocabulary of a lexicon category
//!
//! Set `LYLEX_LOG` (e.g. `debug`) to see what the lexer is doing on stderr.

use clap::{Arg, ArgAction, ArgMatches, Command};
use lylex::ly::config::{Loader, LylexConfig, OutputFormat};
use lylex::ly::document::LexedDocument;
use lylex::ly::error::LexError;
use lylex::ly::lexicon::Category;
use lylex::ly::token::Capabilities;
use serde::Serialize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let verbose = matches.get_flag("verbose");
    if let Err(e) = init_logger(verbose) {
        eprintln!("Could not set up logging: {}", e);
    }

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(&config, sub),
        Some(("check", sub)) => handle_check_command(&config, sub),
        Some(("words", sub)) => handle_words_command(&config, sub),
        _ => unreachable!("clap requires a subcommand"),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .global(true)
        .help("Configuration file layered over the defaults (default: ./lylex.toml if present)");

    Command::new("lylex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A context-sensitive lexer for LilyPond files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(config_arg)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log lexer activity to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("tokens")
                .about("List the tokens of a file, one per line")
                .arg(Arg::new("path").help("Path to the LilyPond file").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (overrides the configured one)")
                        .value_parser(OutputFormat::NAMES),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report error tokens and unterminated constructs")
                .arg(
                    Arg::new("paths")
                        .help("LilyPond files to check")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("words")
                .about("Print the words of a lexicon category")
                .arg(
                    Arg::new("category")
                        .help("Category name, e.g. `contexts` or `markup-commands-1`")
                        .required(true)
                        .value_parser(Category::ALL.map(Category::name)),
                ),
        )
}

/// Logs go to stderr. `LYLEX_LOG` picks the level; `--verbose` defaults it to debug.
fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let fallback = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    };
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(
            std::env::var("LYLEX_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(fallback),
        )
        .chain(std::io::stderr())
        .apply()
}

fn load_config(matches: &ArgMatches) -> Result<LylexConfig, LexError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("lylex.toml"),
    };
    if let Some(("tokens", sub)) = matches.subcommand() {
        if let Some(format) = sub.get_one::<String>("format") {
            loader = loader.set_override("output.format", format.as_str())?;
        }
    }
    Ok(loader.build()?)
}

fn read_document(config: &LylexConfig, path: &str) -> Result<LexedDocument, LexError> {
    let text = std::fs::read_to_string(path)?;
    let lexer = config.lexer()?;
    Ok(LexedDocument::lex(&lexer, &text))
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    line: usize,
    column: usize,
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capabilities: Vec<&'static str>,
    #[serde(skip)]
    error: bool,
}

fn records(doc: &LexedDocument) -> Vec<TokenRecord<'_>> {
    let mut records = Vec::new();
    for (index, line) in doc.lines().iter().enumerate() {
        for token in line.tokens() {
            records.push(TokenRecord {
                line: index + 1,
                column: line.text()[..token.position].chars().count() + 1,
                kind: token.kind.name(),
                text: token.text,
                capabilities: token.capabilities().names(),
                error: token.capabilities().contains(Capabilities::ERROR),
            });
        }
    }
    records
}

/// Handle the tokens command
fn handle_tokens_command(config: &LylexConfig, matches: &ArgMatches) -> Result<ExitCode, LexError> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let doc = read_document(config, path)?;
    let records = records(&doc);

    let formatted = match config.output.format {
        OutputFormat::Text => records
            .iter()
            .map(|r| format!("{}:{}\t{}\t{:?}\n", r.line, r.column, r.kind, r.text))
            .collect::<String>(),
        OutputFormat::Json => serde_json::to_string_pretty(&records)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(&records)?,
    };
    print!("{}", formatted);

    if doc.is_unterminated() {
        eprintln!("{}: input ends inside {}", path, doc.final_stack());
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the check command
fn handle_check_command(config: &LylexConfig, matches: &ArgMatches) -> Result<ExitCode, LexError> {
    let mut clean = true;
    for path in matches.get_many::<String>("paths").into_iter().flatten() {
        let doc = read_document(config, path)?;
        for record in records(&doc) {
            if record.error {
                clean = false;
                println!(
                    "{}:{}:{}: unexpected {:?} ({})",
                    path, record.line, record.column, record.text, record.kind
                );
            }
        }
        if doc.is_unterminated() {
            clean = false;
            println!("{}: unterminated construct, input ends inside {}", path, doc.final_stack());
        }
    }
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Handle the words command
fn handle_words_command(config: &LylexConfig, matches: &ArgMatches) -> Result<ExitCode, LexError> {
    let category: Category = matches
        .get_one::<String>("category")
        .expect("category is a required argument")
        .parse()?;
    let lexer = config.lexer()?;
    for word in lexer.lexicon().lookup(category) {
        println!("{}", word);
    }
    Ok(ExitCode::SUCCESS)
}
