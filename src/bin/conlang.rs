//! Command-line interface for conlang
//!
//! Usage:
//!   conlang parse `<path>` [--format `<format>`] [--max-depth `<n>`]  - Print the AST
//!   conlang tokens `<path>` [--json]                              - Print the token stream
//!   conlang check `<path>`                                        - Validate only
//!   conlang repl [--format `<format>`]                            - Read sentences from stdin
//!   conlang formats                                             - List output formats
//!
//! A path of `-` reads standard input. Settings come from the built-in
//! defaults, then `./conlang.toml` if present, then `--config`, then flags.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conlang::conlang::config::{ConlangConfig, Loader, USER_CONFIG_FILE};
use conlang::conlang::formats::{FormatRegistry, TreevizFormatter};
use conlang::conlang::parsing::parse_document_with;
use conlang::conlang::processor::{
    available_formats, process_source_with, ProcessOptions, ProcessingSpec,
};
use conlang::conlang::repl;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "conlang", version, about = "Parse and inspect conlang notation")]
struct Cli {
    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log parser activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a file and print its AST
    Parse {
        /// File to parse, or - for stdin
        path: PathBuf,
        /// Output format (see `conlang formats`)
        #[arg(short, long)]
        format: Option<String>,
        /// Deepest allowed nesting of values
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print the token stream of a file
    Tokens {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Check that a file parses; prints the error location on failure
    Check {
        path: PathBuf,
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Read sentences line by line from stdin and print each as it completes
    Repl {
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List available output formats
    Formats,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: Option<&Path>, max_depth: Option<usize>) -> Result<ConlangConfig> {
    let mut loader = Loader::new().with_optional_file(USER_CONFIG_FILE);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(max_depth) = max_depth {
        loader = loader.set_override("parser.max_depth", max_depth as i64)?;
    }
    loader.build().context("failed to load configuration")
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        return Ok(source);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Parse {
            path,
            format,
            max_depth,
        } => {
            let config = load_config(cli.config.as_deref(), max_depth)?;
            let format = format.unwrap_or_else(|| config.output.format.clone());
            let spec = ProcessingSpec::ast(&format)?;
            let source = read_input(&path)?;
            debug!("parsing {} as {}", path.display(), spec.as_string());
            let output = process_source_with(&source, &spec, &ProcessOptions::from(&config))
                .with_context(|| format!("failed to parse {}", path.display()))?;
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Commands::Tokens { path, json } => {
            let spec = ProcessingSpec::from_string(if json { "token-json" } else { "token-simple" })?;
            let source = read_input(&path)?;
            let output = process_source_with(&source, &spec, &ProcessOptions::default())?;
            println!("{}", output.trim_end());
        }
        Commands::Check { path, max_depth } => {
            let config = load_config(cli.config.as_deref(), max_depth)?;
            let source = read_input(&path)?;
            if let Err(error) = parse_document_with(&source, &config.parser_options()) {
                eprintln!("{}:{}", path.display(), error.render(&source));
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Repl { format } => {
            let config = load_config(cli.config.as_deref(), None)?;
            let format = format.unwrap_or_else(|| config.output.format.clone());
            let mut registry = FormatRegistry::with_defaults();
            registry.register(TreevizFormatter::with_truncate(config.output.truncate));
            let formatter = registry
                .get(&format)
                .with_context(|| format!("unknown format '{}'", format))?;
            let stdin = io::stdin();
            repl::run(stdin.lock(), io::stdout(), formatter, config.parser_options())?;
        }
        Commands::Formats => {
            let registry = FormatRegistry::with_defaults();
            println!("Document formats (parse --format, repl --format):");
            for (name, description) in registry.describe_formats() {
                println!("  {:<10} {}", name, description);
            }
            println!("Processing specs:");
            for spec in available_formats() {
                println!("  {}", spec);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
