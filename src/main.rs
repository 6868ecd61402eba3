//! # Exasol SQL Normalizer
//!
//! Rewrites Exasol-dialect SQL into equivalent standard SQL so that parsers,
//! linters, and query planners that do not understand the dialect's
//! extensions can consume it.
//!
//! The core is a pipeline of five rewrite handlers sharing one quote- and
//! parenthesis-aware scanner. Each handler recognizes exactly one construct
//! and leaves anything ambiguous or malformed untouched — the tool always
//! produces output and never rejects its input.
//!
//! # Handlers
//!
//! Applied in this fixed order; each stage consumes the previous stage's
//! output:
//!
//! | Stage | Rewrites | Into |
//! |-------|----------|------|
//! | `import-into` | `IMPORT INTO (cols) FROM JDBC AT conn [STATEMENT '...']` | `SELECT cols FROM __JDBC_IMPORT__conn` |
//! | `import-from` | `IMPORT FROM JDBC AT conn [STATEMENT '...']` | `SELECT * FROM __JDBC_IMPORT__conn` |
//! | `group-concat` | `GROUP_CONCAT(... SEPARATOR '...')` | `GROUP_CONCAT(...)` |
//! | `convert-charset` | `CONVERT(type charset, expr)` | `CAST(expr AS type)` |
//! | `regexp-like` | `col REGEXP_LIKE(args)` | `REGEXP_LIKE(col, args)` |
//!
//! The order is a correctness requirement: `import-into` must run before
//! `import-from`, and `group-concat` before `convert-charset`.
//!
//! # Quick Start
//!
//! ```bash
//! # Normalize a file to stdout
//! exasol-sql-normalizer normalize query.sql
//!
//! # Stream from stdin
//! cat query.sql | exasol-sql-normalizer normalize -
//!
//! # Rewrite a directory's worth of files in place, verifying the output
//! exasol-sql-normalizer normalize --in-place --check sql/*.sql
//!
//! # Machine-readable per-stage report
//! exasol-sql-normalizer normalize query.sql -f json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. `--config` / `SQL_NORMALIZER_CONFIG`
//! 2. `SQL_NORMALIZER_DISABLED` (comma-separated stage names)
//! 3. `.sql-normalizer.toml` in the current directory
//! 4. `~/.config/sql-normalizer/config.toml`
//!
//! ```toml
//! [handlers]
//! disabled = ["regexp-like"]
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Success
//! - `1` - Runtime error (unreadable input, invalid config, `--check` failure)
//! - `2` - Batch run completed with per-file failures
//!
//! # Modules
//!
//! - [`exasol_sql_normalizer::scan`] - Shared lexical scanning primitives
//! - [`exasol_sql_normalizer::handlers`] - The five construct rewriters
//! - [`exasol_sql_normalizer::normalizer`] - Pipeline orchestration
//! - [`exasol_sql_normalizer::check`] - `--check` parse verification
//! - [`exasol_sql_normalizer::config`] - Configuration loading
//! - [`exasol_sql_normalizer::output`] - Result formatting
//! - [`exasol_sql_normalizer::error`] - Error types and constructors

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process
};

use clap::Parser;
use exasol_sql_normalizer::{
    check,
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, config_error, file_read_error, file_write_error},
    normalizer::{NormalizeResult, Normalizer},
    output::{
        OutputFormat, OutputOptions, format_batch_summary, format_result, format_stage_summary
    }
};
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            inputs,
            output,
            in_place,
            check,
            format,
            config,
            verbose,
            no_color
        } => {
            let config = Config::load(config.as_deref())?;
            let normalizer = Normalizer::with_config(&config.handlers);

            let opts = OutputOptions {
                format: match format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml
                },
                colored: !no_color,
                verbose
            };

            if in_place {
                return run_in_place(&normalizer, &inputs, check, &opts);
            }
            if inputs.len() > 1 {
                return Err(config_error(
                    "multiple inputs require --in-place (or normalize them one at a time)"
                ));
            }
            run_single(&normalizer, &inputs[0], output.as_deref(), check, &opts)
        }
    }
}

fn run_single(
    normalizer: &Normalizer,
    input: &Path,
    output: Option<&Path>,
    check: bool,
    opts: &OutputOptions
) -> AppResult<i32> {
    // Support stdin with "-"
    let sql = if input.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        buffer
    } else {
        fs::read_to_string(input)
            .map_err(|e| file_read_error(&input.display().to_string(), e))?
    };

    let result = normalizer.process(&sql);
    if check {
        check::verify(&result.sql)?;
    }

    let rendered = format_result(&result, opts);
    match output {
        Some(path) => fs::write(path, &rendered)
            .map_err(|e| file_write_error(&path.display().to_string(), e))?,
        None => println!("{}", rendered)
    }

    if opts.verbose {
        eprintln!("{}", format_stage_summary(&result, opts));
    }
    Ok(0)
}

fn run_in_place(
    normalizer: &Normalizer,
    inputs: &[PathBuf],
    check: bool,
    opts: &OutputOptions
) -> AppResult<i32> {
    let pb = ProgressBar::new(inputs.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40.green} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Normalizing files...");

    let outcomes: Vec<(String, AppResult<NormalizeResult>)> = inputs
        .par_iter()
        .map(|path| {
            let outcome = normalize_file(normalizer, path, check);
            pb.inc(1);
            (path.display().to_string(), outcome)
        })
        .collect();
    pb.finish_and_clear();

    let mut entries = IndexMap::new();
    let mut failures = 0;
    for (path, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                entries.insert(path, result);
            }
            Err(e) => {
                eprintln!("{}: {}", path, e);
                failures += 1;
            }
        }
    }

    println!("{}", format_batch_summary(&entries, opts));
    Ok(if failures > 0 { 2 } else { 0 })
}

fn normalize_file(normalizer: &Normalizer, path: &Path, check: bool) -> AppResult<NormalizeResult> {
    let display = path.display().to_string();
    let sql = fs::read_to_string(path).map_err(|e| file_read_error(&display, e))?;

    let result = normalizer.process(&sql);
    if check {
        check::verify(&result.sql)?;
    }
    if result.changed() {
        fs::write(path, &result.sql).map_err(|e| file_write_error(&display, e))?;
    }
    Ok(result)
}
