//! pinecheck: Basic Pine Script pre-check for quotes, comments and brackets.
//!
//! Usage:
//!   pinecheck [options] [path...]
//!
//! Each path is a file or a directory to search for `.pine` files. With no
//! paths the current directory is searched. Diagnostics go to stdout as
//! `<path>:<line>:<col>: error: <message>`; everything else goes to stderr.

use clap::Parser as ClapParser;
use pinecheck_options::load_options;
use pinecheck_program::{CheckReport, ExitStatus, Program};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(ClapParser, Debug)]
#[command(
    name = "pinecheck",
    version,
    about = "Basic Pine Script pre-check: quotes, comments, and brackets."
)]
struct Cli {
    /// Files or directories to scan.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Path to a pinecheck.json configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of files to scan in parallel.
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Print every file that will be checked.
    #[arg(long = "list-files")]
    list_files: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const PASSED_MESSAGE: &str = "Pine pre-check passed.";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let status = run(&cli);
    process::exit(status.code());
}

/// Logs go to stderr so stdout carries only diagnostics. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(atty_is_terminal())
        .with_target(false);

    if let Err(e) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        eprintln!("warning: failed to initialize logging: {}", e);
    }
}

fn run(cli: &Cli) -> ExitStatus {
    let mut options = match load_options(cli.config.as_deref(), Path::new(".")) {
        Ok(options) => options,
        Err(e) => {
            print_error(&e.to_string());
            return ExitStatus::Fatal;
        }
    };
    if cli.jobs.is_some() {
        options.jobs = cli.jobs;
    }
    tracing::debug!(?options, "resolved options");

    let program = Program::discover(&cli.paths, options);
    if program.is_empty() {
        eprintln!("No {} files found.", program.options.primary_extension());
        return ExitStatus::Failure;
    }

    if cli.list_files {
        for file in program.file_names() {
            eprintln!("{}", file.display());
        }
    }

    let report = match program.check() {
        Ok(report) => report,
        Err(e) => {
            print_error(&e.to_string());
            return ExitStatus::Fatal;
        }
    };

    for err in &report.load_errors {
        print_error(&err.to_string());
    }

    let stdout = io::stdout();
    if let Err(e) = print_report(&report, &mut stdout.lock()) {
        tracing::debug!(error = %e, "stdout closed while printing");
        return ExitStatus::Fatal;
    }

    report.exit_status()
}

/// Print diagnostics in order, or the success line when the run is clean.
fn print_report(report: &CheckReport, out: &mut impl Write) -> io::Result<()> {
    for diag in &report.diagnostics {
        writeln!(out, "{}", diag)?;
    }
    if !report.has_errors() {
        writeln!(out, "{}", PASSED_MESSAGE)?;
    }
    out.flush()
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinecheck_options::CheckOptions;

    fn report_for(sources: &[(&str, &str)]) -> CheckReport {
        let mut program = Program::new(CheckOptions::default());
        for (path, text) in sources {
            program.add_source(*path, *text);
        }
        program.check().unwrap()
    }

    fn printed(report: &CheckReport) -> String {
        let mut buf = Vec::new();
        print_report(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_clean_report() {
        let report = report_for(&[("a.pine", "x = (1)")]);
        assert_eq!(printed(&report), "Pine pre-check passed.\n");
    }

    #[test]
    fn test_print_diagnostics_without_success_line() {
        let report = report_for(&[("a.pine", "([)]")]);
        assert_eq!(
            printed(&report),
            "a.pine:1:3: error: Mismatched closing ')', expected ']' for '[' opened at 1:2\n\
             a.pine:1:4: error: Mismatched closing ']', expected ')' for '(' opened at 1:1\n"
        );
    }

    #[test]
    fn test_cli_parses_paths_and_flags() {
        let cli = Cli::try_parse_from(["pinecheck", "-j", "2", "--list-files", "a.pine", "src"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a.pine"), PathBuf::from("src")]);
        assert_eq!(cli.jobs, Some(2));
        assert!(cli.list_files);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }
}
