// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::debug;

use notice_check::output::{self, FAILURE_LINE, SUCCESS_LINE};
use notice_check::{CheckConfig, CheckReport, check};

/// Exit status when every candidate carries its notice.
const EXIT_OK: i32 = 0;
/// Exit status when one or more candidates are misformatted.
const EXIT_VIOLATIONS: i32 = 1;
/// Exit status when the run could not complete.
const EXIT_FATAL: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Check that source files start with the project's copyright notice.
#[derive(Debug, Parser)]
#[command(name = "notice-check", version, about)]
struct Cli {
    /// Project root; all other paths are relative to it.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory to scan recursively (repeatable; replaces the defaults).
    #[arg(long = "include-dir", value_name = "DIR")]
    include_dirs: Vec<PathBuf>,

    /// Individual file to check if present (repeatable; replaces the defaults).
    #[arg(long = "include-file", value_name = "FILE")]
    include_files: Vec<PathBuf>,

    /// Glob of root-relative paths to skip (repeatable; replaces the defaults).
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Follow symbolic links while scanning directories.
    #[arg(long)]
    follow_links: bool,

    /// Maximum directory traversal depth.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_config(&self) -> CheckConfig {
        let mut config = CheckConfig::with_root(self.root.clone());
        if !self.include_dirs.is_empty() {
            config.include_dirs.clone_from(&self.include_dirs);
        }
        if !self.include_files.is_empty() {
            config.include_files.clone_from(&self.include_files);
        }
        if !self.exclude.is_empty() {
            config.exclude.clone_from(&self.exclude);
        }
        config.follow_links = self.follow_links;
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        config
    }
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Fails only if a global subscriber is already installed; keep that one.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn run(cli: &Cli) -> Result<i32> {
    let config = cli.to_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let report = match cli.format {
        OutputFormat::Human => {
            let mut progress_err = None;
            let report = check(&config, |path| {
                if progress_err.is_none()
                    && let Err(e) = output::write_progress(path, &mut out)
                {
                    progress_err = Some(e);
                }
            })?;
            if let Some(e) = progress_err {
                return Err(e);
            }
            write_summary(&report, &mut out)?;
            if !report.ok {
                output::write_hints(&report, &mut std::io::stderr().lock())?;
            }
            report
        }
        OutputFormat::Json => {
            let report = check(&config, |_| {})?;
            output::write_json(&report, &mut out)?;
            report
        }
    };
    out.flush()?;

    Ok(if report.ok { EXIT_OK } else { EXIT_VIOLATIONS })
}

/// Human summary, coloured when stdout is a terminal.
fn write_summary(report: &CheckReport, out: &mut dyn Write) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return output::write_human(report, out);
    }

    if report.ok {
        writeln!(out, "{}", SUCCESS_LINE.green().bold())?;
    } else {
        writeln!(out, "{}", FAILURE_LINE.red().bold())?;
        for path in report.violation_paths() {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_FATAL);
        }
    }
}
