use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use docmirror_core::crawl::{MirrorOptions, MirrorProgressCallback, execute_mirror};
use docmirror_core::report::{ReportFormat, render_report};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

// Helper functions for the mirror handler

/// Validate the base URL and drop trailing slashes, since reference urls start with one
pub fn parse_base_url(url: &Url) -> Result<String> {
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported scheme '{}' in base URL {}", other, url),
    }
    if url.query().is_some() || url.fragment().is_some() {
        bail!("Base URL {} must not carry a query or fragment", url);
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Ensure the start path begins with a single '/'
pub fn normalize_start_path(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Expand a leading '~' in the output directory
pub fn resolve_output_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).as_ref())
}

pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).with_context(|| format!("Failed to write report to {}", path.display()))
}

/// Assemble mirror options from already-parsed command line values
pub fn mirror_options(
    base_url: &Url,
    start_path: &str,
    domain_filter: &str,
    output_dir: &str,
    timeout_secs: Option<u64>,
    show_progress_bars: bool,
) -> Result<MirrorOptions> {
    if domain_filter.is_empty() {
        bail!("The domain filter must not be empty");
    }

    Ok(MirrorOptions {
        base_url: parse_base_url(base_url)?,
        start_path: normalize_start_path(start_path),
        domain_filter: domain_filter.to_string(),
        output_dir: resolve_output_dir(output_dir),
        timeout: timeout_secs.map(Duration::from_secs),
        show_progress_bars,
    })
}

fn mirror_options_from_args(args: &ArgMatches) -> Result<MirrorOptions> {
    let base_url = args
        .get_one::<Url>("base-url")
        .context("--base-url is required")?;
    let start_path = args
        .get_one::<String>("start-path")
        .context("--start-path is required")?;
    let filter = args
        .get_one::<String>("filter")
        .context("--filter is required")?;
    let output = args
        .get_one::<String>("output")
        .context("--output is required")?;
    let timeout = args.get_one::<u64>("timeout").copied();
    let quiet = args.get_flag("quiet");

    mirror_options(base_url, start_path, filter, output, timeout, !quiet)
}

/// Log to stderr so the report on stdout stays clean. RUST_LOG overrides the level.
///
/// Returns false when a global subscriber was already installed; the existing one keeps logging.
pub fn init_tracing(quiet: bool) -> bool {
    let default_level = if quiet { "warn" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            eprintln!("⚠️  Logging not initialized: {}", e);
            false
        }
    }
}

pub fn print_banner() {
    println!(
        "{} {}",
        "docmirror".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!();
}

pub async fn handle_mirror(args: &ArgMatches) -> Result<()> {
    let quiet = args.get_flag("quiet");
    let options = mirror_options_from_args(args)?;
    let format: ReportFormat = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text")
        .parse()
        .map_err(anyhow::Error::msg)?;
    let report_file = args.get_one::<PathBuf>("report-file");

    if !quiet {
        println!("Start URL: {}", options.start_url());
        println!("Domain filter: {}", options.domain_filter);
        println!("Output: {}\n", options.output_dir.display());
    }

    let progress_callback: Option<MirrorProgressCallback> = if quiet {
        None
    } else {
        Some(Arc::new(|msg: String| {
            println!("{}", msg);
        }))
    };

    let output_dir = options.output_dir.clone();
    let summary = execute_mirror(options, progress_callback)
        .await
        .with_context(|| format!("Mirror into {} aborted", output_dir.display()))?;

    let report = render_report(&summary, format).context("Failed to render report")?;
    match report_file {
        Some(path) => {
            write_report(path, &report)?;
            if !quiet {
                println!("{} Report saved to {}", "✓".green().bold(), path.display());
            }
        }
        None if !quiet => print!("{}", report),
        None => {}
    }

    Ok(())
}
