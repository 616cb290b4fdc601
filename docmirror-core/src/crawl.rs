use docmirror_scanner::{Crawler, FsStore, HttpFetcher, MirrorSummary, ProgressCallback, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

pub const DEFAULT_BASE_URL: &str = "https://developer.apple.com/tutorials/data";
pub const DEFAULT_START_PATH: &str = "/documentation/devicemanagement.json";
pub const DEFAULT_DOMAIN_FILTER: &str = "devicemanagement";

/// Options for configuring a mirror run
#[derive(Debug, Clone)]
pub struct MirrorOptions {
    /// Prefix for the start path and for every reference url
    pub base_url: String,
    pub start_path: String,
    /// Only URLs containing this substring are fetched
    pub domain_filter: String,
    pub output_dir: PathBuf,
    pub timeout: Option<Duration>,
    pub show_progress_bars: bool,
}

impl MirrorOptions {
    pub fn start_url(&self) -> String {
        format!("{}{}", self.base_url, self.start_path)
    }
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_path: DEFAULT_START_PATH.to_string(),
            domain_filter: DEFAULT_DOMAIN_FILTER.to_string(),
            output_dir: PathBuf::from("."),
            timeout: None,
            show_progress_bars: false,
        }
    }
}

/// Callback for reporting mirror progress
pub type MirrorProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Run one mirror from `options.start_url()` into `options.output_dir`.
pub async fn execute_mirror(
    options: MirrorOptions,
    progress_callback: Option<MirrorProgressCallback>,
) -> Result<MirrorSummary> {
    let start_url = options.start_url();
    let MirrorOptions {
        base_url,
        domain_filter,
        output_dir,
        timeout,
        show_progress_bars,
        ..
    } = options;

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Starting mirror...");
        Some(pb)
    } else {
        None
    };

    let mut crawler = Crawler::new(
        HttpFetcher::with_timeout(timeout)?,
        FsStore::new(output_dir),
        base_url,
        domain_filter,
    );

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        let internal_progress_callback: ProgressCallback =
            Arc::new(move |count: usize, url: String| {
                pb_clone.set_message(format!("[{}] {}", count, url));
                pb_clone.tick();
            });
        crawler = crawler.with_progress_callback(internal_progress_callback);
    }

    if let Some(ref callback) = progress_callback {
        callback(format!("Mirroring {}", start_url));
    }

    let result = crawler.run(&start_url).await;

    match (&result, &progress_bar) {
        (Ok(summary), Some(pb)) => pb.finish_with_message(format!(
            "Mirror complete! {} URLs fetched, {} documents written",
            summary.fetched.len(),
            summary.written.len()
        )),
        (Err(e), Some(pb)) => pb.abandon_with_message(format!("Mirror aborted: {}", e)),
        _ => {}
    }
    if let Err(ref e) = result {
        error!("Mirror of {} aborted: {}", start_url, e);
    }

    result
}
