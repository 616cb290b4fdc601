use crate::document::DecodedDocument;
use crate::error::{MirrorError, Result};
use crate::fetch::Fetch;
use crate::identifier::{DocPath, parse_identifier};
use crate::result::{DuplicateDocument, MirrorSummary, SkippedResponse, WrittenDocument};
use crate::store::Persist;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Called before every fetch with the number of URLs visited so far and the URL.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Per-run traversal state. Created by [`Crawler::run`] and dropped when it returns.
struct Traversal {
    queue: VecDeque<String>,
    visited: HashSet<String>,
    /// Output paths already written, relative to the store root.
    written: HashSet<PathBuf>,
    summary: MirrorSummary,
}

impl Traversal {
    fn new(start_url: &str) -> Self {
        Self {
            queue: VecDeque::from([start_url.to_string()]),
            visited: HashSet::new(),
            written: HashSet::new(),
            summary: MirrorSummary::new(start_url.to_string()),
        }
    }
}

pub struct Crawler<F, S> {
    fetcher: F,
    store: S,
    base_url: String,
    domain_filter: String,
    progress_callback: Option<ProgressCallback>,
}

impl<F: Fetch, S: Persist> Crawler<F, S> {
    pub fn new(
        fetcher: F,
        store: S,
        base_url: impl Into<String>,
        domain_filter: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            store,
            base_url: base_url.into(),
            domain_filter: domain_filter.into(),
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a reference's JSON document.
    pub fn reference_url(&self, relative: &str) -> String {
        format!("{}{}.json", self.base_url, relative)
    }

    pub fn is_eligible(&self, url: &str) -> bool {
        url.contains(&self.domain_filter)
    }

    /// Mirror everything reachable from `start_url`.
    ///
    /// Each URL is fetched at most once and each output file written at most
    /// once for the whole run. Non-2xx responses are skipped; any other
    /// failure aborts the run and is returned.
    pub async fn run(&self, start_url: &str) -> Result<MirrorSummary> {
        info!("Starting mirror of {}", start_url);

        let mut traversal = Traversal::new(start_url);
        while let Some(url) = traversal.queue.pop_front() {
            self.visit(&url, &mut traversal).await?;
        }

        let mut summary = traversal.summary;
        summary.finish();
        info!(
            "Mirror complete. Fetched {} URLs, wrote {} documents, skipped {} duplicates",
            summary.fetched.len(),
            summary.written.len(),
            summary.duplicates.len()
        );
        Ok(summary)
    }

    async fn visit(&self, url: &str, traversal: &mut Traversal) -> Result<()> {
        if !self.is_eligible(url) {
            debug!("Skipping {} (outside domain filter)", url);
            traversal.summary.filtered += 1;
            return Ok(());
        }
        if !traversal.visited.insert(url.to_string()) {
            debug!("Skipping {} (already visited)", url);
            return Ok(());
        }
        traversal.summary.fetched.push(url.to_string());

        if let Some(ref callback) = self.progress_callback {
            callback(traversal.visited.len(), url.to_string());
        }

        info!("GET {}", url);
        let response = self.fetcher.fetch(url).await?;
        if !response.is_success() {
            warn!("Got status {} for {}, skipping", response.status, url);
            traversal.summary.non_success.push(SkippedResponse {
                url: url.to_string(),
                status_code: response.status,
            });
            return Ok(());
        }

        let decoded = DecodedDocument::decode(url, &response.body)?;
        let identifier = decoded
            .identifier()
            .ok_or_else(|| MirrorError::MissingIdentifier {
                url: url.to_string(),
            })?;

        // Keyed on the output path: identifiers that parse alike are the same document
        let doc_path = parse_identifier(identifier)?;
        let relative = doc_path.relative_file();
        if traversal.written.contains(&relative) {
            info!("{} has been written before, skipping", identifier);
            traversal.summary.duplicates.push(DuplicateDocument {
                identifier: identifier.to_string(),
                url: url.to_string(),
            });
        } else {
            let written = self.persist(url, identifier, &doc_path, &decoded)?;
            traversal.written.insert(relative);
            traversal.summary.written.push(written);
        }

        for (key, reference) in &decoded.document.references {
            let Some(relative) = reference.url.as_deref() else {
                debug!("Reference {} has no url, not following", key);
                continue;
            };
            let child = self.reference_url(relative);
            if !self.is_eligible(&child) {
                debug!("Not following {} (outside domain filter)", child);
                traversal.summary.filtered += 1;
            } else if !traversal.visited.contains(&child) {
                traversal.queue.push_back(child);
            }
        }

        Ok(())
    }

    fn persist(
        &self,
        url: &str,
        identifier: &str,
        doc_path: &DocPath,
        decoded: &DecodedDocument,
    ) -> Result<WrittenDocument> {
        let contents = decoded
            .pretty_body()
            .map_err(|source| MirrorError::DecodeError {
                url: url.to_string(),
                source,
            })?;

        info!("Writing {} to disk", identifier);
        self.store.ensure_dir(&doc_path.directory)?;
        let path = doc_path.relative_file();
        self.store.write_file(&path, &contents)?;
        info!("Wrote {} to {}", identifier, path.display());

        Ok(WrittenDocument {
            identifier: identifier.to_string(),
            url: url.to_string(),
            path,
        })
    }
}
