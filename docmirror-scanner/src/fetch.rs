use crate::error::Result;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const USER_AGENT: &str = concat!("docmirror/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Bytes,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport capability used by the crawler.
///
/// A returned `Err` means the transport itself failed and aborts the run;
/// HTTP error statuses come back as an `Ok` response.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchResponse>> + Send;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// No timeout unless one is given: a hung request stalls the run.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(5));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Error bodies are never decoded
        let body = if status.is_success() {
            response.bytes().await?
        } else {
            Bytes::new()
        };

        Ok(FetchResponse {
            status: status.as_u16(),
            body,
        })
    }
}
