use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::{Error, ErrorKind, IndexUrl, html};

/// The default timeout for requests to the index.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The `User-Agent` sent with every request.
const USER_AGENT: &str = concat!("pwi/", env!("CARGO_PKG_VERSION"));

/// A builder for an [`IndexClient`].
#[derive(Debug, Clone)]
pub struct IndexClientBuilder {
    timeout: Duration,
}

impl Default for IndexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<IndexClient, Error> {
        debug!("Using request timeout of {}s", self.timeout.as_secs());
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(ErrorKind::Client)?;
        Ok(IndexClient { client })
    }
}

/// A client for fetching flat index pages.
#[derive(Debug, Clone)]
pub struct IndexClient {
    client: Client,
}

impl IndexClient {
    /// Fetch an index page and return the filenames it lists, in document order.
    ///
    /// The page is requested exactly once. A non-success status or a body that isn't valid UTF-8
    /// is an error; lines that don't list a filename are not.
    #[instrument(skip_all, fields(index = %index))]
    pub async fn extract_wheel_filenames(&self, index: &IndexUrl) -> Result<Vec<String>, Error> {
        let url = index.url()?;

        debug!("Fetching index page: {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| ErrorKind::Request(url.clone(), err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ErrorKind::Status { url, status }.into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ErrorKind::Request(url.clone(), err))?;
        let text = String::from_utf8(bytes.to_vec()).map_err(|err| ErrorKind::Utf8(url.clone(), err))?;

        let filenames = html::extract_filenames(&text);
        debug!("Found {} entries on {url}", filenames.len());
        Ok(filenames)
    }
}
