use thiserror::Error;
use tracing::debug;
use url::Url;

use pwi_client::{IndexClient, IndexUrl};
use pwi_filename::parse_wheel_filenames;
use pwi_tags::{Backend, Language, Platform};

use crate::{SelectionError, select_wheel};

#[derive(Debug, Error)]
pub enum FindLinksError {
    #[error("Failed to read the wheel index at `{0}`")]
    Index(IndexUrl, #[source] pwi_client::Error),

    #[error("No matching wheel for `{0}`")]
    Selection(String, #[source] SelectionError),
}

/// Find the download URL of the best wheel for each requested distribution.
///
/// The index page is fetched and parsed once; the URLs are returned in the order in which the
/// distributions were requested.
pub async fn find_links<S: AsRef<str>>(
    client: &IndexClient,
    index: &IndexUrl,
    distributions: &[S],
    backend: &Backend,
    language: &Language,
    platform: &Platform,
) -> Result<Vec<Url>, FindLinksError> {
    let filenames = client
        .extract_wheel_filenames(index)
        .await
        .map_err(|err| FindLinksError::Index(index.clone(), err))?;
    let wheels = parse_wheel_filenames(&filenames, index.base());
    debug!(
        "Parsed {} wheels from {} entries on {index}",
        wheels.len(),
        filenames.len()
    );

    distributions
        .iter()
        .map(|distribution| {
            let distribution = distribution.as_ref();
            select_wheel(&wheels, distribution, backend, language, platform)
                .map(|wheel| wheel.url().clone())
                .map_err(|err| FindLinksError::Selection(distribution.to_string(), err))
        })
        .collect()
}
