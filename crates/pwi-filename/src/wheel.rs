use std::str::FromStr;

use thiserror::Error;
use tracing::trace;
use url::Url;

use pwi_tags::{Backend, Language, Platform};

use crate::{WheelFilename, WheelFilenameError};

/// A wheel available on the PyTorch index, along with the URL it can be downloaded from.
///
/// A [`Wheel`] is only ever created from a filename on an index page, and is immutable
/// thereafter.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Wheel {
    distribution: String,
    version: String,
    backend: Backend,
    language: Language,
    platform: Platform,
    url: Url,
}

impl Wheel {
    /// Parse a [`Wheel`] from a filename, as it appears on the index page located at `base`.
    pub fn from_filename(filename: &str, base: &Url) -> Result<Self, WheelError> {
        let WheelFilename {
            distribution,
            version,
            backend,
            language,
            platform,
        } = WheelFilename::from_str(filename)?;
        let url = base
            .join(filename)
            .map_err(|err| WheelError::Url(filename.to_string(), err))?;
        Ok(Self {
            distribution,
            version,
            backend,
            language,
            platform,
            url,
        })
    }

    /// The distribution name, e.g., `torchvision`.
    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    /// The version, as written in the filename, e.g., `1.10.0` or `0.4.1.post2`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The download URL, resolved against the index page.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Error, Debug)]
pub enum WheelError {
    #[error(transparent)]
    Filename(#[from] WheelFilenameError),
    #[error("Failed to resolve the URL of \"{0}\"")]
    Url(String, #[source] url::ParseError),
}

/// Parse every recognized wheel out of the filenames listed on an index page.
///
/// Filenames that don't describe a PyTorch wheel are skipped, as are filenames with a language
/// tag that can't be parsed. The order of the input is preserved.
pub fn parse_wheel_filenames<I, S>(filenames: I, base: &Url) -> Vec<Wheel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filenames
        .into_iter()
        .filter_map(|filename| {
            let filename = filename.as_ref();
            match Wheel::from_filename(filename, base) {
                Ok(wheel) => Some(wheel),
                Err(err) => {
                    trace!("Skipping `{filename}`: {err}");
                    None
                }
            }
        })
        .collect()
}
