use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use thiserror::Error;
use url::Url;

use crate::{Error, ErrorKind};

/// The base URL of the PyTorch wheel index.
pub const PYTORCH_INDEX_URL: &str = "https://download.pytorch.org/whl/";

/// The page on the PyTorch wheel index that lists every stable wheel.
pub const PYTORCH_INDEX_PAGE: &str = "torch_stable.html";

static PYTORCH_INDEX: LazyLock<IndexUrl> = LazyLock::new(|| IndexUrl {
    base: Url::parse(PYTORCH_INDEX_URL).unwrap(),
    page: PYTORCH_INDEX_PAGE.to_string(),
});

#[derive(Debug, Error)]
pub enum IndexUrlError {
    #[error("The index URL `{0}` cannot be used as a base URL")]
    CannotBeABase(Url),
}

/// The location of a flat index page: a base URL and the name of the page beneath it.
///
/// The page itself is fetched from the base URL joined with the page. Wheel URLs listed on the
/// page are resolved against the base URL alone, so the base URL should typically end in a slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexUrl {
    base: Url,
    page: String,
}

impl IndexUrl {
    pub fn new(base: Url, page: impl Into<String>) -> Result<Self, IndexUrlError> {
        if base.cannot_be_a_base() {
            return Err(IndexUrlError::CannotBeABase(base));
        }
        Ok(Self {
            base,
            page: page.into(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Return the URL of the index page itself.
    pub fn url(&self) -> Result<Url, Error> {
        self.base.join(&self.page).map_err(|err| {
            ErrorKind::UrlJoin {
                base: self.base.clone(),
                page: self.page.clone(),
                err,
            }
            .into()
        })
    }
}

impl Default for IndexUrl {
    fn default() -> Self {
        PYTORCH_INDEX.clone()
    }
}

impl Display for IndexUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.page)
    }
}
