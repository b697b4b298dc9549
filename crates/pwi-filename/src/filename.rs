use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use pwi_tags::{Backend, Language, LanguageParseError, Platform};

/// The distributions published to the PyTorch wheel index.
///
/// All of them share a single index page, so the core `torch` distribution and its companion
/// packages are parsed by the same pattern.
pub const DISTRIBUTIONS: [&str; 4] = ["torch", "torchvision", "torchaudio", "torchtext"];

/// The structure of a wheel filename on the PyTorch index, e.g.,
/// `cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl`.
///
/// The `%2B<backend>` local version suffix is matched, but not captured: the leading path segment
/// is the only source of the backend.
static WHEEL_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    let distributions = DISTRIBUTIONS.map(regex::escape).join("|");
    Regex::new(&format!(
        concat!(
            r"^",
            r"((?P<backend>cpu|cu\d+)/)?",
            r"(?P<distribution>{distributions})-",
            r"(?P<version>\d+\.\d+(\.\d+)?(\.post\d+)?)(%2B(cpu|cu\d+))?-",
            r"(?P<language>\w+)-\w+-",
            r"(?P<platform>\w+)",
            r"\.whl$",
        ),
        distributions = distributions
    ))
    .unwrap()
});

/// A parsed wheel filename from the PyTorch index.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WheelFilename {
    pub distribution: String,
    pub version: String,
    pub backend: Backend,
    pub language: Language,
    pub platform: Platform,
}

impl FromStr for WheelFilename {
    type Err = WheelFilenameError;

    fn from_str(filename: &str) -> Result<Self, Self::Err> {
        let captures = WHEEL_FILENAME
            .captures(filename)
            .ok_or_else(|| WheelFilenameError::UnknownFormat(filename.to_string()))?;

        let backend = captures
            .name("backend")
            .map_or(Backend::Unset, |backend| Backend::parse(backend.as_str()));
        let distribution = captures["distribution"].to_string();
        let version = captures["version"].to_string();
        let language = Language::from_str(&captures["language"])
            .map_err(|err| WheelFilenameError::InvalidLanguageTag(filename.to_string(), err))?;
        let platform = Platform::parse(&captures["platform"]);

        Ok(Self {
            distribution,
            version,
            backend,
            language,
            platform,
        })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WheelFilenameError {
    #[error("The wheel filename \"{0}\" does not match the structure of the PyTorch index")]
    UnknownFormat(String),
    #[error("The wheel filename \"{0}\" has an invalid language tag: {1}")]
    InvalidLanguageTag(String, #[source] LanguageParseError),
}
