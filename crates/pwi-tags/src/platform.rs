use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The operating system a wheel targets.
///
/// Wheel platform tags are far more specific than what we select on (e.g.,
/// `manylinux2014_aarch64` or `macosx_10_9_x86_64`), so they are reduced to the operating system
/// family alone.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Platform {
    /// No platform, or one that could not be recognized (e.g., `any`). Matches every platform.
    #[default]
    Unset,
    /// Ex) `linux_x86_64`, `manylinux1_x86_64`, `Linux`
    Linux,
    /// Ex) `win_amd64`, `Windows`
    Windows,
    /// Ex) `macosx_10_9_x86_64`, `Darwin`
    Macos,
}

impl Platform {
    /// Parse a [`Platform`] from any string describing an operating system, be it a wheel
    /// platform tag or the name of the host system.
    pub fn parse(platform: &str) -> Self {
        let platform = platform.to_ascii_lowercase();
        if platform.contains("linux") {
            Self::Linux
        } else if platform.starts_with("win") {
            Self::Windows
        } else if platform == "darwin" || platform == "macos" || platform.starts_with("macosx") {
            Self::Macos
        } else {
            Self::Unset
        }
    }

    /// Returns `true` if the two platforms are compatible.
    ///
    /// [`Platform::Unset`] on either side matches anything; otherwise, the operating systems must
    /// be identical.
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unset, _) | (_, Self::Unset) => true,
            _ => self == other,
        }
    }

    /// Returns `true` if this is the [`Platform::Unset`] wildcard.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "any"),
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
            Self::Macos => write!(f, "macos"),
        }
    }
}
