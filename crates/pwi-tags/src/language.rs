use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The Python language version a wheel targets.
///
/// This is the first tag following the version in a wheel filename, e.g., `cp38` in
/// `torch-1.10.0-cp38-cp38-linux_x86_64.whl`. Both the generic `py` and the CPython-specific `cp`
/// prefixes are accepted, and both are reduced to the major and (optional) minor version.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Language {
    major: u8,
    minor: Option<u8>,
}

impl Language {
    /// Create a [`Language`] from its version components.
    pub const fn new(major: u8, minor: Option<u8>) -> Self {
        Self { major, minor }
    }

    /// Returns `true` if the two language versions are compatible.
    ///
    /// The major versions must be identical. The minor versions must be identical too, unless
    /// either side omits it (e.g., `py3` matches `cp38`).
    pub fn matches(&self, other: &Self) -> bool {
        if self.major != other.major {
            return false;
        }
        match (self.minor, other.minor) {
            (Some(minor), Some(other)) => minor == other,
            _ => true,
        }
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    /// Parse a [`Language`] from a tag like `py3`, `py38`, or `cp310`.
    ///
    /// The first digit is the major version; any remaining digits form the minor version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = s
            .strip_prefix("py")
            .or_else(|| s.strip_prefix("cp"))
            .ok_or_else(|| LanguageParseError::UnknownFormat(s.to_string()))?;

        let major = version
            .as_bytes()
            .first()
            .and_then(|byte| byte.checked_sub(b'0'))
            .filter(|digit| *digit < 10)
            .ok_or_else(|| LanguageParseError::InvalidMajorVersion(s.to_string()))?;

        let minor = match version.get(1..) {
            None | Some("") => None,
            Some(minor) => {
                if !minor.bytes().all(|byte| byte.is_ascii_digit()) {
                    return Err(LanguageParseError::InvalidMinorVersion(s.to_string()));
                }
                Some(
                    minor
                        .parse::<u8>()
                        .map_err(|_| LanguageParseError::InvalidMinorVersion(s.to_string()))?,
                )
            }
        };

        Ok(Self { major, minor })
    }
}

/// Displays the generic `py` tag form, which [`Language::from_str`] accepts back.
impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "py{}{minor}", self.major),
            None => write!(f, "py{}", self.major),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LanguageParseError {
    #[error("Unknown language tag format (expected `py` or `cp` followed by a version): `{0}`")]
    UnknownFormat(String),
    #[error("Invalid major version in language tag: `{0}`")]
    InvalidMajorVersion(String),
    #[error("Invalid minor version in language tag: `{0}`")]
    InvalidMinorVersion(String),
}
