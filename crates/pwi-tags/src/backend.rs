use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The computation backend a wheel was built against.
///
/// This is the first path segment of a wheel on the PyTorch index, e.g., `cu113` in
/// `cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl`.
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Backend {
    /// No backend, or a tag that could not be recognized. Matches every backend.
    #[default]
    Unset,
    /// Ex) `cpu`
    Cpu,
    /// Ex) `cu113`
    Cuda {
        /// The digits following `cu`, e.g., `113`.
        version: Box<str>,
    },
}

impl Backend {
    /// Parse a [`Backend`] from a raw tag.
    ///
    /// The tag is lowercased before parsing. Anything other than `cpu` or `cu<digits>` yields
    /// [`Backend::Unset`].
    pub fn parse(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        if tag == "cpu" {
            return Self::Cpu;
        }
        if let Some(version) = tag.strip_prefix("cu") {
            if !version.is_empty() && version.bytes().all(|byte| byte.is_ascii_digit()) {
                return Self::Cuda {
                    version: version.into(),
                };
            }
        }
        Self::Unset
    }

    /// Returns `true` if the two backends are compatible.
    ///
    /// [`Backend::Unset`] on either side matches anything; otherwise, the canonical tags must be
    /// identical.
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unset, _) | (_, Self::Unset) => true,
            _ => self == other,
        }
    }

    /// Returns `true` if this is the [`Backend::Unset`] wildcard.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl FromStr for Backend {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "any"),
            Self::Cpu => write!(f, "cpu"),
            Self::Cuda { version } => write!(f, "cu{version}"),
        }
    }
}
