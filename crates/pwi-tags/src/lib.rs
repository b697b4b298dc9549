//! Constraint value types for selecting a PyTorch wheel.
//!
//! Each type parses a raw tag into a canonical form and exposes a `matches` relation in which an
//! unset value acts as a wildcard. The relation is reflexive and symmetric, but not transitive,
//! which is why it is not expressed through [`PartialEq`].

pub use backend::Backend;
pub use language::{Language, LanguageParseError};
pub use platform::Platform;

mod backend;
mod language;
mod platform;
