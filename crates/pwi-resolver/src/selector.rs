use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use pwi_filename::Wheel;
use pwi_tags::{Backend, Language, Platform};

/// A field of a [`Wheel`] that constrains selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    Distribution,
    Backend,
    Language,
    Platform,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Distribution => f.write_str("distribution"),
            Self::Backend => f.write_str("backend"),
            Self::Language => f.write_str("language"),
            Self::Platform => f.write_str("platform"),
        }
    }
}

/// No candidate wheel satisfied the requested value of a [`Field`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "'{requested}' is invalid for attribute '{field}'. Valid values are ({})",
    .valid.iter().join(", ")
)]
pub struct SelectionError {
    /// The field that eliminated every candidate.
    pub field: Field,
    /// The requested value of the field.
    pub requested: String,
    /// The distinct values of the field among the candidates that were still in contention, in
    /// sorted order.
    pub valid: Vec<String>,
}

/// Narrow the candidates to those whose `field` satisfies `predicate`.
///
/// If no candidate remains, the error lists the values held by the candidates that were passed
/// in, so that the user can pick one of them instead.
fn narrow<'a, T: Display>(
    candidates: Vec<&'a Wheel>,
    field: Field,
    requested: &dyn Display,
    value: impl Fn(&'a Wheel) -> T,
    predicate: impl Fn(&T) -> bool,
) -> Result<Vec<&'a Wheel>, SelectionError> {
    let selected = candidates
        .iter()
        .copied()
        .filter(|wheel| predicate(&value(*wheel)))
        .collect::<Vec<_>>();
    if !selected.is_empty() {
        debug!(
            "{} of {} candidates match {field} `{requested}`",
            selected.len(),
            candidates.len()
        );
        return Ok(selected);
    }

    let valid = candidates
        .into_iter()
        .map(|wheel| value(wheel).to_string())
        .collect::<BTreeSet<_>>();
    Err(SelectionError {
        field,
        requested: requested.to_string(),
        valid: valid.into_iter().collect(),
    })
}

/// Select the best wheel for a distribution.
///
/// The candidates are narrowed by distribution, backend, language, and platform, in that order;
/// an unset backend or platform, or a language without a minor version, matches any value. Of the
/// remaining candidates, the one with the greatest version string wins. Versions are compared as
/// raw strings, not as release numbers, so `1.9.0` is greater than `1.10.0`. If several
/// candidates share the greatest version, the last one is returned.
pub fn select_wheel<'a>(
    wheels: &'a [Wheel],
    distribution: &str,
    backend: &Backend,
    language: &Language,
    platform: &Platform,
) -> Result<&'a Wheel, SelectionError> {
    let candidates = wheels.iter().collect::<Vec<_>>();
    let candidates = narrow(
        candidates,
        Field::Distribution,
        &distribution,
        Wheel::distribution,
        |value: &&str| *value == distribution,
    )?;
    let candidates = narrow(
        candidates,
        Field::Backend,
        backend,
        Wheel::backend,
        |value: &&Backend| backend.matches(value),
    )?;
    let candidates = narrow(
        candidates,
        Field::Language,
        language,
        Wheel::language,
        |value: &&Language| language.matches(value),
    )?;
    let candidates = narrow(
        candidates,
        Field::Platform,
        platform,
        Wheel::platform,
        |value: &&Platform| platform.matches(value),
    )?;

    // `narrow` never returns an empty set, and `max_by` keeps the last of several equal maxima.
    let Some(wheel) = candidates
        .into_iter()
        .max_by(|a, b| a.version().cmp(b.version()))
    else {
        unreachable!("at least one candidate remains after narrowing");
    };
    debug!("Selected {} {}: {}", wheel.distribution(), wheel.version(), wheel.url());
    Ok(wheel)
}
