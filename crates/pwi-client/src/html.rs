use std::sync::LazyLock;

use regex::Regex;
use tracing::instrument;

/// A single entry on a flat index page, e.g.,
/// `<a href="cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>`.
static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<a href="[^"]*">(?P<filename>[^<]*)</a><br>$"#).unwrap());

/// Extract the filenames listed on a flat index page, in document order.
///
/// The page is not parsed as HTML. Instead, each line must consist of exactly one anchor followed
/// by a line break; the anchor text is the filename. Any other line is ignored.
#[instrument(skip_all)]
pub fn extract_filenames(text: &str) -> Vec<String> {
    text.split('\n')
        .filter_map(|line| ANCHOR.captures(line))
        .map(|captures| captures["filename"].to_string())
        .collect()
}
