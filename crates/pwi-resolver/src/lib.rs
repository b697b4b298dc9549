//! Selection of a single wheel per distribution from the wheels listed on a PyTorch index.

pub use find_links::{FindLinksError, find_links};
pub use selector::{Field, SelectionError, select_wheel};

mod find_links;
mod selector;
