pub use base_client::{DEFAULT_TIMEOUT, IndexClient, IndexClientBuilder};
pub use error::{Error, ErrorKind};
pub use index_url::{IndexUrl, IndexUrlError, PYTORCH_INDEX_PAGE, PYTORCH_INDEX_URL};

mod base_client;
mod error;
pub mod html;
mod index_url;
