//! Detection of the constraints of the current machine: the CUDA toolkit, if any, the Python
//! interpreter, and the operating system.

use std::process::ExitStatus;

pub use backend::detect_backend;
pub use language::{DEFAULT_PYTHON, detect_language};
pub use platform::detect_platform;

mod backend;
mod language;
mod platform;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("Invalid CUDA version `{0}` (expected a version like `11.3`)")]
    InvalidCudaVersion(String),

    #[error("Failed to run `{0}` to determine the Python version; use `--language` to provide one")]
    Interpreter(String, #[source] std::io::Error),

    #[error(
        "`{interpreter}` exited with {status} while determining the Python version; use `--language` to provide one"
    )]
    InterpreterStatus {
        interpreter: String,
        status: ExitStatus,
    },

    #[error("`{0}` reported an invalid Python version; use `--language` to provide one")]
    InterpreterOutput(String, #[source] pwi_tags::LanguageParseError),

    #[error("Unsupported platform `{0}`; use `--platform` to provide one")]
    UnsupportedPlatform(String),
}
