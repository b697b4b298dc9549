use std::process::Command;
use std::str::FromStr;

use tracing::debug;

use pwi_tags::Language;

use crate::DetectError;

/// The interpreter queried when none is configured.
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// Prints the CPython tag of the running interpreter, e.g., `cp38`.
const LANGUAGE_SCRIPT: &str = "import sys; print('cp{}{}'.format(*sys.version_info[:2]))";

/// Detect the language version of the given Python interpreter.
pub fn detect_language(interpreter: &str) -> Result<Language, DetectError> {
    let output = Command::new(interpreter)
        .arg("-c")
        .arg(LANGUAGE_SCRIPT)
        .output()
        .map_err(|err| DetectError::Interpreter(interpreter.to_string(), err))?;

    if !output.status.success() {
        debug!(
            "Failed to query Python version with `{interpreter}`: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        return Err(DetectError::InterpreterStatus {
            interpreter: interpreter.to_string(),
            status: output.status,
        });
    }

    let language = parse_language(&String::from_utf8_lossy(&output.stdout))
        .map_err(|err| DetectError::InterpreterOutput(interpreter.to_string(), err))?;
    debug!("Detected language `{language}` from `{interpreter}`");
    Ok(language)
}

fn parse_language(output: &str) -> Result<Language, pwi_tags::LanguageParseError> {
    Language::from_str(output.trim())
}
