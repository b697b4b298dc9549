use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use pwi_static::EnvVars;
use pwi_tags::Backend;

use crate::DetectError;

/// The release line printed by `nvcc --version`, e.g.,
/// `Cuda compilation tools, release 11.3, V11.3.109`.
static NVCC_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"release (?P<major>\d+)\.(?P<minor>\d+)").unwrap());

/// Detect the computation backend of the current machine.
///
/// Query, in order:
/// 1. The `PWI_CUDA_VERSION` environment variable.
/// 2. `nvcc --version`, i.e., the installed CUDA toolkit.
///
/// If neither is available, the CPU backend is used.
pub fn detect_backend() -> Result<Backend, DetectError> {
    // Read from `PWI_CUDA_VERSION`.
    if let Ok(version) = std::env::var(EnvVars::PWI_CUDA_VERSION) {
        let backend = parse_cuda_version(&version)
            .ok_or_else(|| DetectError::InvalidCudaVersion(version.clone()))?;
        debug!("Detected CUDA version from `PWI_CUDA_VERSION`: {backend}");
        return Ok(backend);
    }

    // Query `nvcc`.
    match Command::new("nvcc").arg("--version").output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if let Some(backend) = parse_nvcc_version(&stdout) {
                debug!("Detected CUDA version from `nvcc`: {backend}");
                return Ok(backend);
            }
            debug!("Failed to find a release in the output of `nvcc --version`");
        }
        Ok(output) => {
            debug!(
                "Failed to query CUDA version with `nvcc` with status `{}`: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(err) => {
            debug!("Failed to run `nvcc`: {err}");
        }
    }

    debug!("No CUDA installation found; using the CPU backend");
    Ok(Backend::Cpu)
}

/// Parse a CUDA version like `11.3` into the corresponding backend, `cu113`.
fn parse_cuda_version(version: &str) -> Option<Backend> {
    let (major, minor) = version.trim().split_once('.')?;
    if major.is_empty()
        || minor.is_empty()
        || !major.bytes().chain(minor.bytes()).all(|byte| byte.is_ascii_digit())
    {
        return None;
    }
    Some(Backend::Cuda {
        version: format!("{major}{minor}").into_boxed_str(),
    })
}

/// Parse the backend from the output of `nvcc --version`.
fn parse_nvcc_version(output: &str) -> Option<Backend> {
    // Parse, e.g.:
    // ```text
    // nvcc: NVIDIA (R) Cuda compiler driver
    // Copyright (c) 2005-2021 NVIDIA Corporation
    // Built on Sun_Mar_21_19:15:46_PDT_2021
    // Cuda compilation tools, release 11.3, V11.3.58
    // Build cuda_11.3.r11.3/compiler.29745058_0
    // ```
    let captures = NVCC_RELEASE.captures(output)?;
    Some(Backend::Cuda {
        version: format!("{}{}", &captures["major"], &captures["minor"]).into_boxed_str(),
    })
}
