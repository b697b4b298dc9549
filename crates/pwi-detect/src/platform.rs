use tracing::debug;

use pwi_tags::Platform;

use crate::DetectError;

/// Detect the platform of the current machine from the operating system the tool was built for.
pub fn detect_platform() -> Result<Platform, DetectError> {
    let os = std::env::consts::OS;
    let platform =
        platform_from_os(os).ok_or_else(|| DetectError::UnsupportedPlatform(os.to_string()))?;
    debug!("Detected platform: {platform}");
    Ok(platform)
}

fn platform_from_os(os: &str) -> Option<Platform> {
    let platform = Platform::parse(os);
    (!platform.is_unset()).then_some(platform)
}
