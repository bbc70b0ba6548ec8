//! Host platform detection
//!
//! Builds a [`PlatformDescriptor`] for the running machine from the compile-time
//! OS name and, on Linux, the contents of `os-release`.

use super::{PlatformDescriptor, PlatformFamily};
use std::fs;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// The fields of an `os-release` file that matter for family selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    pub id: String,
    pub id_like: Vec<String>,
    pub version_id: String,
}

impl OsRelease {
    pub fn parse(content: &str) -> Self {
        let mut release = OsRelease::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');

            match key.trim() {
                "ID" => release.id = value.to_ascii_lowercase(),
                "ID_LIKE" => {
                    release.id_like = value
                        .split_whitespace()
                        .map(|s| s.to_ascii_lowercase())
                        .collect()
                }
                "VERSION_ID" => release.version_id = value.to_string(),
                _ => {}
            }
        }

        release
    }

    /// First known family among `ID` then each `ID_LIKE` entry.
    fn family(&self) -> PlatformFamily {
        std::iter::once(&self.id)
            .chain(self.id_like.iter())
            .map(|name| PlatformFamily::from_platform_name(name))
            .find(|family| *family != PlatformFamily::Other)
            .unwrap_or(PlatformFamily::Other)
    }
}

/// Build a descriptor from an OS name (as in `std::env::consts::OS`) and
/// optional `os-release` content. Never fails.
pub fn detect_from_os_release(os: &str, os_release: Option<&str>) -> PlatformDescriptor {
    match os {
        "windows" => PlatformDescriptor::from_platform("windows", ""),
        "macos" => PlatformDescriptor::from_platform("mac_os_x", ""),
        "freebsd" => PlatformDescriptor::from_platform("freebsd", ""),
        "solaris" | "illumos" => PlatformDescriptor::from_platform("smartos", ""),
        "linux" => match os_release {
            Some(content) => {
                let release = OsRelease::parse(content);
                let family = release.family();
                let mut descriptor =
                    PlatformDescriptor::from_platform(&release.id, release.version_id);
                // ID_LIKE may know a family the ID alone does not
                descriptor.family = family;
                descriptor
            }
            None => PlatformDescriptor::unspecified(),
        },
        _ => PlatformDescriptor::unspecified(),
    }
}

/// Detect the running host. A missing `os-release` file yields the default row.
pub fn detect() -> PlatformDescriptor {
    let os = std::env::consts::OS;
    let content = if os == "linux" {
        OS_RELEASE_PATHS
            .iter()
            .find_map(|path| fs::read_to_string(path).ok())
    } else {
        None
    };

    if os == "linux" && content.is_none() {
        tracing::warn!("No os-release file found, using default platform");
    }

    let descriptor = detect_from_os_release(os, content.as_deref());
    crate::logging::log_detection(os, &descriptor);
    descriptor
}
