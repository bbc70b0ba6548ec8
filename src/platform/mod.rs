pub mod detect;

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub use detect::{detect, detect_from_os_release, OsRelease};

/// Operating system family a configuration is evaluated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Debian,
    Rhel,
    Freebsd,
    Darwin,
    Smartos,
    Windows,
    #[default]
    Other,
}

impl PlatformFamily {
    pub const ALL: [PlatformFamily; 7] = [
        PlatformFamily::Debian,
        PlatformFamily::Rhel,
        PlatformFamily::Freebsd,
        PlatformFamily::Darwin,
        PlatformFamily::Smartos,
        PlatformFamily::Windows,
        PlatformFamily::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Debian => "debian",
            PlatformFamily::Rhel => "rhel",
            PlatformFamily::Freebsd => "freebsd",
            PlatformFamily::Darwin => "darwin",
            PlatformFamily::Smartos => "smartos",
            PlatformFamily::Windows => "windows",
            PlatformFamily::Other => "other",
        }
    }

    /// Map a concrete platform name (`ubuntu`, `centos`, `mac_os_x`, ...) to its family.
    ///
    /// Unknown names map to [`PlatformFamily::Other`].
    pub fn from_platform_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "debian" | "ubuntu" | "linuxmint" | "raspbian" => PlatformFamily::Debian,
            "rhel" | "redhat" | "centos" | "scientific" | "oracle" | "amazon" | "fedora"
            | "rocky" | "almalinux" => PlatformFamily::Rhel,
            "freebsd" => PlatformFamily::Freebsd,
            "mac_os_x" | "darwin" | "macos" => PlatformFamily::Darwin,
            "smartos" => PlatformFamily::Smartos,
            "windows" => PlatformFamily::Windows,
            _ => PlatformFamily::Other,
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_platform_name(s))
    }
}

/// The platform a configuration is evaluated for. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlatformDescriptor {
    family: PlatformFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    version: String,
}

impl PlatformDescriptor {
    pub fn new(family: PlatformFamily, version: impl Into<String>) -> Self {
        Self {
            family,
            name: None,
            version: version.into(),
        }
    }

    /// Build a descriptor from a concrete platform name such as `ubuntu` or `centos`.
    pub fn from_platform(name: &str, version: impl Into<String>) -> Self {
        let name = name.trim().to_ascii_lowercase();
        Self {
            family: PlatformFamily::from_platform_name(&name),
            name: if name.is_empty() { None } else { Some(name) },
            version: version.into(),
        }
    }

    /// The descriptor used when nothing is known about the host.
    pub fn unspecified() -> Self {
        Self::default()
    }

    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) if name != self.family.as_str() => write!(f, "{name} ({})", self.family)?,
            _ => write!(f, "{}", self.family)?,
        }
        if !self.version.is_empty() {
            write!(f, " {}", self.version)?;
        }
        Ok(())
    }
}
