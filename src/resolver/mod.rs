//! Platform configuration resolution
//!
//! Maps a [`PlatformDescriptor`] to the packages the helper needs and the
//! attribute defaults it exposes. Resolution is total: any family without a
//! dedicated row gets the default row.

mod packages;

use crate::attributes::{AttributeDefaults, DEFAULT_TAR};
use crate::config::AttributeOverrides;
use crate::platform::{PlatformDescriptor, PlatformFamily};
use serde::Serialize;

pub use packages::PackageSet;

/// Where the archive tool lives for a family
enum TarLocation {
    Default,
    Fixed(&'static str),
    /// 7-Zip under the system drive, quoted for use in a shell command line
    SevenZip,
}

struct FamilyConfig {
    packages: &'static [&'static str],
    tar: TarLocation,
}

const DEFAULT_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[
        "libtool", "autoconf", "unzip", "rsync", "make", "gcc", "autogen",
    ],
    tar: TarLocation::Default,
};

const DEBIAN_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[
        "libtool",
        "autoconf",
        "unzip",
        "rsync",
        "make",
        "gcc",
        "autogen",
        "shtool",
        "pkg-config",
    ],
    tar: TarLocation::Default,
};

const RHEL_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[
        "libtool",
        "autoconf",
        "unzip",
        "rsync",
        "make",
        "gcc",
        "xz-lzma-compat",
        "bzip2",
        "tar",
    ],
    tar: TarLocation::Default,
};

const FREEBSD_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[
        "libtool", "autoconf", "unzip", "rsync", "gmake", "gcc", "autogen", "gtar",
    ],
    tar: TarLocation::Fixed("/usr/bin/tar"),
};

const SMARTOS_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[
        "libtool", "autoconf", "unzip", "rsync", "make", "gcc", "gtar", "autogen",
    ],
    tar: TarLocation::Fixed("/bin/gtar"),
};

const DARWIN_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[],
    tar: TarLocation::Fixed("/usr/bin/tar"),
};

const WINDOWS_CONFIG: FamilyConfig = FamilyConfig {
    packages: &[],
    tar: TarLocation::SevenZip,
};

fn family_config(family: PlatformFamily) -> &'static FamilyConfig {
    match family {
        PlatformFamily::Debian => &DEBIAN_CONFIG,
        PlatformFamily::Rhel => &RHEL_CONFIG,
        PlatformFamily::Freebsd => &FREEBSD_CONFIG,
        PlatformFamily::Smartos => &SMARTOS_CONFIG,
        PlatformFamily::Darwin => &DARWIN_CONFIG,
        PlatformFamily::Windows => &WINDOWS_CONFIG,
        PlatformFamily::Other => &DEFAULT_CONFIG,
    }
}

/// Host facts that feed into attribute values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveContext {
    /// Drive prefix such as `C:`; empty when unknown
    pub system_drive: String,
}

impl ResolveContext {
    pub fn with_system_drive(drive: impl Into<String>) -> Self {
        Self {
            system_drive: drive.into(),
        }
    }

    /// Context for the running host, reading `SYSTEMDRIVE`
    pub fn from_env() -> Self {
        Self::with_system_drive(std::env::var("SYSTEMDRIVE").unwrap_or_default())
    }
}

/// The packages and attributes selected for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub platform: PlatformDescriptor,
    pub packages: PackageSet,
    pub attributes: AttributeDefaults,
}

impl Resolution {
    /// Layer node attribute overrides on top of the resolved defaults.
    /// The package set is left untouched.
    pub fn with_overrides(mut self, overrides: &AttributeOverrides) -> Self {
        overrides.apply(&mut self.attributes);
        self
    }
}

/// Resolve a platform with an empty host context
pub fn resolve(platform: &PlatformDescriptor) -> Resolution {
    resolve_with(platform, &ResolveContext::default())
}

pub fn resolve_with(platform: &PlatformDescriptor, context: &ResolveContext) -> Resolution {
    let config = family_config(platform.family());

    let tar = match config.tar {
        TarLocation::Default => DEFAULT_TAR.to_string(),
        TarLocation::Fixed(path) => path.to_string(),
        TarLocation::SevenZip => format!("\"{}\\7-zip\\7z.exe\"", context.system_drive),
    };

    let resolution = Resolution {
        platform: platform.clone(),
        packages: config.packages.iter().copied().collect(),
        attributes: AttributeDefaults::with_tar(tar),
    };

    crate::logging::log_resolution(&resolution);
    resolution
}
