//! Platform fixtures mirroring the hosts the default recipe is evaluated on

use crate::platform::PlatformDescriptor;

pub fn unspecified() -> PlatformDescriptor {
    PlatformDescriptor::unspecified()
}

pub fn centos() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("centos", "6.7")
}

pub fn ubuntu() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("ubuntu", "14.04")
}

pub fn freebsd() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("freebsd", "10.2")
}

pub fn mac_os_x() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("mac_os_x", "10.11.1")
}

pub fn redhat() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("redhat", "6.5")
}

pub fn smartos() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("smartos", "5.11")
}

pub fn windows() -> PlatformDescriptor {
    PlatformDescriptor::from_platform("windows", "2012R2")
}

/// Every fixture above, paired with a short label
pub fn all_platforms() -> Vec<(&'static str, PlatformDescriptor)> {
    vec![
        ("unspecified", unspecified()),
        ("centos", centos()),
        ("ubuntu", ubuntu()),
        ("freebsd", freebsd()),
        ("mac_os_x", mac_os_x()),
        ("redhat", redhat()),
        ("smartos", smartos()),
        ("windows", windows()),
    ]
}

/// A node attributes document overriding every path attribute
pub fn sample_overrides_json() -> &'static str {
    r#"{
  "ark": {
    "apache_mirror": "https://archive.apache.org/dist",
    "prefix_root": "/opt",
    "prefix_bin": "/opt/bin",
    "prefix_home": "/opt",
    "tar": "/usr/local/bin/gtar"
  }
}"#
}
