use serde::{Deserialize, Serialize};

pub const DEFAULT_APACHE_MIRROR: &str = "http://apache.mirrors.tds.net";
pub const DEFAULT_PREFIX_ROOT: &str = "/usr/local";
pub const DEFAULT_PREFIX_BIN: &str = "/usr/local/bin";
pub const DEFAULT_PREFIX_HOME: &str = "/usr/local";
pub const DEFAULT_TAR: &str = "/bin/tar";

/// Names accepted by [`AttributeDefaults::get`], in display order
pub const ATTRIBUTE_NAMES: [&str; 6] = [
    "apache_mirror",
    "prefix_root",
    "prefix_bin",
    "prefix_home",
    "tar",
    "sevenzip_binary",
];

/// Default attribute values exposed under the `ark` namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefaults {
    pub apache_mirror: String,
    pub prefix_root: String,
    pub prefix_bin: String,
    pub prefix_home: String,
    pub tar: String,
    pub sevenzip_binary: Option<String>,
}

impl AttributeDefaults {
    /// Defaults with the given archive tool path
    pub fn with_tar(tar: impl Into<String>) -> Self {
        Self {
            tar: tar.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "apache_mirror" => Some(&self.apache_mirror),
            "prefix_root" => Some(&self.prefix_root),
            "prefix_bin" => Some(&self.prefix_bin),
            "prefix_home" => Some(&self.prefix_home),
            "tar" => Some(&self.tar),
            "sevenzip_binary" => self.sevenzip_binary.as_deref(),
            _ => None,
        }
    }

    pub fn is_known(name: &str) -> bool {
        ATTRIBUTE_NAMES.contains(&name)
    }

    /// `(name, value)` pairs for every attribute that has a value
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        ATTRIBUTE_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }
}

impl Default for AttributeDefaults {
    fn default() -> Self {
        Self {
            apache_mirror: DEFAULT_APACHE_MIRROR.to_string(),
            prefix_root: DEFAULT_PREFIX_ROOT.to_string(),
            prefix_bin: DEFAULT_PREFIX_BIN.to_string(),
            prefix_home: DEFAULT_PREFIX_HOME.to_string(),
            tar: DEFAULT_TAR.to_string(),
            sevenzip_binary: None,
        }
    }
}
