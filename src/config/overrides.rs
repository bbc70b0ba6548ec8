//! Node attribute overrides
//!
//! Overrides come from a JSON document shaped like node attributes:
//!
//! ```json
//! { "ark": { "prefix_root": "/opt", "tar": "/usr/local/bin/gtar" } }
//! ```
//!
//! Keys outside `ark` are ignored; unknown keys inside it are rejected.

use crate::attributes::AttributeDefaults;
use crate::config::validator::ConfigValidator;
use crate::error::{ArkError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = "attributes.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeOverrides {
    pub apache_mirror: Option<String>,
    pub prefix_root: Option<String>,
    pub prefix_bin: Option<String>,
    pub prefix_home: Option<String>,
    pub tar: Option<String>,
    pub sevenzip_binary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NodeAttributes {
    #[serde(default)]
    ark: Option<AttributeOverrides>,
}

impl AttributeOverrides {
    /// Parse and validate an overrides document. `source` names it in errors.
    pub fn from_json_str(content: &str, source: &str) -> Result<Self> {
        let node: NodeAttributes = serde_json::from_str(content)
            .map_err(|e| ArkError::config_error(source, format!("Invalid JSON: {e}")))?;
        let overrides = node.ark.unwrap_or_default();

        if let Err(errors) = ConfigValidator::validate_attributes(&overrides.entries()) {
            // Report the first failure; the rest usually share its cause
            let first = &errors[0];
            return Err(ArkError::invalid_override(
                source,
                first.field.clone(),
                first.message.clone(),
            ));
        }

        Ok(overrides)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ArkError::io_error(
                "read attribute overrides",
                Some(path.display().to_string()),
                e,
            )
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// Load the per-user overrides file. A missing file means no overrides.
    pub fn load_default() -> Result<Self> {
        match default_overrides_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// `(name, value)` for every set override
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("apache_mirror", &self.apache_mirror),
            ("prefix_root", &self.prefix_root),
            ("prefix_bin", &self.prefix_bin),
            ("prefix_home", &self.prefix_home),
            ("tar", &self.tar),
            ("sevenzip_binary", &self.sevenzip_binary),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Replace each attribute that has an override
    pub fn apply(&self, attributes: &mut AttributeDefaults) {
        let targets: [(&Option<String>, &mut String); 5] = [
            (&self.apache_mirror, &mut attributes.apache_mirror),
            (&self.prefix_root, &mut attributes.prefix_root),
            (&self.prefix_bin, &mut attributes.prefix_bin),
            (&self.prefix_home, &mut attributes.prefix_home),
            (&self.tar, &mut attributes.tar),
        ];
        for (value, target) in targets {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }
        if let Some(binary) = &self.sevenzip_binary {
            attributes.sevenzip_binary = Some(binary.clone());
        }

        for (name, value) in self.entries() {
            crate::logging::log_override_applied(name, value);
        }
    }
}

/// `attributes.json` in the per-user config directory
pub fn default_overrides_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ark").map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let overrides = AttributeOverrides::from_json_str(
            r#"{"ark": {"prefix_root": "/opt", "tar": "/usr/local/bin/gtar"}, "java": {"home": "/x"}}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(overrides.prefix_root.as_deref(), Some("/opt"));
        assert_eq!(overrides.tar.as_deref(), Some("/usr/local/bin/gtar"));
        assert!(overrides.apache_mirror.is_none());
    }

    #[test]
    fn test_document_without_ark_is_empty() {
        let overrides = AttributeOverrides::from_json_str("{}", "inline").unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AttributeOverrides::from_json_str(r#"{"ark": {"prefix": "/opt"}}"#, "inline")
            .unwrap_err();
        assert!(matches!(err, ArkError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_mirror_rejected() {
        let err = AttributeOverrides::from_json_str(
            r#"{"ark": {"apache_mirror": "mirror.example"}}"#,
            "inline",
        )
        .unwrap_err();
        match err {
            ArkError::InvalidOverride { key, path, .. } => {
                assert_eq!(key, "apache_mirror");
                assert_eq!(path, "inline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_apply_replaces_only_set_values() {
        let overrides = AttributeOverrides {
            prefix_home: Some("/srv".to_string()),
            sevenzip_binary: Some("C:\\tools\\7z.exe".to_string()),
            ..Default::default()
        };
        let mut attributes = AttributeDefaults::default();
        overrides.apply(&mut attributes);

        assert_eq!(attributes.prefix_home, "/srv");
        assert_eq!(attributes.prefix_root, "/usr/local");
        assert_eq!(attributes.tar, "/bin/tar");
        assert_eq!(attributes.sevenzip_binary.as_deref(), Some("C:\\tools\\7z.exe"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AttributeOverrides::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ArkError::IoError { .. }));
    }
}
