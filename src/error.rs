use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum ArkError {
    UnknownAttribute {
        name: String,
        available: Vec<String>,
    },
    InvalidOverride {
        path: String,
        key: String,
        message: String,
    },
    ConfigError {
        path: String,
        message: String,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl ArkError {
    pub fn unknown_attribute(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownAttribute {
            name: name.into(),
            available,
        }
    }

    pub fn invalid_override(
        path: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidOverride {
            path: path.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn config_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for ArkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute { name, available } => {
                writeln!(
                    f,
                    "{} Unknown attribute: {}",
                    "✗".red().bold(),
                    name.yellow()
                )?;
                if !available.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "{}", "Available attributes:".green())?;
                    for attribute in available {
                        writeln!(f, "  {} {}", "•".blue(), attribute)?;
                    }
                }
                Ok(())
            }
            Self::InvalidOverride { path, key, message } => {
                writeln!(
                    f,
                    "{} Invalid attribute override: {}",
                    "✗".red().bold(),
                    key.yellow()
                )?;
                writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::ConfigError { path, message } => {
                writeln!(f, "{} Configuration error", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for ArkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArkError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for ArkError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, ArkError>;
