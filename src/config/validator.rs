use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a single override value for the named attribute
    pub fn validate_attribute(name: &str, value: &str) -> Result<(), String> {
        match name {
            "apache_mirror" => Self::validate_mirror_url(value),
            _ => Self::validate_path(value),
        }
    }

    /// Validate every `(name, value)` pair, collecting all failures
    pub fn validate_attributes(attributes: &[(&str, &str)]) -> ValidationResult {
        let errors: Vec<ValidationError> = attributes
            .iter()
            .filter_map(|(name, value)| {
                Self::validate_attribute(name, value)
                    .err()
                    .map(|message| ValidationError {
                        field: name.to_string(),
                        message,
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_mirror_url(value: &str) -> Result<(), String> {
        let url = Url::parse(value).map_err(|e| format!("Invalid URL '{value}': {e}"))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(format!(
                "Mirror URL must use http or https, got '{scheme}'"
            )),
        }
    }

    fn validate_path(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Path must not be empty".to_string());
        }
        if value.contains('\0') {
            return Err("Path contains null bytes".to_string());
        }
        Ok(())
    }
}
