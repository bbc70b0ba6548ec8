pub mod overrides;
pub mod validator;

pub use overrides::{default_overrides_path, AttributeOverrides};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};
