use crate::error::ReelsearchError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), ReelsearchError>;
}

/// Validate a section, prefixing configuration errors with its name
pub fn validate_section<S: ConfigSection>(section: &S) -> Result<(), ReelsearchError> {
    section.validate().map_err(|e| match e {
        ReelsearchError::Configuration(message) => {
            ReelsearchError::Configuration(format!("[{}] {}", S::section_name(), message))
        }
        other => other,
    })
}

pub(crate) fn check_rate(name: &str, rate: f64) -> Result<(), ReelsearchError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(ReelsearchError::Configuration(format!(
            "{} must be between 0 and 1",
            name
        )));
    }
    Ok(())
}
