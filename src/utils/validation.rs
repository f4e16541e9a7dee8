use crate::utils::error::{ImportError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ImportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ImportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ImportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ImportError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ImportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
