//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::SdkConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<SdkConfig, ConfigError> {
    let config: SdkConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SdkConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [chain]
        biz_id = "a00e36c5"
        endpoint = "https://rest.baas.alipay.com"
        tenant_id = "tenant"
        access_id = "access"
        access_key = "access.key"
        account = "alice"
        mykmskey_id = "kms-1"
    "#;

    #[test]
    fn test_parse_valid() {
        let config = parse_config(VALID).unwrap();
        assert_eq!(config.chain.account, "alice");
    }

    #[test]
    fn test_parse_error() {
        let result = parse_config("[chain\nbiz_id = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error_lists_all_fields() {
        let err = parse_config("").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("chain.biz_id"));
        assert!(message.contains("chain.endpoint"));
        assert!(message.contains("chain.access_id"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("antchain-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, VALID).unwrap();
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.chain.biz_id, "a00e36c5");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/no/such/antchain.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
