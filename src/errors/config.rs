// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use thiserror::Error;

/// Problems found in a configuration that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The processor context is missing or blank
    EmptyContext,
    /// A property key is blank
    EmptyPropertyName,
    /// A property's `processors` value is neither a list nor a map
    InvalidProcessorSpec {
        /// The property carrying the bad value
        property: String,
        /// JSON type name of what was found instead
        found: &'static str,
    },
    /// A custom message names a processor the property never lists
    OrphanMessage { property: String, processor: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyContext => write!(f, "Context must not be empty"),
            ValidationError::EmptyPropertyName => write!(f, "Property names must not be empty"),
            ValidationError::InvalidProcessorSpec { property, found } => write!(
                f,
                "Processors for property '{}' must be a list or a map, found {}",
                property, found
            ),
            ValidationError::OrphanMessage {
                property,
                processor,
            } => write!(
                f,
                "Property '{}' has a message for '{}' which is not one of its processors",
                property, processor
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors that can occur while loading or validating a pipeline configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let error = ConfigError::Validation(vec![
            ValidationError::EmptyContext,
            ValidationError::InvalidProcessorSpec {
                property: "email".to_string(),
                found: "string",
            },
        ]);

        assert_eq!(
            error.to_string(),
            "Configuration validation failed:\nContext must not be empty\n\
             Processors for property 'email' must be a list or a map, found string"
        );
    }
}
