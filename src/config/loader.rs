// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::spec::ProcessorSpecList;
use crate::config::validate_config;
use crate::errors::ConfigError;
use crate::handler::{FailureStrategy, PropertyMetadata, StaticMetadataSource};

/// Processor annotations for a set of properties.
///
/// Declares which context the processors are looked up in, what the handler does
/// when a pipeline faults, and for each property its ordered processor specs and
/// any custom validation messages keyed by processor name.
///
/// # Example
/// ```yaml
/// context: user
/// failure_strategy: fail_fast        # or record_and_continue
/// properties:
///   email:
///     processors: [trim, lowercase, {email: true}]
///     messages: { email: "Please provide a valid email" }
///   age:
///     processors:
///       required: true
///       range: { minAge: 18, maxAge: 100 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub context: String,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyConfig>,
}

/// One property's raw processor specs plus custom messages.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PropertyConfig {
    /// A list or a map of specs, kept raw until normalization.
    #[serde(default)]
    pub processors: Value,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl PropertyConfig {
    pub fn specs(&self) -> ProcessorSpecList {
        ProcessorSpecList::from_value(&self.processors)
    }
}

impl Config {
    /// In-memory metadata for the handler, one entry per configured property.
    pub fn metadata_source(&self) -> StaticMetadataSource {
        StaticMetadataSource::from(self)
    }
}

impl From<&Config> for StaticMetadataSource {
    fn from(config: &Config) -> Self {
        let mut source = StaticMetadataSource::new();
        for (property, property_config) in &config.properties {
            source.insert(
                property,
                PropertyMetadata {
                    processors: property_config.specs(),
                    messages: property_config.messages.clone(),
                },
            );
        }
        source
    }
}

/// Load a config file. The extension picks the format: `.toml`, `.json`, otherwise YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let cfg = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    Ok(cfg)
}

/// Load a config file and run [`validate_config`] over it.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
