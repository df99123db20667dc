// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural checks for a parsed [`Config`].
//!
//! Parsing only guarantees the document has the right shape at the top level.
//! [`validate_config`] then checks what serde cannot:
//!
//! 1. **Context**: must be non-blank, since every registry lookup is scoped by it
//! 2. **Property names**: must be non-blank
//! 3. **Spec shape**: each property's `processors` must be a list or a map
//! 4. **Messages**: each custom message must name a processor the property lists
//!
//! All problems are collected rather than stopping at the first one. Whether a
//! named processor actually exists is a registry question and is answered when a
//! pipeline is built, not here.
//!
//! ```rust
//! use processor_pipeline::config::{validate_config, Config};
//! use processor_pipeline::errors::ValidationError;
//!
//! let config: Config = serde_yaml::from_str("context: ''").unwrap();
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors, vec![ValidationError::EmptyContext]);
//! ```

use std::collections::HashSet;

use serde_json::Value;

use crate::config::spec::{ProcessorSpecList, SpecKey};
use crate::config::Config;
use crate::errors::ValidationError;
use crate::processors::type_name;

pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.context.trim().is_empty() {
        errors.push(ValidationError::EmptyContext);
    }

    for (property, property_config) in &config.properties {
        if property.trim().is_empty() {
            errors.push(ValidationError::EmptyPropertyName);
        }

        match &property_config.processors {
            Value::Array(_) | Value::Object(_) => {}
            other => {
                errors.push(ValidationError::InvalidProcessorSpec {
                    property: property.clone(),
                    found: type_name(other),
                });
                continue;
            }
        }

        let listed = processor_names(&ProcessorSpecList::from_value(&property_config.processors));
        let mut orphans: Vec<&String> = property_config
            .messages
            .keys()
            .filter(|processor| !listed.contains(processor.as_str()))
            .collect();
        orphans.sort();

        errors.extend(orphans.into_iter().map(|processor| ValidationError::OrphanMessage {
            property: property.clone(),
            processor: processor.clone(),
        }));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Every processor name a spec list mentions, disabled entries included.
fn processor_names(specs: &ProcessorSpecList) -> HashSet<String> {
    let mut names: HashSet<String> = specs
        .entries()
        .iter()
        .filter_map(|(key, _)| match key {
            SpecKey::Name(name) => Some(name.clone()),
            SpecKey::Index(_) => None,
        })
        .collect();

    names.extend(
        specs
            .normalized()
            .filter_map(|spec| spec.name().map(str::to_string)),
    );
    names
}
