// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::{map_text, parse_options};
use crate::errors::PipelineResult;
use crate::traits::{ConfigurableProcessor, Processor, ProcessorFault, ProcessorOptions};

/// Configuration for the Trim processor
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrimConfig {
    /// Characters to strip instead of whitespace.
    pub characters: Option<String>,
}

/// Trim processor - strips leading and trailing whitespace (or the configured characters)
#[derive(Debug, Default)]
pub struct TrimProcessor {
    config: TrimConfig,
}

impl TrimProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_characters(characters: impl Into<String>) -> Self {
        Self {
            config: TrimConfig {
                characters: Some(characters.into()),
            },
        }
    }
}

impl Processor for TrimProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        map_text(self.name(), input, |text| match &self.config.characters {
            Some(characters) => text
                .trim_matches(|c: char| characters.contains(c))
                .to_string(),
            None => text.trim().to_string(),
        })
    }

    fn name(&self) -> &str {
        "trim"
    }

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        Some(self)
    }
}

impl ConfigurableProcessor for TrimProcessor {
    fn configure(&self, options: &ProcessorOptions) -> PipelineResult<Arc<dyn Processor>> {
        let config: TrimConfig = parse_options(self.name(), options)?;
        Ok(Arc::new(TrimProcessor { config }))
    }
}
