// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{map_text, parse_options};
use crate::errors::PipelineResult;
use crate::traits::{ConfigurableProcessor, Processor, ProcessorFault, ProcessorOptions};

/// Configuration for the Prefix/Suffix Adder processor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixSuffixConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Prefix/Suffix Adder processor - adds prefix and/or suffix to text
#[derive(Debug, Default)]
pub struct PrefixSuffixAdderProcessor {
    config: PrefixSuffixConfig,
}

impl PrefixSuffixAdderProcessor {
    pub fn new(config: PrefixSuffixConfig) -> Self {
        Self { config }
    }

    pub fn with_prefix(prefix: String) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix),
            suffix: None,
        })
    }

    pub fn with_suffix(suffix: String) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: None,
            suffix: Some(suffix),
        })
    }

    pub fn with_prefix_and_suffix(prefix: String, suffix: String) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix),
            suffix: Some(suffix),
        })
    }
}

impl Processor for PrefixSuffixAdderProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        map_text(self.name(), input, |text| {
            let prefix = self.config.prefix.as_deref().unwrap_or_default();
            let suffix = self.config.suffix.as_deref().unwrap_or_default();
            format!("{}{}{}", prefix, text, suffix)
        })
    }

    fn name(&self) -> &str {
        "prefix_suffix_adder"
    }

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        Some(self)
    }
}

impl ConfigurableProcessor for PrefixSuffixAdderProcessor {
    fn configure(&self, options: &ProcessorOptions) -> PipelineResult<Arc<dyn Processor>> {
        let config: PrefixSuffixConfig = parse_options(self.name(), options)?;
        Ok(Arc::new(PrefixSuffixAdderProcessor::new(config)))
    }
}
