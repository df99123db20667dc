// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_options;
use crate::errors::{PipelineError, PipelineResult};
use crate::traits::{
    ConfigurableProcessor, Processor, ProcessorFault, ProcessorOptions, ValidatableProcessor,
    ValidationState,
};

pub const INVALID_LENGTH_ERROR_KEY: &str = "invalid_length";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LengthConfig {
    #[serde(default)]
    pub min: Option<usize>,
    #[serde(default)]
    pub max: Option<usize>,
}

/// Length processor - bounds the character count of a string or the size of an array
#[derive(Debug, Default)]
pub struct LengthProcessor {
    config: LengthConfig,
    state: ValidationState,
}

impl LengthProcessor {
    pub fn new(config: LengthConfig) -> Self {
        Self {
            config,
            state: ValidationState::new(),
        }
    }

    fn measure(value: &Value) -> Option<usize> {
        match value {
            Value::String(text) => Some(text.chars().count()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    fn violation(&self, length: usize) -> Option<String> {
        match (self.config.min, self.config.max) {
            (Some(min), _) if length < min => Some(format!("Must be at least {} characters", min)),
            (_, Some(max)) if length > max => Some(format!("Must be at most {} characters", max)),
            _ => None,
        }
    }
}

impl Processor for LengthProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        let violation = match &input {
            Value::Null => None,
            other => match Self::measure(other) {
                Some(length) => self.violation(length),
                None => Some("Value has no length".to_string()),
            },
        };

        match violation {
            None => self.state.pass(),
            Some(message) => self.state.fail(INVALID_LENGTH_ERROR_KEY, Some(message)),
        }
        Ok(input)
    }

    fn name(&self) -> &str {
        "length"
    }

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        Some(self)
    }

    fn as_validatable(&self) -> Option<&dyn ValidatableProcessor> {
        Some(self)
    }
}

impl ConfigurableProcessor for LengthProcessor {
    fn configure(&self, options: &ProcessorOptions) -> PipelineResult<Arc<dyn Processor>> {
        let config: LengthConfig = parse_options(self.name(), options)?;

        if let (Some(min), Some(max)) = (config.min, config.max) {
            if min > max {
                return Err(PipelineError::InvalidConfiguration {
                    name: self.name().to_string(),
                    details: format!("min ({}) is greater than max ({})", min, max),
                });
            }
        }

        Ok(Arc::new(LengthProcessor::new(config)))
    }
}

impl ValidatableProcessor for LengthProcessor {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn error_key(&self) -> String {
        INVALID_LENGTH_ERROR_KEY.to_string()
    }

    fn error_message(&self) -> Option<String> {
        self.state.failure().and_then(|failure| failure.message)
    }

    fn reset(&self) {
        self.state.reset();
    }
}
