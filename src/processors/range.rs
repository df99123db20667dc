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

pub const OUT_OF_RANGE_ERROR_KEY: &str = "out_of_range";

/// Inclusive numeric bounds. `minAge`/`maxAge` are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    #[serde(default, alias = "minAge")]
    pub min: Option<f64>,
    #[serde(default, alias = "maxAge")]
    pub max: Option<f64>,
}

/// Range processor - checks a number (or numeric string) against inclusive bounds
#[derive(Debug, Default)]
pub struct RangeProcessor {
    config: RangeConfig,
    state: ValidationState,
}

impl RangeProcessor {
    pub fn new(config: RangeConfig) -> Self {
        Self {
            config,
            state: ValidationState::new(),
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::new(RangeConfig {
            min: Some(min),
            max: Some(max),
        })
    }

    fn numeric(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    fn describe_bounds(&self) -> String {
        match (self.config.min, self.config.max) {
            (Some(min), Some(max)) => format!("Value must be between {} and {}", min, max),
            (Some(min), None) => format!("Value must be at least {}", min),
            (None, Some(max)) => format!("Value must be at most {}", max),
            (None, None) => "Value must be numeric".to_string(),
        }
    }

    fn in_range(&self, number: f64) -> bool {
        self.config.min.map_or(true, |min| number >= min)
            && self.config.max.map_or(true, |max| number <= max)
    }
}

impl Processor for RangeProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        let valid = match &input {
            Value::Null => true,
            other => Self::numeric(other).is_some_and(|number| self.in_range(number)),
        };

        if valid {
            self.state.pass();
        } else {
            self.state
                .fail(OUT_OF_RANGE_ERROR_KEY, Some(self.describe_bounds()));
        }
        Ok(input)
    }

    fn name(&self) -> &str {
        "range"
    }

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        Some(self)
    }

    fn as_validatable(&self) -> Option<&dyn ValidatableProcessor> {
        Some(self)
    }
}

impl ConfigurableProcessor for RangeProcessor {
    fn configure(&self, options: &ProcessorOptions) -> PipelineResult<Arc<dyn Processor>> {
        let config: RangeConfig = parse_options(self.name(), options)?;

        if let (Some(min), Some(max)) = (config.min, config.max) {
            if min > max {
                return Err(PipelineError::InvalidConfiguration {
                    name: self.name().to_string(),
                    details: format!("min ({}) is greater than max ({})", min, max),
                });
            }
        }

        Ok(Arc::new(RangeProcessor::new(config)))
    }
}

impl ValidatableProcessor for RangeProcessor {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn error_key(&self) -> String {
        OUT_OF_RANGE_ERROR_KEY.to_string()
    }

    fn error_message(&self) -> Option<String> {
        self.state.failure().and_then(|failure| failure.message)
    }

    fn reset(&self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> ProcessorOptions {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_bounds() {
        struct TestCase {
            input: Value,
            valid: bool,
        }

        let test_cases = vec![
            TestCase { input: json!(15), valid: false },
            TestCase { input: json!(18), valid: true },
            TestCase { input: json!(42.5), valid: true },
            TestCase { input: json!(100), valid: true },
            TestCase { input: json!(101), valid: false },
            TestCase { input: json!(" 30 "), valid: true },
            TestCase { input: json!("thirty"), valid: false },
            TestCase { input: json!(true), valid: false },
            TestCase { input: Value::Null, valid: true },
        ];

        let processor = RangeProcessor::between(18.0, 100.0);
        for case in test_cases {
            processor.reset();
            assert_eq!(processor.process(case.input.clone()).unwrap(), case.input);
            assert_eq!(processor.is_valid(), case.valid, "input {}", case.input);
        }
    }

    #[test]
    fn test_age_aliases_configure_bounds() {
        let configured = RangeProcessor::default()
            .configure(&options(json!({"minAge": 18, "maxAge": 100})))
            .unwrap();

        configured.process(json!(15)).unwrap();
        let validator = configured.as_validatable().unwrap();
        assert!(!validator.is_valid());
        assert_eq!(validator.error_key(), "out_of_range");
        assert_eq!(
            validator.error_message().as_deref(),
            Some("Value must be between 18 and 100")
        );
    }

    #[test]
    fn test_one_sided_bounds() {
        let at_least = RangeProcessor::new(RangeConfig { min: Some(1.0), max: None });
        at_least.process(json!(1_000_000)).unwrap();
        assert!(at_least.is_valid());
        at_least.process(json!(0)).unwrap();
        assert_eq!(at_least.error_message().as_deref(), Some("Value must be at least 1"));
    }

    #[test]
    fn test_configure_rejects_inverted_bounds() {
        let error = RangeProcessor::default()
            .configure(&options(json!({"min": 10, "max": 1})))
            .err()
            .unwrap();
        assert!(matches!(error, PipelineError::InvalidConfiguration { .. }));
        assert!(error.to_string().contains("greater than max"));
    }

    #[test]
    fn test_configure_rejects_non_numeric_bound() {
        let error = RangeProcessor::default()
            .configure(&options(json!({"min": "ten"})))
            .err()
            .unwrap();
        assert_eq!(error.key(), "PROCESSOR_CONFIG_INVALID");
    }
}
