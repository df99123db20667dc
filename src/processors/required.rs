// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::traits::{Processor, ProcessorFault, ValidatableProcessor, ValidationState};

pub const REQUIRED_ERROR_KEY: &str = "required";

/// Required processor - flags null, blank strings and empty collections
///
/// The value itself passes through untouched so later processors still run.
#[derive(Debug, Default)]
pub struct RequiredProcessor {
    state: ValidationState,
}

impl RequiredProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_present(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::String(text) => !text.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        }
    }
}

impl Processor for RequiredProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        if Self::is_present(&input) {
            self.state.pass();
        } else {
            self.state
                .fail(REQUIRED_ERROR_KEY, Some("This field is required".to_string()));
        }
        Ok(input)
    }

    fn name(&self) -> &str {
        "required"
    }

    fn as_validatable(&self) -> Option<&dyn ValidatableProcessor> {
        Some(self)
    }
}

impl ValidatableProcessor for RequiredProcessor {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn error_key(&self) -> String {
        REQUIRED_ERROR_KEY.to_string()
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

    #[test]
    fn test_presence() {
        struct TestCase {
            input: Value,
            valid: bool,
        }

        let test_cases = vec![
            TestCase { input: Value::Null, valid: false },
            TestCase { input: json!(""), valid: false },
            TestCase { input: json!("   "), valid: false },
            TestCase { input: json!([]), valid: false },
            TestCase { input: json!({}), valid: false },
            TestCase { input: json!("x"), valid: true },
            TestCase { input: json!(0), valid: true },
            TestCase { input: json!(false), valid: true },
            TestCase { input: json!(["a"]), valid: true },
        ];

        let processor = RequiredProcessor::new();
        for case in test_cases {
            processor.reset();
            let output = processor.process(case.input.clone()).unwrap();
            assert_eq!(output, case.input);
            assert_eq!(processor.is_valid(), case.valid, "input {}", case.input);
        }
    }

    #[test]
    fn test_failure_message_clears_on_reset() {
        let processor = RequiredProcessor::new();
        processor.process(Value::Null).unwrap();

        assert_eq!(processor.error_key(), "required");
        assert_eq!(processor.error_message().as_deref(), Some("This field is required"));

        processor.reset();
        assert!(processor.is_valid());
        assert_eq!(processor.error_message(), None);
    }
}
