// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::traits::{Processor, ProcessorFault, ValidatableProcessor, ValidationState};

pub const INVALID_EMAIL_ERROR_KEY: &str = "invalid_email";

/// Email processor - checks that a string looks like `local@domain.tld`
///
/// Null is left for `required` to judge and counts as valid here.
#[derive(Debug, Default)]
pub struct EmailProcessor {
    state: ValidationState,
}

impl EmailProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid_address(address: &str) -> bool {
        if address.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_alphanumeric() || c == '-')
            })
    }
}

impl Processor for EmailProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        let valid = match &input {
            Value::Null => true,
            Value::String(address) => Self::is_valid_address(address),
            _ => false,
        };

        if valid {
            self.state.pass();
        } else {
            self.state
                .fail(INVALID_EMAIL_ERROR_KEY, Some("Invalid email format".to_string()));
        }
        Ok(input)
    }

    fn name(&self) -> &str {
        "email"
    }

    fn as_validatable(&self) -> Option<&dyn ValidatableProcessor> {
        Some(self)
    }
}

impl ValidatableProcessor for EmailProcessor {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn error_key(&self) -> String {
        INVALID_EMAIL_ERROR_KEY.to_string()
    }

    fn error_message(&self) -> Option<String> {
        self.state.failure().and_then(|failure| failure.message)
    }

    fn reset(&self) {
        self.state.reset();
    }
}
