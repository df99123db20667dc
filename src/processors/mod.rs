// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in local processors.
//!
//! The pipeline core treats processors as external collaborators; these are the
//! ones the crate ships so a registry can be populated without writing any:
//!
//! - **Transforms**: `trim`, `change_text_case`, `prefix_suffix_adder`
//! - **Validators**: `required`, `email`, `range`, `length`
//!
//! Configurable processors read their options through serde, so a bad option is
//! reported as [`PipelineError::InvalidConfiguration`] rather than silently ignored.
//! [`BuiltinProcessors`] registers all of them under one context.

pub mod change_text_case;
pub mod email;
pub mod factory;
pub mod length;
pub mod prefix_suffix_adder;
pub mod range;
pub mod required;
#[cfg(test)]
pub mod stub;
pub mod trim;

pub use change_text_case::*;
pub use email::*;
pub use factory::{register_builtin_processors, BuiltinProcessors};
pub use length::*;
pub use prefix_suffix_adder::*;
pub use range::*;
pub use required::*;
pub use trim::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{PipelineError, PipelineResult};
use crate::traits::{ProcessorFault, ProcessorOptions};

/// Deserialize a processor's options into its config struct.
pub(crate) fn parse_options<T: DeserializeOwned>(
    name: &str,
    options: &ProcessorOptions,
) -> PipelineResult<T> {
    serde_json::from_value(Value::Object(options.clone())).map_err(|e| {
        PipelineError::InvalidConfiguration {
            name: name.to_string(),
            details: e.to_string(),
        }
    })
}

/// Apply a string transform. `null` passes through so optional fields stay optional.
pub(crate) fn map_text<F>(processor: &str, input: Value, transform: F) -> Result<Value, ProcessorFault>
where
    F: FnOnce(&str) -> String,
{
    match input {
        Value::String(text) => Ok(Value::String(transform(&text))),
        Value::Null => Ok(Value::Null),
        other => Err(format!(
            "{} expects a string input, got {}",
            processor,
            type_name(&other)
        )
        .into()),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
