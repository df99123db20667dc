// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for registry, builder, pipeline and handler tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::errors::{PipelineError, PipelineResult};
use crate::traits::{
    ConfigurableProcessor, Processor, ProcessorFault, ProcessorOptions, ValidatableProcessor,
    ValidationState,
};

/// A stub processor that hands its input back unchanged
pub struct StubProcessor {
    pub id: String,
}

impl StubProcessor {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

impl Processor for StubProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        Ok(input)
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// A processor that always fails for testing failure scenarios
pub struct FailingProcessor {
    pub id: String,
}

impl FailingProcessor {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

impl Processor for FailingProcessor {
    fn process(&self, _input: Value) -> Result<Value, ProcessorFault> {
        Err("Simulated processor failure".into())
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// Appends a fixed suffix to string input and counts its calls
pub struct AppendProcessor {
    name: String,
    suffix: String,
    calls: AtomicUsize,
}

impl AppendProcessor {
    pub fn new(name: &str, suffix: &str) -> Self {
        Self {
            name: name.to_string(),
            suffix: suffix.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Processor for AppendProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match input {
            Value::String(text) => Ok(Value::String(text + &self.suffix)),
            other => Ok(other),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Identity until configured with `{"suffix": "..."}`
#[derive(Default)]
pub struct ConfigurableStub {
    suffix: Option<String>,
}

impl ConfigurableStub {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Processor for ConfigurableStub {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        match (&self.suffix, input) {
            (Some(suffix), Value::String(text)) => Ok(Value::String(text + suffix)),
            (_, other) => Ok(other),
        }
    }

    fn name(&self) -> &str {
        "configurable_stub"
    }

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        Some(self)
    }
}

impl ConfigurableProcessor for ConfigurableStub {
    fn configure(&self, options: &ProcessorOptions) -> PipelineResult<Arc<dyn Processor>> {
        let suffix = match options.get("suffix") {
            None => None,
            Some(Value::String(suffix)) => Some(suffix.clone()),
            Some(_) => {
                return Err(PipelineError::InvalidConfiguration {
                    name: self.name().to_string(),
                    details: "suffix must be a string".to_string(),
                })
            }
        };
        Ok(Arc::new(ConfigurableStub { suffix }))
    }
}

/// Validator that rejects one exact value and tracks how it was reset
pub struct CountingValidator {
    rejected: Value,
    error_key: String,
    state: ValidationState,
    resets: AtomicUsize,
    resets_before_process: AtomicUsize,
    reset_pending: AtomicBool,
}

impl CountingValidator {
    pub fn rejecting(rejected: &str) -> Self {
        Self::with_key(rejected, "rejected")
    }

    pub fn with_key(rejected: &str, error_key: &str) -> Self {
        Self {
            rejected: Value::String(rejected.to_string()),
            error_key: error_key.to_string(),
            state: ValidationState::new(),
            resets: AtomicUsize::new(0),
            resets_before_process: AtomicUsize::new(0),
            reset_pending: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn resets(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }

    /// Runs that saw a reset immediately before their `process` call.
    pub fn resets_before_process(&self) -> usize {
        self.resets_before_process.load(Ordering::SeqCst)
    }
}

impl Processor for CountingValidator {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        if self.reset_pending.swap(false, Ordering::SeqCst) {
            self.resets_before_process.fetch_add(1, Ordering::SeqCst);
        }

        if input == self.rejected {
            self.state.fail(self.error_key.clone(), None);
        } else {
            self.state.pass();
        }
        Ok(input)
    }

    fn name(&self) -> &str {
        "counting_validator"
    }

    fn as_validatable(&self) -> Option<&dyn ValidatableProcessor> {
        Some(self)
    }
}

impl ValidatableProcessor for CountingValidator {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn error_key(&self) -> String {
        self.error_key.clone()
    }

    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
        self.reset_pending.store(true, Ordering::SeqCst);
        self.state.reset();
    }
}
