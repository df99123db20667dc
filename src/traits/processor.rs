// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor capability traits.
//!
//! Every unit of work implements [`Processor`]. Two optional capabilities are
//! exposed through accessor methods rather than type inspection:
//!
//! * [`ConfigurableProcessor`] - accepts an options map and yields a configured processor
//! * [`ValidatableProcessor`] - exposes pass/fail state, an error key and a reset hook
//!
//! Processors that don't validate or don't take options simply keep the default
//! `None` accessors.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::errors::PipelineError;

/// Configuration map handed to a configurable processor.
pub type ProcessorOptions = serde_json::Map<String, Value>;

/// Fault raised by processor logic while processing a value.
pub type ProcessorFault = Box<dyn std::error::Error + Send + Sync>;

pub trait Processor: Send + Sync {
    /// Transform (or inspect) a single value.
    fn process(&self, input: Value) -> Result<Value, ProcessorFault>;

    fn name(&self) -> &str;

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        None
    }

    fn as_validatable(&self) -> Option<&dyn ValidatableProcessor> {
        None
    }
}

/// A processor that accepts options before running.
///
/// `configure` returns a new processor; the instance held by the registry is left
/// untouched so one registered name can serve many configurations at once.
pub trait ConfigurableProcessor {
    fn configure(&self, options: &ProcessorOptions) -> Result<Arc<dyn Processor>, PipelineError>;
}

/// A processor that records whether the last value it saw was valid.
pub trait ValidatableProcessor {
    fn is_valid(&self) -> bool;

    /// Machine-readable key for the failure, e.g. `invalid_email`.
    fn error_key(&self) -> String;

    /// Processor-supplied message for the last failure, if any.
    fn error_message(&self) -> Option<String> {
        None
    }

    /// Clear pass/fail state left over from a previous run.
    fn reset(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub error_key: String,
    pub message: Option<String>,
}

/// Pass/fail cell for validatable processors.
///
/// Processors are shared behind `Arc` and process through `&self`, so the state
/// lives behind a mutex. A fresh (or reset) state is valid.
#[derive(Debug, Default)]
pub struct ValidationState {
    failure: Mutex<Option<ValidationFailure>>,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<ValidationFailure>> {
        // a poisoned lock only means a processor panicked mid-run; the cell itself is still usable
        self.failure.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn pass(&self) {
        *self.lock() = None;
    }

    pub fn fail(&self, error_key: impl Into<String>, message: Option<String>) {
        *self.lock() = Some(ValidationFailure {
            error_key: error_key.into(),
            message,
        });
    }

    pub fn reset(&self) {
        self.pass();
    }

    pub fn is_valid(&self) -> bool {
        self.lock().is_none()
    }

    pub fn failure(&self) -> Option<ValidationFailure> {
        self.lock().clone()
    }
}
