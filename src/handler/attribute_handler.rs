// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ProcessorBuilder;
use crate::engine::ProcessorPipeline;
use crate::errors::{PipelineError, PipelineResult};
use crate::handler::MetadataSource;
use crate::observability::messages::handler::{
    PropertyProcessingFailed, PropertySkipped, ValidationFailed,
};
use crate::observability::messages::StructuredLog;
use crate::result::{ErrorMap, ProcessingResultCollection, ValueMap};
use crate::traits::Processor;

/// Error key recorded for a pipeline fault under [`FailureStrategy::RecordAndContinue`].
pub const PROCESSING_ERROR_KEY: &str = "processing_error";

/// What the handler does when a property's pipeline faults.
///
/// Configuration and lookup errors are never subject to this; they always propagate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Re-raise as [`PipelineError::ProcessingFailed`] carrying the property name.
    #[default]
    FailFast,
    /// Record a `processing_error` for the property and hand back the original value.
    RecordAndContinue,
}

/// Snapshot of processed values, stamped when it was taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedValues {
    pub values: ValueMap,
    pub timestamp: DateTime<Utc>,
}

/// Runs each property's processors and collects the outcome.
///
/// For one `(property, value)` the handler asks its [`MetadataSource`] for specs,
/// resolves them through the [`ProcessorBuilder`], runs the pipeline and then asks
/// every validatable processor that took part whether it passed. Processed values
/// and validation failures both land in a [`ProcessingResultCollection`] that
/// lives until [`reset`](Self::reset).
///
/// A validation failure is not a fault: the processed value is still recorded
/// and returned.
pub struct ProcessorAttributeHandler {
    context: String,
    builder: ProcessorBuilder,
    metadata: Arc<dyn MetadataSource>,
    failure_strategy: FailureStrategy,
    results: ProcessingResultCollection,
}

impl ProcessorAttributeHandler {
    pub fn new(
        context: impl Into<String>,
        builder: ProcessorBuilder,
        metadata: Arc<dyn MetadataSource>,
    ) -> Self {
        Self {
            context: context.into(),
            builder,
            metadata,
            failure_strategy: FailureStrategy::default(),
            results: ProcessingResultCollection::new(),
        }
    }

    pub fn with_failure_strategy(mut self, failure_strategy: FailureStrategy) -> Self {
        self.failure_strategy = failure_strategy;
        self
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn failure_strategy(&self) -> FailureStrategy {
        self.failure_strategy
    }

    /// Process one property value and record the outcome.
    ///
    /// A property without specs is returned unchanged and nothing is recorded.
    /// Validators are checked right after their own step, so a validator listed
    /// twice reports each of its runs.
    pub fn process_property_value(&mut self, property: &str, value: Value) -> PipelineResult<Value> {
        let specs = self.metadata.processor_specs(property);
        if specs.is_empty() {
            PropertySkipped { property }.log();
            return Ok(value);
        }

        let resolved = self.builder.resolve(&self.context, &specs)?;
        let pipeline = resolved
            .iter()
            .fold(ProcessorPipeline::new(), |mut pipeline, entry| {
                pipeline.add_processor(Arc::clone(&entry.processor));
                pipeline
            });

        let messages = self.metadata.messages(property);
        let mut failures = Vec::new();
        let original = value.clone();
        let outcome = pipeline.process_with(value, |step, processor| {
            if let Some(failure) = validation_failure(&resolved[step].name, processor, &messages) {
                failures.push(failure);
            }
        });

        match outcome {
            Ok(processed) => {
                self.results.set_processed_data(property, processed.clone());
                self.record_validation_failures(property, failures);
                Ok(processed)
            }
            Err(error) => self.handle_fault(property, original, failures, error),
        }
    }

    /// Process every field of `record`, then every annotated property the record
    /// lacks, as `null`.
    ///
    /// Under [`FailureStrategy::FailFast`] the first fault aborts the record;
    /// results recorded for earlier fields stay in the collection.
    pub fn process_record(&mut self, record: &Map<String, Value>) -> PipelineResult<Map<String, Value>> {
        let mut processed = Map::with_capacity(record.len());
        for (property, value) in record {
            let output = self.process_property_value(property, value.clone())?;
            processed.insert(property.clone(), output);
        }

        for property in self.metadata.properties() {
            if record.contains_key(&property) {
                continue;
            }
            let output = self.process_property_value(&property, Value::Null)?;
            processed.insert(property, output);
        }

        Ok(processed)
    }

    pub fn processed_property_values(&self) -> ProcessedValues {
        ProcessedValues {
            values: self.results.processed_data(),
            timestamp: Utc::now(),
        }
    }

    pub fn processing_result_errors(&self) -> ErrorMap {
        self.results.errors()
    }

    pub fn has_errors(&self) -> bool {
        self.results.has_errors()
    }

    pub fn processing_results(&self) -> &ProcessingResultCollection {
        &self.results
    }

    /// Start a fresh result collection. Registry and builder are untouched.
    pub fn reset(&mut self) {
        self.results = ProcessingResultCollection::new();
    }

    fn record_validation_failures(&mut self, property: &str, failures: Vec<ValidationOutcome>) {
        for failure in failures {
            ValidationFailed {
                property,
                processor: &failure.processor,
                error_key: &failure.error_key,
            }
            .log();

            self.results.add_error(property, &failure.error_key, &failure.message);
        }
    }

    /// Steps before the fault ran to completion, so their validation outcomes are
    /// kept under [`FailureStrategy::RecordAndContinue`].
    fn handle_fault(
        &mut self,
        property: &str,
        original: Value,
        failures: Vec<ValidationOutcome>,
        error: PipelineError,
    ) -> PipelineResult<Value> {
        match self.failure_strategy {
            FailureStrategy::FailFast => {
                PropertyProcessingFailed {
                    property,
                    error: &error,
                    recorded: false,
                }
                .log();

                Err(PipelineError::ProcessingFailed {
                    property: property.to_string(),
                    source: Box::new(error),
                })
            }
            FailureStrategy::RecordAndContinue => {
                PropertyProcessingFailed {
                    property,
                    error: &error,
                    recorded: true,
                }
                .log();

                self.record_validation_failures(property, failures);
                let message = match error.processor_fault() {
                    Some((_, fault)) => fault.to_string(),
                    None => error.to_string(),
                };
                self.results.add_error(property, PROCESSING_ERROR_KEY, &message);
                Ok(original)
            }
        }
    }
}

/// A failed validator step, with its message already resolved.
struct ValidationOutcome {
    processor: String,
    error_key: String,
    message: String,
}

/// Message order: custom message for the registered name, then the processor's
/// own message, then a generic one.
fn validation_failure(
    name: &str,
    processor: &dyn Processor,
    messages: &HashMap<String, String>,
) -> Option<ValidationOutcome> {
    let validatable = processor.as_validatable()?;
    if validatable.is_valid() {
        return None;
    }

    let message = messages
        .get(name)
        .cloned()
        .or_else(|| validatable.error_message())
        .unwrap_or_else(|| format!("Validation failed for {}", name));

    Some(ValidationOutcome {
        processor: name.to_string(),
        error_key: validatable.error_key(),
        message,
    })
}

impl std::fmt::Debug for ProcessorAttributeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorAttributeHandler")
            .field("context", &self.context)
            .field("failure_strategy", &self.failure_strategy)
            .field("results", &self.results)
            .finish()
    }
}
