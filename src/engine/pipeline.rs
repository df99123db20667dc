// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::errors::{PipelineError, PipelineResult};
use crate::observability::messages::engine::{PipelineCompleted, PipelineFailed, PipelineStarted};
use crate::observability::messages::processor::ProcessorStateReset;
use crate::observability::messages::StructuredLog;
use crate::traits::Processor;

/// Ordered, strictly sequential chain of processors applied to one value.
///
/// Each processor's output becomes the next one's input:
///
/// ```text
/// acc0 = input;  acc(i) = processors[i].process(acc(i-1));  result = acc(n)
/// ```
///
/// Processors are shared with the registry, not owned. Before a validatable
/// processor runs its `reset` hook is called, so pass/fail state from an earlier
/// value never leaks into this run. A processor fault stops the fold and comes
/// back as [`PipelineError::PipelineExecutionFailed`] naming the processor, with
/// the per-step [`PipelineError::ProcessorExecutionFailed`] as its source.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use processor_pipeline::engine::ProcessorPipeline;
/// use processor_pipeline::processors::{ChangeTextCaseProcessor, TrimProcessor};
///
/// let mut pipeline = ProcessorPipeline::new();
/// pipeline
///     .add_processor(Arc::new(TrimProcessor::new()))
///     .add_processor(Arc::new(ChangeTextCaseProcessor::lower()));
///
/// let output = pipeline.process(json!("  A@B.COM  ")).unwrap();
/// assert_eq!(output, json!("a@b.com"));
/// ```
#[derive(Default, Clone)]
pub struct ProcessorPipeline {
    processors: Vec<Arc<dyn Processor>>,
}

impl ProcessorPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_processor(&mut self, processor: Arc<dyn Processor>) -> &mut Self {
        self.processors.push(processor);
        self
    }

    /// Run the fold. An empty pipeline returns `input` unchanged.
    pub fn process(&self, input: Value) -> PipelineResult<Value> {
        self.process_with(input, |_, _| {})
    }

    /// Run the fold, calling `after_step` with the step index and processor as soon
    /// as each step has produced its output.
    ///
    /// A validatable processor's state is only guaranteed to describe its own step
    /// inside `after_step`; the same instance may be reset again further down.
    pub fn process_with<F>(&self, input: Value, mut after_step: F) -> PipelineResult<Value>
    where
        F: FnMut(usize, &dyn Processor),
    {
        if self.processors.is_empty() {
            return Ok(input);
        }

        let started_at = Instant::now();
        PipelineStarted {
            processor_count: self.processors.len(),
        }
        .log();

        let mut acc = input;
        for (step, processor) in self.processors.iter().enumerate() {
            if let Some(validatable) = processor.as_validatable() {
                validatable.reset();
                ProcessorStateReset {
                    processor: processor.name(),
                    step,
                }
                .log();
            }

            acc = processor.process(acc).map_err(|fault| {
                let failure = PipelineError::ProcessorExecutionFailed {
                    processor: processor.name().to_string(),
                    step,
                    source: fault,
                };

                PipelineFailed {
                    processor: processor.name(),
                    step,
                    error: &failure,
                }
                .log();

                PipelineError::PipelineExecutionFailed {
                    processor: processor.name().to_string(),
                    source: Box::new(failure),
                }
            })?;

            after_step(step, &**processor);
        }

        PipelineCompleted {
            processor_count: self.processors.len(),
            duration: started_at.elapsed(),
        }
        .log();

        Ok(acc)
    }

    pub fn processors(&self) -> &[Arc<dyn Processor>] {
        &self.processors
    }

    pub fn has_processors(&self) -> bool {
        !self.processors.is_empty()
    }

    pub fn count(&self) -> usize {
        self.processors.len()
    }

    pub fn clear(&mut self) {
        self.processors.clear();
    }
}

impl std::fmt::Debug for ProcessorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorPipeline")
            .field(
                "processors",
                &self.processors.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
