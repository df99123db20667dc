// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while resolving, building and running processor pipelines.
//!
//! Every variant carries a stable numeric code and a short machine-readable key so
//! callers can branch on the kind without matching on message text.

use thiserror::Error;

use crate::traits::ProcessorFault;

pub const CODE_CONTEXT_NOT_FOUND: u32 = 2601;
pub const CODE_PROCESSOR_NOT_FOUND: u32 = 2602;
pub const CODE_INVALID_PROCESSOR: u32 = 2603;
pub const CODE_INVALID_CONTEXT: u32 = 2604;
pub const CODE_PROCESSOR_CONFIG_INVALID: u32 = 2605;
pub const CODE_PROCESSING_FAILED: u32 = 2606;
pub const CODE_PIPELINE_FAILED: u32 = 3001;
pub const CODE_PROCESSOR_FAILED: u32 = 3002;

/// Convenience result type for registry, builder and pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// No processor has been registered under the context.
    #[error("Processor context '{context}' not found")]
    ContextNotFound { context: String },

    /// The context exists but has no processor with this name.
    #[error("Processor '{name}' not found in context '{context}'")]
    ProcessorNotFound { name: String, context: String },

    /// The processor lacks the capability the operation needs.
    #[error("Invalid processor '{name}': {details}")]
    InvalidProcessor { name: String, details: String },

    #[error("Invalid processor context '{context}': {details}")]
    InvalidContext { context: String, details: String },

    /// Options rejected by a configurable processor.
    #[error("Invalid processor configuration for '{name}': {details}")]
    InvalidConfiguration { name: String, details: String },

    /// A property's pipeline run faulted.
    #[error("Processing failed for property '{property}'")]
    ProcessingFailed {
        property: String,
        #[source]
        source: Box<PipelineError>,
    },

    /// Pipeline-level wrapper around a failing step.
    #[error("Pipeline processing failed at processor '{processor}'")]
    PipelineExecutionFailed {
        processor: String,
        #[source]
        source: Box<PipelineError>,
    },

    /// A single processor raised a fault during `process`.
    #[error("Processor {processor} execution failed at step {step}")]
    ProcessorExecutionFailed {
        processor: String,
        step: usize,
        #[source]
        source: ProcessorFault,
    },
}

impl PipelineError {
    pub fn code(&self) -> u32 {
        match self {
            PipelineError::ContextNotFound { .. } => CODE_CONTEXT_NOT_FOUND,
            PipelineError::ProcessorNotFound { .. } => CODE_PROCESSOR_NOT_FOUND,
            PipelineError::InvalidProcessor { .. } => CODE_INVALID_PROCESSOR,
            PipelineError::InvalidContext { .. } => CODE_INVALID_CONTEXT,
            PipelineError::InvalidConfiguration { .. } => CODE_PROCESSOR_CONFIG_INVALID,
            PipelineError::ProcessingFailed { .. } => CODE_PROCESSING_FAILED,
            PipelineError::PipelineExecutionFailed { .. } => CODE_PIPELINE_FAILED,
            PipelineError::ProcessorExecutionFailed { .. } => CODE_PROCESSOR_FAILED,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PipelineError::ContextNotFound { .. } => "PROCESSOR_CONTEXT_NOT_FOUND",
            PipelineError::ProcessorNotFound { .. } => "PROCESSOR_NOT_FOUND",
            PipelineError::InvalidProcessor { .. } => "PROCESSOR_INVALID",
            PipelineError::InvalidContext { .. } => "PROCESSOR_CONTEXT_INVALID",
            PipelineError::InvalidConfiguration { .. } => "PROCESSOR_CONFIG_INVALID",
            PipelineError::ProcessingFailed { .. } => "PROCESSOR_PROCESSING_FAILED",
            PipelineError::PipelineExecutionFailed { .. } => "PIPELINE_FAILED",
            PipelineError::ProcessorExecutionFailed { .. } => "PROCESSOR_FAILED",
        }
    }

    /// Walk the wrapper chain down to the step that actually faulted.
    ///
    /// Returns the processor name and its original fault, or `None` when the error
    /// did not come from processor logic (e.g. a lookup failure).
    pub fn processor_fault(&self) -> Option<(&str, &ProcessorFault)> {
        match self {
            PipelineError::ProcessorExecutionFailed {
                processor, source, ..
            } => Some((processor.as_str(), source)),
            PipelineError::PipelineExecutionFailed { source, .. }
            | PipelineError::ProcessingFailed { source, .. } => source.processor_fault(),
            _ => None,
        }
    }
}
