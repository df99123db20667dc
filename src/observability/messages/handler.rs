// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for per-property orchestration.
//!
//! This module contains message types for logging events related to:
//! * Properties without processors
//! * Validation failures recorded into the result collection
//! * Pipeline faults and how the handler dealt with them

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Property has no processor specs; its value passes through.
///
/// # Log Level
/// `trace!` - Common for unannotated properties
pub struct PropertySkipped<'a> {
    pub property: &'a str,
}

impl Display for PropertySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No processors for property '{}'; value unchanged", self.property)
    }
}

impl StructuredLog for PropertySkipped<'_> {
    fn log(&self) {
        tracing::trace!(property = self.property, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("property_skipped", span_name = name, property = self.property)
    }
}

/// Validator rejected a property value.
///
/// # Log Level
/// `debug!` - A normal data outcome, not a fault
///
/// # Example
/// ```
/// use processor_pipeline::observability::messages::handler::ValidationFailed;
///
/// let msg = ValidationFailed {
///     property: "age",
///     processor: "range",
///     error_key: "out_of_range",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ValidationFailed<'a> {
    pub property: &'a str,
    pub processor: &'a str,
    pub error_key: &'a str,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Property '{}' failed validation by '{}': {}",
            self.property, self.processor, self.error_key
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            property = self.property,
            processor = self.processor,
            error_key = self.error_key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "validation_failed",
            span_name = name,
            property = self.property,
            processor = self.processor,
            error_key = self.error_key,
        )
    }
}

/// Pipeline for a property faulted.
///
/// # Log Level
/// `error!` when re-raised, `warn!` when recorded and swallowed
pub struct PropertyProcessingFailed<'a> {
    pub property: &'a str,
    pub error: &'a dyn std::error::Error,
    pub recorded: bool,
}

impl Display for PropertyProcessingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let outcome = if self.recorded {
            "recorded as error, original value kept"
        } else {
            "re-raised"
        };
        write!(
            f,
            "Processing failed for property '{}' ({}): {}",
            self.property, outcome, self.error
        )
    }
}

impl StructuredLog for PropertyProcessingFailed<'_> {
    fn log(&self) {
        if self.recorded {
            tracing::warn!(property = self.property, error = %self.error, recorded = true, "{}", self);
        } else {
            tracing::error!(property = self.property, error = %self.error, recorded = false, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "property_processing_failed",
            span_name = name,
            property = self.property,
            error = %self.error,
            recorded = self.recorded,
        )
    }
}
