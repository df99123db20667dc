// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and resolution events.
//!
//! This module contains message types for logging events related to:
//! * Validation state resets before a step runs
//! * Processor configuration
//! * Spec entries skipped during normalization

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Validatable processor reset before its step.
///
/// # Log Level
/// `trace!` - Happens on every validator step
pub struct ProcessorStateReset<'a> {
    pub processor: &'a str,
    pub step: usize,
}

impl Display for ProcessorStateReset<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Reset validation state of '{}' before step {}",
            self.processor, self.step
        )
    }
}

impl StructuredLog for ProcessorStateReset<'_> {
    fn log(&self) {
        tracing::trace!(processor = self.processor, step = self.step, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "processor_reset",
            span_name = name,
            processor = self.processor,
            step = self.step,
        )
    }
}

/// Configurable processor produced a configured instance.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use processor_pipeline::observability::messages::processor::ProcessorConfigured;
///
/// let msg = ProcessorConfigured {
///     context: "user",
///     name: "range",
///     option_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorConfigured<'a> {
    pub context: &'a str,
    pub name: &'a str,
    pub option_count: usize,
}

impl Display for ProcessorConfigured<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configured processor '{}' in context '{}' with {} options",
            self.name, self.context, self.option_count
        )
    }
}

impl StructuredLog for ProcessorConfigured<'_> {
    fn log(&self) {
        tracing::debug!(
            context = self.context,
            name = self.name,
            option_count = self.option_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_configured",
            span_name = name,
            context = self.context,
            name = self.name,
            option_count = self.option_count,
        )
    }
}

/// Options supplied for a processor that does not take any.
///
/// # Log Level
/// `debug!` - Ignored by contract, but worth seeing when tuning specs
pub struct ProcessorOptionsIgnored<'a> {
    pub context: &'a str,
    pub name: &'a str,
}

impl Display for ProcessorOptionsIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' in context '{}' is not configurable; options ignored",
            self.name, self.context
        )
    }
}

impl StructuredLog for ProcessorOptionsIgnored<'_> {
    fn log(&self) {
        tracing::debug!(context = self.context, name = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_options_ignored",
            span_name = name,
            context = self.context,
            name = self.name,
        )
    }
}

/// Disabled or unusable spec entry skipped.
///
/// # Log Level
/// `debug!` - Skipping is normal behaviour
pub struct ProcessorSpecSkipped<'a> {
    pub context: &'a str,
    pub entry: &'a str,
}

impl Display for ProcessorSpecSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping disabled processor spec '{}' in context '{}'",
            self.entry, self.context
        )
    }
}

impl StructuredLog for ProcessorSpecSkipped<'_> {
    fn log(&self) {
        tracing::debug!(context = self.context, entry = self.entry, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_spec_skipped",
            span_name = name,
            context = self.context,
            entry = self.entry,
        )
    }
}
