// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor registry events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor bound to a (context, name) pair.
///
/// # Log Level
/// `debug!` for a fresh binding, `info!` when an existing binding is replaced
pub struct ProcessorRegistered<'a> {
    pub context: &'a str,
    pub name: &'a str,
    pub replaced: bool,
}

impl Display for ProcessorRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.replaced {
            write!(
                f,
                "Replaced processor '{}' in context '{}'",
                self.name, self.context
            )
        } else {
            write!(
                f,
                "Registered processor '{}' in context '{}'",
                self.name, self.context
            )
        }
    }
}

impl StructuredLog for ProcessorRegistered<'_> {
    fn log(&self) {
        if self.replaced {
            tracing::info!(context = self.context, name = self.name, replaced = true, "{}", self);
        } else {
            tracing::debug!(context = self.context, name = self.name, replaced = false, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_registered",
            span_name = name,
            context = self.context,
            name = self.name,
            replaced = self.replaced,
        )
    }
}

/// Lookup against the registry failed.
///
/// # Log Level
/// `error!` - Missing processors are misconfiguration
pub struct ProcessorLookupFailed<'a> {
    pub context: &'a str,
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorLookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Lookup of processor '{}' in context '{}' failed: {}",
            self.name, self.context, self.error
        )
    }
}

impl StructuredLog for ProcessorLookupFailed<'_> {
    fn log(&self) {
        tracing::error!(
            context = self.context,
            name = self.name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_lookup_failed",
            span_name = name,
            context = self.context,
            name = self.name,
            error = %self.error,
        )
    }
}

/// Registration ignored because the context name is blank.
///
/// # Log Level
/// `warn!` - The binding could never be built
pub struct ProcessorRegistrationRejected<'a> {
    pub context: &'a str,
    pub name: &'a str,
}

impl Display for ProcessorRegistrationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignored processor '{}': context name must not be empty",
            self.name
        )
    }
}

impl StructuredLog for ProcessorRegistrationRejected<'_> {
    fn log(&self) {
        tracing::warn!(context = self.context, name = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "processor_registration_rejected",
            span_name = name,
            context = self.context,
            name = self.name,
        )
    }
}
