// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{PipelineError, PipelineResult};
use crate::observability::messages::registry::{
    ProcessorLookupFailed, ProcessorRegistered, ProcessorRegistrationRejected,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Processor;

/// Processors keyed by name within one context.
pub type ContextProcessors = HashMap<String, Arc<dyn Processor>>;

/// Two-level registry: `context -> name -> processor`.
///
/// The registry is the single source of truth for whether a name exists in a
/// context. It is meant to be populated once at startup and then shared read-only
/// (typically behind an `Arc`) by every builder.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use processor_pipeline::config::ProcessorRegistry;
/// use processor_pipeline::processors::{TrimProcessor, ChangeTextCaseProcessor};
///
/// let mut registry = ProcessorRegistry::new();
/// registry
///     .register("user", "trim", Arc::new(TrimProcessor::new()))
///     .register("user", "lowercase", Arc::new(ChangeTextCaseProcessor::lower()));
///
/// assert!(registry.get("user", "trim").is_ok());
/// assert!(registry.get("order", "trim").is_err());
/// ```
#[derive(Default)]
pub struct ProcessorRegistry {
    contexts: HashMap<String, ContextProcessors>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `processor` to `(context, name)`, replacing any previous binding.
    ///
    /// A blank context is ignored with a warning, matching the builder, which
    /// refuses to build from one.
    pub fn register(
        &mut self,
        context: &str,
        name: &str,
        processor: Arc<dyn Processor>,
    ) -> &mut Self {
        if context.trim().is_empty() {
            ProcessorRegistrationRejected { context, name }.log();
            return self;
        }

        let replaced = self
            .contexts
            .entry(context.to_string())
            .or_default()
            .insert(name.to_string(), processor)
            .is_some();

        ProcessorRegistered {
            context,
            name,
            replaced,
        }
        .log();

        self
    }

    /// Look up the exact instance registered under `(context, name)`.
    pub fn get(&self, context: &str, name: &str) -> PipelineResult<Arc<dyn Processor>> {
        let lookup = self.context_processors(context).and_then(|processors| {
            processors
                .get(name)
                .cloned()
                .ok_or_else(|| PipelineError::ProcessorNotFound {
                    name: name.to_string(),
                    context: context.to_string(),
                })
        });

        if let Err(error) = &lookup {
            ProcessorLookupFailed {
                context,
                name,
                error,
            }
            .log();
        }

        lookup
    }

    pub fn context_processors(&self, context: &str) -> PipelineResult<&ContextProcessors> {
        self.contexts
            .get(context)
            .ok_or_else(|| PipelineError::ContextNotFound {
                context: context.to_string(),
            })
    }

    pub fn contains(&self, context: &str, name: &str) -> bool {
        self.contexts
            .get(context)
            .is_some_and(|processors| processors.contains_key(name))
    }

    /// Registered context names, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = &String> {
        self.contexts.keys()
    }

    /// Total number of bindings across all contexts.
    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut contexts: Vec<_> = self
            .contexts
            .iter()
            .map(|(context, processors)| (context.as_str(), processors.len()))
            .collect();
        contexts.sort_unstable();

        f.debug_struct("ProcessorRegistry")
            .field("processor_count", &self.len())
            .field("contexts", &contexts)
            .finish()
    }
}
