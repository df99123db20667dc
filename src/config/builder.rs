// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::registry::ProcessorRegistry;
use crate::config::spec::{ProcessorSpec, ProcessorSpecList, SpecKey};
use crate::engine::ProcessorPipeline;
use crate::errors::{PipelineError, PipelineResult};
use crate::observability::messages::processor::{
    ProcessorConfigured, ProcessorOptionsIgnored, ProcessorSpecSkipped,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Processor, ProcessorOptions};

/// A processor resolved from a spec, paired with the name it was registered under.
#[derive(Clone)]
pub struct ResolvedProcessor {
    pub name: String,
    pub processor: Arc<dyn Processor>,
}

impl std::fmt::Debug for ResolvedProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedProcessor")
            .field("name", &self.name)
            .field("processor", &self.processor.name())
            .finish()
    }
}

/// Resolves processor specs against a registry and assembles pipelines.
///
/// Registry and configuration errors are never recovered here; they indicate
/// misconfiguration and go straight back to the caller.
#[derive(Debug, Clone)]
pub struct ProcessorBuilder {
    registry: Arc<ProcessorRegistry>,
}

impl ProcessorBuilder {
    pub fn new(registry: Arc<ProcessorRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Resolve one processor.
    ///
    /// With no options the registered instance itself is returned. With options, a
    /// configurable processor yields a freshly configured instance and the registered
    /// one stays untouched; a non-configurable processor ignores the options.
    pub fn build(
        &self,
        context: &str,
        name: &str,
        options: &ProcessorOptions,
    ) -> PipelineResult<Arc<dyn Processor>> {
        if context.trim().is_empty() {
            return Err(PipelineError::InvalidContext {
                context: context.to_string(),
                details: "context name must not be empty".to_string(),
            });
        }

        let processor = self.registry.get(context, name)?;
        if options.is_empty() {
            return Ok(processor);
        }

        match processor.as_configurable() {
            Some(configurable) => {
                let configured = configurable.configure(options).map_err(|error| match error {
                    PipelineError::InvalidConfiguration { details, .. } => {
                        PipelineError::InvalidConfiguration {
                            name: name.to_string(),
                            details,
                        }
                    }
                    other => other,
                })?;

                ProcessorConfigured {
                    context,
                    name,
                    option_count: options.len(),
                }
                .log();

                Ok(configured)
            }
            None => {
                ProcessorOptionsIgnored { context, name }.log();
                Ok(processor)
            }
        }
    }

    /// Resolve every enabled spec, in order, keeping registered names alongside.
    pub fn resolve(
        &self,
        context: &str,
        specs: &ProcessorSpecList,
    ) -> PipelineResult<Vec<ResolvedProcessor>> {
        let mut resolved = Vec::with_capacity(specs.len());

        for (key, value) in specs.entries() {
            match ProcessorSpec::normalize(key, value) {
                ProcessorSpec::Disabled => {
                    let entry = match key {
                        SpecKey::Index(index) => format!("#{}", index),
                        SpecKey::Name(name) => name.clone(),
                    };
                    ProcessorSpecSkipped {
                        context,
                        entry: &entry,
                    }
                    .log();
                }
                ProcessorSpec::Enabled(name) => {
                    let processor = self.build(context, &name, &ProcessorOptions::new())?;
                    resolved.push(ResolvedProcessor { name, processor });
                }
                ProcessorSpec::EnabledWithConfig(name, options) => {
                    let processor = self.build(context, &name, &options)?;
                    resolved.push(ResolvedProcessor { name, processor });
                }
            }
        }

        Ok(resolved)
    }

    /// Build a pipeline whose execution order is the spec order.
    ///
    /// A list with no usable entries gives an empty pipeline.
    pub fn build_pipeline(
        &self,
        context: &str,
        specs: &ProcessorSpecList,
    ) -> PipelineResult<ProcessorPipeline> {
        let pipeline = self
            .resolve(context, specs)?
            .into_iter()
            .fold(ProcessorPipeline::new(), |mut pipeline, resolved| {
                pipeline.add_processor(resolved.processor);
                pipeline
            });

        Ok(pipeline)
    }
}
