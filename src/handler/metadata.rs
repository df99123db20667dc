// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::ProcessorSpecList;

/// Source of per-property processor specs and custom validation messages.
///
/// Implementations decide where the annotations come from (a config file,
/// derive output, a database). The handler only ever asks about one property.
pub trait MetadataSource: Send + Sync {
    /// Ordered specs for `property`; empty when the property is not annotated.
    fn processor_specs(&self, property: &str) -> ProcessorSpecList;

    /// Custom messages for `property`, keyed by processor name.
    fn messages(&self, property: &str) -> HashMap<String, String>;

    /// Every annotated property, in declaration order. A record missing one of
    /// these still has it processed, as `null`.
    fn properties(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
pub struct PropertyMetadata {
    pub processors: ProcessorSpecList,
    pub messages: HashMap<String, String>,
}

/// In-memory metadata, built up front and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataSource {
    properties: IndexMap<String, PropertyMetadata>,
}

impl StaticMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, property: &str, processors: ProcessorSpecList) -> Self {
        self.properties.entry(property.to_string()).or_default().processors = processors;
        self
    }

    pub fn with_message(mut self, property: &str, processor: &str, message: &str) -> Self {
        self.properties
            .entry(property.to_string())
            .or_default()
            .messages
            .insert(processor.to_string(), message.to_string());
        self
    }

    pub fn insert(&mut self, property: &str, metadata: PropertyMetadata) {
        self.properties.insert(property.to_string(), metadata);
    }
}

impl MetadataSource for StaticMetadataSource {
    fn processor_specs(&self, property: &str) -> ProcessorSpecList {
        self.properties
            .get(property)
            .map(|metadata| metadata.processors.clone())
            .unwrap_or_default()
    }

    fn messages(&self, property: &str) -> HashMap<String, String> {
        self.properties
            .get(property)
            .map(|metadata| metadata.messages.clone())
            .unwrap_or_default()
    }

    fn properties(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }
}
