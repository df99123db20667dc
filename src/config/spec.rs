// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor spec normalization.
//!
//! Callers describe which processors to run tersely, and the raw shape is ambiguous:
//!
//! ```yaml
//! email:
//!   - trim                      # positional entry, bare name
//!   - lowercase: true           # named entry, config-less enable
//!   - length: { min: 3 }        # named entry with options
//!   - upper_case: false         # explicitly disabled
//! ```
//!
//! or as a map `{ trim: true, upper_case: false, length: { min: 3 } }`. Each raw
//! `(key, value)` entry is normalized into a [`ProcessorSpec`] by
//! [`ProcessorSpec::normalize`]; disabled or unusable entries are skipped, never
//! reported as errors.

use serde_json::Value;

use crate::traits::ProcessorOptions;

/// Key of one raw spec entry: a positional marker or a processor name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecKey {
    Index(usize),
    Name(String),
}

/// A normalized processor spec.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorSpec {
    Disabled,
    Enabled(String),
    EnabledWithConfig(String, ProcessorOptions),
}

impl ProcessorSpec {
    /// Normalize one raw `(key, value)` entry.
    ///
    /// * positional key: a string value is the name; a single-entry map `{name: config}`
    ///   is normalized as if `name` had been the key
    /// * named key: `true` enables without options, a map enables with options
    ///   (an empty map counts as no options); `false`, `null` and anything else disable
    pub fn normalize(key: &SpecKey, value: &Value) -> ProcessorSpec {
        match key {
            SpecKey::Index(_) => match value {
                Value::String(name) => Self::enabled(name, ProcessorOptions::new()),
                Value::Object(map) if map.len() == 1 => match map.iter().next() {
                    Some((name, config)) => Self::normalize(&SpecKey::Name(name.clone()), config),
                    None => ProcessorSpec::Disabled,
                },
                _ => ProcessorSpec::Disabled,
            },
            SpecKey::Name(name) => match value {
                Value::Bool(true) => Self::enabled(name, ProcessorOptions::new()),
                Value::Object(options) => Self::enabled(name, options.clone()),
                _ => ProcessorSpec::Disabled,
            },
        }
    }

    fn enabled(name: &str, options: ProcessorOptions) -> ProcessorSpec {
        let name = name.trim();
        if name.is_empty() {
            ProcessorSpec::Disabled
        } else if options.is_empty() {
            ProcessorSpec::Enabled(name.to_string())
        } else {
            ProcessorSpec::EnabledWithConfig(name.to_string(), options)
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProcessorSpec::Disabled => None,
            ProcessorSpec::Enabled(name) | ProcessorSpec::EnabledWithConfig(name, _) => Some(name),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, ProcessorSpec::Disabled)
    }
}

/// Ordered list of raw spec entries for one property.
///
/// Order is execution order and is never rearranged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorSpecList(Vec<(SpecKey, Value)>);

impl ProcessorSpecList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a positional entry (`- trim`).
    pub fn push_name(mut self, name: impl Into<String>) -> Self {
        let index = self.0.len();
        self.0.push((SpecKey::Index(index), Value::String(name.into())));
        self
    }

    /// Append a named entry (`trim: true`, `length: {min: 3}`, `upper_case: false`).
    pub fn push_entry(mut self, name: impl Into<String>, value: Value) -> Self {
        self.0.push((SpecKey::Name(name.into()), value));
        self
    }

    /// Build from a raw JSON/YAML value: an array gives positional entries, an
    /// object gives named entries in declaration order. Any other shape is empty.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (SpecKey::Index(index), item.clone()))
                    .collect(),
            ),
            Value::Object(map) => Self(
                map.iter()
                    .map(|(name, config)| (SpecKey::Name(name.clone()), config.clone()))
                    .collect(),
            ),
            _ => Self::new(),
        }
    }

    pub fn entries(&self) -> &[(SpecKey, Value)] {
        &self.0
    }

    /// All entries normalized, disabled ones included, in order.
    pub fn normalized(&self) -> impl Iterator<Item = ProcessorSpec> + '_ {
        self.0.iter().map(|(key, value)| ProcessorSpec::normalize(key, value))
    }

    /// Enabled specs only, in order.
    pub fn specs(&self) -> Vec<ProcessorSpec> {
        self.normalized().filter(ProcessorSpec::is_enabled).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ProcessorSpecList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ProcessorSpecList::new(), |list, name| list.push_name(name))
    }
}

impl From<&Value> for ProcessorSpecList {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}
