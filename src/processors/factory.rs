// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::*;
use crate::config::ProcessorRegistry;
use crate::errors::{PipelineError, PipelineResult};
use crate::traits::Processor;

/// Factory for the built-in processors
pub struct BuiltinProcessors;

impl BuiltinProcessors {
    /// Create a fresh built-in processor by the name it is registered under:
    /// - "trim" -> TrimProcessor
    /// - "lowercase" / "uppercase" / "proper_case" -> ChangeTextCaseProcessor with that case
    /// - "change_text_case" -> ChangeTextCaseProcessor (lowercase until configured)
    /// - "prefix_suffix_adder" -> PrefixSuffixAdderProcessor (no-op until configured)
    /// - "required", "email" -> validators
    /// - "range", "length" -> configurable validators, unbounded until configured
    pub fn create(name: &str) -> PipelineResult<Arc<dyn Processor>> {
        match name {
            "trim" => Ok(Arc::new(TrimProcessor::new())),

            "lowercase" | "change_text_case" => Ok(Arc::new(ChangeTextCaseProcessor::lower())),
            "uppercase" => Ok(Arc::new(ChangeTextCaseProcessor::upper())),
            "proper_case" => Ok(Arc::new(ChangeTextCaseProcessor::proper())),
            "prefix_suffix_adder" => Ok(Arc::new(PrefixSuffixAdderProcessor::default())),

            "required" => Ok(Arc::new(RequiredProcessor::new())),
            "email" => Ok(Arc::new(EmailProcessor::new())),
            "range" => Ok(Arc::new(RangeProcessor::default())),
            "length" => Ok(Arc::new(LengthProcessor::default())),

            _ => Err(PipelineError::InvalidProcessor {
                name: name.to_string(),
                details: "no built-in processor has this name".to_string(),
            }),
        }
    }

    pub fn available() -> Vec<&'static str> {
        vec![
            "trim",
            "lowercase",
            "uppercase",
            "proper_case",
            "change_text_case",
            "prefix_suffix_adder",
            "required",
            "email",
            "range",
            "length",
        ]
    }

    pub fn is_available(name: &str) -> bool {
        Self::available().contains(&name)
    }

    /// Register every built-in under `context`, each name getting its own instance.
    pub fn register_all(registry: &mut ProcessorRegistry, context: &str) -> PipelineResult<()> {
        for name in Self::available() {
            registry.register(context, name, Self::create(name)?);
        }
        Ok(())
    }
}

/// Populate `registry` with the built-in processors under `context`.
pub fn register_builtin_processors(
    registry: &mut ProcessorRegistry,
    context: &str,
) -> PipelineResult<()> {
    BuiltinProcessors::register_all(registry, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_available_name_can_be_created() {
        for name in BuiltinProcessors::available() {
            assert!(BuiltinProcessors::create(name).is_ok(), "name {}", name);
            assert!(BuiltinProcessors::is_available(name));
        }
        assert!(!BuiltinProcessors::is_available("reverse_text"));
    }

    #[test]
    fn test_unknown_name_is_invalid_processor() {
        let error = BuiltinProcessors::create("reverse_text").err().unwrap();
        assert_eq!(error.key(), "PROCESSOR_INVALID");
    }

    #[test]
    fn test_case_aliases() {
        let test_cases = vec![
            ("lowercase", "MiXeD", "mixed"),
            ("uppercase", "MiXeD", "MIXED"),
            ("proper_case", "miXED case", "Mixed Case"),
        ];

        for (name, input, expected) in test_cases {
            let processor = BuiltinProcessors::create(name).unwrap();
            assert_eq!(processor.process(json!(input)).unwrap(), json!(expected), "name {}", name);
        }
    }

    #[test]
    fn test_register_builtin_processors() {
        let mut registry = ProcessorRegistry::new();
        register_builtin_processors(&mut registry, "user").unwrap();

        assert_eq!(registry.len(), BuiltinProcessors::available().len());
        for name in BuiltinProcessors::available() {
            assert!(registry.contains("user", name), "name {}", name);
        }
        assert!(registry.get("user", "email").unwrap().as_validatable().is_some());
        assert!(registry.get("user", "trim").unwrap().as_validatable().is_none());
    }
}
