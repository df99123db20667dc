// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::config::{load_and_validate_config, ProcessorBuilder, ProcessorRegistry};
    use crate::handler::{FailureStrategy, MetadataSource, ProcessorAttributeHandler};
    use crate::processors::register_builtin_processors;

    /// Test that the bundled YAML configuration loads and validates
    #[test]
    fn test_user_yaml_loading() {
        let config = load_and_validate_config("configs/user.yaml").unwrap();

        assert_eq!(config.context, "user");
        assert_eq!(config.failure_strategy, FailureStrategy::RecordAndContinue);
        assert_eq!(
            config.properties.keys().collect::<Vec<_>>(),
            vec!["email", "name", "age", "phone"]
        );
        assert_eq!(config.properties["email"].specs().specs().len(), 4);
        // `uppercase: false` stays in the list but never runs
        assert_eq!(config.properties["phone"].specs().len(), 3);
        assert_eq!(config.properties["phone"].specs().specs().len(), 2);
    }

    /// Test that the TOML variant describes the same annotations
    #[test]
    fn test_user_toml_matches_yaml() {
        let yaml = load_and_validate_config("configs/user.yaml").unwrap();
        let toml = load_and_validate_config("configs/user.toml").unwrap();

        assert_eq!(toml.failure_strategy, FailureStrategy::FailFast);
        let yaml_source = yaml.metadata_source();
        let toml_source = toml.metadata_source();
        for property in ["email", "name", "age"] {
            let mut yaml_specs = yaml_source.processor_specs(property).specs();
            let mut toml_specs = toml_source.processor_specs(property).specs();
            // map-shaped specs are compared by content; list order is checked via email
            if property != "email" {
                yaml_specs.sort_by(|a, b| a.name().cmp(&b.name()));
                toml_specs.sort_by(|a, b| a.name().cmp(&b.name()));
            }
            assert_eq!(yaml_specs, toml_specs, "property {}", property);
            assert_eq!(yaml_source.messages(property), toml_source.messages(property));
        }
    }

    /// Test running the bundled sample record through the bundled config
    #[test]
    fn test_sample_record_end_to_end() {
        let config = load_and_validate_config("configs/user.yaml").unwrap();
        let record: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string("configs/user-record.json").unwrap()).unwrap();

        let mut registry = ProcessorRegistry::new();
        register_builtin_processors(&mut registry, &config.context).unwrap();
        let mut handler = ProcessorAttributeHandler::new(
            config.context.clone(),
            ProcessorBuilder::new(Arc::new(registry)),
            Arc::new(config.metadata_source()),
        )
        .with_failure_strategy(config.failure_strategy);

        let processed = handler.process_record(record.as_object().unwrap()).unwrap();

        assert_eq!(processed["email"], json!("ada@example.com"));
        assert_eq!(processed["name"], json!("Ada Lovelace"));
        assert_eq!(processed["phone"], json!("+1 555-0100"));
        assert_eq!(processed["referrer"], json!("newsletter"));

        let errors = handler.processing_result_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["age"][0].error_key, "out_of_range");
        assert!(!handler.processed_property_values().values.contains_key("referrer"));
    }
}
