// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::{ProcessedData, ProcessingError};

/// One error as exposed to result consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub error_key: String,
    pub message: String,
}

/// Errors per property, in first-occurrence order.
pub type ErrorMap = IndexMap<String, Vec<ErrorEntry>>;

/// Latest processed value per property.
pub type ValueMap = IndexMap<String, Value>;

/// Aggregate view of a collection: `{isValid, errors, processedData}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub is_valid: bool,
    pub errors: ErrorMap,
    pub processed_data: ValueMap,
}

/// Per-property processed values and deduplicated errors for one processing unit.
///
/// Values are last-write-wins per property. Errors are keyed by their identity
/// hash, so repeating an identical `(property, key, message)` is a no-op; distinct
/// errors keep insertion order. Nothing is ever rolled back: an error recorded
/// after a value for the same property leaves the value in place.
///
/// The collection carries no synchronization. Use one per processing unit or
/// guard it externally.
#[derive(Debug, Clone, Default)]
pub struct ProcessingResultCollection {
    processed_data: IndexMap<String, ProcessedData>,
    errors: IndexMap<String, IndexMap<String, ProcessingError>>,
}

impl ProcessingResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_processed_data(&mut self, property: &str, value: Value) {
        self.add_processed_data(ProcessedData::new(property, value));
    }

    pub fn add_processed_data(&mut self, data: ProcessedData) {
        self.processed_data.insert(data.property().to_string(), data);
    }

    pub fn add_error(&mut self, property: &str, error_key: &str, message: &str) {
        self.add_processing_error(ProcessingError::new(property, error_key, message));
    }

    pub fn add_processing_error(&mut self, error: ProcessingError) {
        self.errors
            .entry(error.property().to_string())
            .or_default()
            .entry(error.hash().to_string())
            .or_insert(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Number of distinct errors across all properties.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(IndexMap::len).sum()
    }

    pub fn errors(&self) -> ErrorMap {
        self.errors
            .iter()
            .map(|(property, errors)| {
                let entries = errors
                    .values()
                    .map(|error| ErrorEntry {
                        error_key: error.error_key().to_string(),
                        message: error.message().to_string(),
                    })
                    .collect();
                (property.clone(), entries)
            })
            .collect()
    }

    /// Full error records for one property.
    pub fn property_errors(&self, property: &str) -> Vec<&ProcessingError> {
        self.errors
            .get(property)
            .map(|errors| errors.values().collect())
            .unwrap_or_default()
    }

    pub fn processed_data(&self) -> ValueMap {
        self.processed_data
            .iter()
            .map(|(property, data)| (property.clone(), data.value().clone()))
            .collect()
    }

    pub fn processed_entry(&self, property: &str) -> Option<&ProcessedData> {
        self.processed_data.get(property)
    }

    pub fn to_summary(&self) -> ProcessingSummary {
        ProcessingSummary {
            is_valid: self.is_valid(),
            errors: self.errors(),
            processed_data: self.processed_data(),
        }
    }

    pub fn clear(&mut self) {
        self.processed_data.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_error() {
        let mut collection = ProcessingResultCollection::new();
        collection.add_error("email", "invalid_email", "Invalid email format");

        let errors = collection.errors();
        assert_eq!(errors["email"].len(), 1);
        assert_eq!(errors["email"][0].error_key, "invalid_email");
        assert_eq!(errors["email"][0].message, "Invalid email format");
    }

    #[test]
    fn test_distinct_errors_for_same_property_keep_order() {
        let mut collection = ProcessingResultCollection::new();
        collection.add_error("email", "required", "Email is required");
        collection.add_error("email", "invalid", "Bad format");

        let errors = collection.errors();
        let keys: Vec<_> = errors["email"].iter().map(|e| e.error_key.as_str()).collect();
        assert_eq!(keys, vec!["required", "invalid"]);
        assert!(!collection.is_valid());
    }

    #[test]
    fn test_duplicate_error_is_stored_once() {
        let mut collection = ProcessingResultCollection::new();
        collection.add_error("email", "required", "Email is required");
        collection.add_error("email", "invalid", "Bad format");
        collection.add_error("email", "required", "Email is required");

        let errors = collection.errors();
        assert_eq!(errors["email"].len(), 2);
        assert_eq!(errors["email"][0].error_key, "required");
        assert_eq!(collection.error_count(), 2);
    }

    #[test]
    fn test_same_error_on_different_properties_is_kept_per_property() {
        let mut collection = ProcessingResultCollection::new();
        collection.add_error("email", "required", "Field is required");
        collection.add_error("name", "required", "Field is required");

        assert_eq!(collection.error_count(), 2);
        assert_eq!(collection.property_errors("name").len(), 1);
        assert!(collection.property_errors("age").is_empty());
    }

    #[test]
    fn test_processed_data_last_write_wins() {
        let mut collection = ProcessingResultCollection::new();
        collection.set_processed_data("email", json!("old@example.com"));
        collection.set_processed_data("email", json!("new@example.com"));

        let data = collection.processed_data();
        assert_eq!(data.len(), 1);
        assert_eq!(data["email"], json!("new@example.com"));
    }

    #[test]
    fn test_error_does_not_remove_processed_value() {
        let mut collection = ProcessingResultCollection::new();
        collection.set_processed_data("email", json!("a@b.com"));
        collection.add_error("email", "invalid", "Bad format");

        assert_eq!(collection.processed_data()["email"], json!("a@b.com"));
        assert!(collection.has_errors());
    }

    #[test]
    fn test_summary_with_no_data() {
        let summary = ProcessingResultCollection::new().to_summary();

        assert!(summary.is_valid);
        assert!(summary.errors.is_empty());
        assert!(summary.processed_data.is_empty());
    }

    #[test]
    fn test_summary_with_data_and_errors() {
        let mut collection = ProcessingResultCollection::new();
        collection.set_processed_data("email", json!("test@example.com"));
        collection.add_error("name", "required", "Name is required");

        let summary = collection.to_summary();
        assert!(!summary.is_valid);
        assert!(summary.errors.contains_key("name"));
        assert_eq!(summary.processed_data["email"], json!("test@example.com"));

        let serialized = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            serialized,
            json!({
                "isValid": false,
                "errors": {"name": [{"errorKey": "required", "message": "Name is required"}]},
                "processedData": {"email": "test@example.com"}
            })
        );
    }

    #[test]
    fn test_clear() {
        let mut collection = ProcessingResultCollection::new();
        collection.set_processed_data("email", json!("test@example.com"));
        collection.add_error("name", "required", "Name is required");

        collection.clear();

        assert!(!collection.has_errors());
        assert!(collection.errors().is_empty());
        assert!(collection.processed_data().is_empty());
    }

    #[test]
    fn test_add_prebuilt_records() {
        let mut collection = ProcessingResultCollection::new();
        collection.add_processed_data(ProcessedData::new("age", json!(30)));
        collection.add_processing_error(ProcessingError::new("age", "range", "Too young"));
        collection.add_processing_error(ProcessingError::new("age", "range", "Too young"));

        assert_eq!(collection.processed_entry("age").unwrap().value(), &json!(30));
        assert_eq!(collection.property_errors("age").len(), 1);
    }
}
