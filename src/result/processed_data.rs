// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// The latest processed value recorded for a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedData {
    property: String,
    value: Value,
    timestamp: DateTime<Utc>,
}

impl ProcessedData {
    pub fn new(property: impl Into<String>, value: Value) -> Self {
        Self {
            property: property.into(),
            value,
            timestamp: Utc::now(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let before = Utc::now();
        let data = ProcessedData::new("email", json!("test@example.com"));

        assert_eq!(data.property(), "email");
        assert_eq!(data.value(), &json!("test@example.com"));
        assert!(data.timestamp() >= before);
        assert!(data.timestamp() <= Utc::now());
    }

    #[test]
    fn test_holds_any_value_shape() {
        for value in [json!(null), json!(25), json!(["a", "b"]), json!({"k": "v"})] {
            let data = ProcessedData::new("field", value.clone());
            assert_eq!(data.into_value(), value);
        }
    }

    #[test]
    fn test_serializes_value_and_timestamp() {
        let data = ProcessedData::new("age", json!(30));
        let serialized = serde_json::to_value(&data).unwrap();

        assert_eq!(serialized["value"], json!(30));
        assert!(serialized["timestamp"].is_string());
    }
}
