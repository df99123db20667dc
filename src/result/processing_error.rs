// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A validation or processing error recorded against a property.
///
/// Two errors with the same property, key and message share an identity hash;
/// the result collection keeps only the first of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingError {
    #[serde(skip)]
    property: String,
    error_key: String,
    message: String,
    #[serde(skip)]
    hash: String,
    timestamp: DateTime<Utc>,
}

impl ProcessingError {
    pub fn new(
        property: impl Into<String>,
        error_key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let property = property.into();
        let error_key = error_key.into();
        let message = message.into();
        let hash = identity_hash(&property, &error_key, &message);

        Self {
            property,
            error_key,
            message,
            hash,
            timestamp: Utc::now(),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn error_key(&self) -> &str {
        &self.error_key
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Hex SHA-256 over the three fields, NUL separated so `("ab", "c")` and
/// `("a", "bc")` can't collide.
fn identity_hash(property: &str, error_key: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(property.as_bytes());
    hasher.update([0u8]);
    hasher.update(error_key.as_bytes());
    hasher.update([0u8]);
    hasher.update(message.as_bytes());
    format!("{:x}", hasher.finalize())
}
