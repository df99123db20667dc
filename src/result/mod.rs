// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Result aggregation: per-property processed values plus deduplicated errors.

pub mod collection;
pub mod processed_data;
pub mod processing_error;

pub use collection::{ErrorEntry, ErrorMap, ProcessingResultCollection, ProcessingSummary, ValueMap};
pub use processed_data::ProcessedData;
pub use processing_error::ProcessingError;
