// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod attribute_handler;
mod metadata;


pub use attribute_handler::{
    FailureStrategy, ProcessedValues, ProcessorAttributeHandler, PROCESSING_ERROR_KEY,
};
pub use metadata::{MetadataSource, PropertyMetadata, StaticMetadataSource};
