// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for a human-readable line and
//! [`StructuredLog`] to emit the same event with structured fields.
//!
//! # Organization
//!
//! * `engine` - pipeline run lifecycle
//! * `processor` - per-processor execution, configuration and spec resolution
//! * `registry` - registration and lookup
//! * `handler` - per-property orchestration outcomes
//!
//! # Usage Pattern
//!
//! ```rust
//! use processor_pipeline::observability::messages::StructuredLog;
//! use processor_pipeline::observability::messages::engine::PipelineStarted;
//!
//! let msg = PipelineStarted { processor_count: 3 };
//!
//! tracing::debug!("{}", msg);
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod handler;
pub mod processor;
pub mod registry;

/// Emit a message as a structured tracing event, or open a span carrying its fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
