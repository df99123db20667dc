// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline run lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Pipeline run start and completion
//! * Pipeline run failure

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `debug!` - Runs happen once per property value
///
/// # Example
/// ```
/// use processor_pipeline::observability::messages::engine::PipelineStarted;
///
/// let msg = PipelineStarted { processor_count: 2 };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PipelineStarted {
    pub processor_count: usize,
}

impl Display for PipelineStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run: {} processors",
            self.processor_count
        )
    }
}

impl StructuredLog for PipelineStarted {
    fn log(&self) {
        tracing::debug!(processor_count = self.processor_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "pipeline",
            span_name = name,
            processor_count = self.processor_count,
        )
    }
}

/// Pipeline run completed successfully.
///
/// # Log Level
/// `debug!` - Runs happen once per property value
pub struct PipelineCompleted {
    pub processor_count: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run completed: {} processors in {:?}",
            self.processor_count, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::debug!(
            processor_count = self.processor_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "pipeline_completed",
            span_name = name,
            processor_count = self.processor_count,
            duration = ?self.duration,
        )
    }
}

/// Pipeline run aborted by a faulting processor.
///
/// # Log Level
/// `warn!` - The fault is handed back to the caller, who decides how serious it is
pub struct PipelineFailed<'a> {
    pub processor: &'a str,
    pub step: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run failed at step {} ({}): {}",
            self.step, self.processor, self.error
        )
    }
}

impl StructuredLog for PipelineFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            step = self.step,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "pipeline_failed",
            span_name = name,
            processor = self.processor,
            step = self.step,
            error = %self.error,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_display_formats() {
        assert_eq!(
            PipelineStarted { processor_count: 3 }.to_string(),
            "Starting pipeline run: 3 processors"
        );

        let completed = PipelineCompleted {
            processor_count: 2,
            duration: Duration::from_millis(5),
        };
        assert!(completed.to_string().starts_with("Pipeline run completed: 2 processors in"));

        let error = std::io::Error::new(std::io::ErrorKind::Other, "bad input");
        let failed = PipelineFailed {
            processor: "trim",
            step: 1,
            error: &error,
        };
        assert_eq!(failed.to_string(), "Pipeline run failed at step 1 (trim): bad input");
    }
}
