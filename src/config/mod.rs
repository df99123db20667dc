// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod builder;
mod loader;
mod registry;
pub mod spec;
mod validation;

#[cfg(test)]
mod integration_tests;

pub use builder::{ProcessorBuilder, ResolvedProcessor};
pub use loader::{load_and_validate_config, load_config, Config, PropertyConfig};
pub use registry::{ContextProcessors, ProcessorRegistry};
pub use spec::{ProcessorSpec, ProcessorSpecList, SpecKey};
pub use validation::validate_config;
