// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // spec normalization, registry, builder, config files
pub mod engine;     // sequential pipeline
pub mod errors;     // error handling
pub mod handler;    // per-property orchestration
pub mod observability;
pub mod processors; // built-in processors
pub mod result;     // processed values + deduplicated errors
pub mod traits;     // processor capabilities
