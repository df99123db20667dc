// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic and operational
//! logging across the crate. Message types follow a struct-based pattern with a
//! `Display` implementation, which keeps log text out of the call sites and gives
//! every event the same structured fields wherever it is emitted.
//!
//! The library only emits `tracing` events; installing a subscriber is left to the
//! binary (see `main.rs`) or the embedding application.

pub mod messages;
