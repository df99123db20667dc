// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use processor_pipeline::config::{load_and_validate_config, ProcessorBuilder, ProcessorRegistry};
use processor_pipeline::handler::ProcessorAttributeHandler;
use processor_pipeline::processors::register_builtin_processors;

/// Logs go to stderr so stdout stays clean JSON. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("processor_pipeline=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <config.yaml|config.toml> <input.json>", args[0]);
        eprintln!("Example: {} configs/user.yaml configs/user-record.json", args[0]);
        std::process::exit(1);
    }

    run(&args[1], &args[2])
}

fn run(config_file: &str, input_file: &str) -> Result<()> {
    let start_time = Instant::now();

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("failed to load config '{}'", config_file))?;

    let input = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read input '{}'", input_file))?;
    let record = match serde_json::from_str::<Value>(&input)
        .with_context(|| format!("input '{}' is not valid JSON", input_file))?
    {
        Value::Object(record) => record,
        other => bail!("input '{}' must be a JSON object, found {}", input_file, other),
    };

    let mut registry = ProcessorRegistry::new();
    register_builtin_processors(&mut registry, &config.context)?;

    let mut handler = ProcessorAttributeHandler::new(
        config.context.clone(),
        ProcessorBuilder::new(Arc::new(registry)),
        Arc::new(config.metadata_source()),
    )
    .with_failure_strategy(config.failure_strategy);

    handler
        .process_record(&record)
        .with_context(|| format!("processing '{}' failed", input_file))?;

    let summary = handler.processing_results().to_summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    tracing::info!(
        properties = record.len(),
        valid = summary.is_valid,
        elapsed = ?start_time.elapsed(),
        "Processed record"
    );

    Ok(())
}
