//! Basic usage example for leveled_logger

use leveled_logger::prelude::*;
use leveled_logger::{fields, info, warn};
use std::time::Duration;

fn handle_request(logger: &dyn Log, path: &str) {
    logger.debug("routing request", &fields! { "path" => path });
    logger.info(
        "request handled",
        &fields! {
            "path" => path,
            "status" => 200,
            "latency" => Duration::from_millis(12),
        },
    );
}

fn main() -> Result<()> {
    println!("=== Leveled Logger Basic Usage ===\n");

    // Structured JSON logger on stdout
    let logger = StructuredLogger::builder()
        .level(LogLevel::Info)
        .output(OutputTarget::Stdout)
        .build()?;

    println!("1. Structured logging at info:");
    handle_request(&logger, "/health");
    logger.warn("cache nearly full", &fields! { "used" => 0.93, "shard" => 4_i64 });
    logger.error("upstream failed", &fields! { "retrying" => true });

    println!("\n2. Macro forms:");
    info!(logger, "using the info! macro", { "user_id" => 12345_i64 });
    warn!(logger, "no fields needed");

    println!("\n3. Swapping in a console logger:");
    let console = ConsoleLogger::new(LogLevel::Debug);
    handle_request(&console, "/users");

    println!("\n4. Disabling output with the no-op logger:");
    handle_request(&NopLogger::default(), "/silent");

    println!("\n5. Fatal with a non-terminating exit callback:");
    let guarded = StructuredLogger::builder()
        .level(LogLevel::Info)
        .exit_func(|code| println!("(exit({}) intercepted)", code))
        .build()?;
    guarded.fatal("unrecoverable state", &fields! { "component" => "demo" });

    logger.flush()?;
    println!("\n=== Done ===");
    Ok(())
}
