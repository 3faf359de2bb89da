use env_logger::{Builder, WriteStyle};
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;

use super::time::current_time_string;

/// Initialize the logging system with file output
pub fn initialize_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to log file with proper permissions
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("shelf-check.log")?;

    // Configure the logging system
    Builder::new()
        // Set default log level
        .filter_level(LevelFilter::Info)
        // Enable timestamps
        .format_timestamp_secs()
        // Enable module path in logs
        .format_module_path(true)
        // Set colored output for console
        .write_style(WriteStyle::Auto)
        // Write to the log file
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    info!("Logging system initialized");
    Ok(())
}

/// Helper function to format sensitive data for logging
///
/// Works in chars, not bytes, so multibyte usernames mask cleanly.
fn format_sensitive(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= 4 {
        return "*".repeat(char_count);
    }
    let head: String = text.chars().take(2).collect();
    let tail: String = text.chars().skip(char_count - 2).collect();
    format!("{}***{}", head, tail)
}

/// Add structured logging for authentication events
pub fn log_auth_event(event_type: &str, username: &str, success: bool, details: Option<&str>) {
    let timestamp = current_time_string();
    if success {
        info!(
            "Auth event: type={}, user={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(username),
            timestamp,
            details
        );
    } else {
        warn!(
            "Auth event: type={}, user={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(username),
            timestamp,
            details
        );
    }
}

/// Add structured logging for catalog lookups
pub fn log_lookup_event(user: &str, title: &str, author: &str, category: &str, outcome: &str) {
    let timestamp = current_time_string();
    info!(
        "Lookup event: user={}, title={:?}, author={:?}, category={}, outcome={}, timestamp={}",
        format_sensitive(user),
        title,
        author,
        category,
        outcome,
        timestamp
    );
}
