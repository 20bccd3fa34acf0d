//! Terminal output formatting for CLI handlers.
//!
//! Human-readable status lines colored with `owo-colors`, plus a JSON
//! mode for scripting in which only machine-readable payloads are
//! printed.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use serde_json::json;

/// Emit machine-readable JSON instead of styled text.
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Switch all subsequent output into or out of JSON mode.
pub fn set_json(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

#[must_use]
pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Informational line.
pub fn note(message: impl Display) {
    if is_json() {
        return;
    }
    println!("{} {message}", "•".dimmed());
}

/// Success line.
pub fn success(message: impl Display) {
    if is_json() {
        return;
    }
    println!("{} {message}", "✓".green());
}

/// Warning line.
pub fn warning(message: impl Display) {
    if is_json() {
        return;
    }
    eprintln!("{} {message}", "⚠".yellow());
}

/// Error line. Printed in both modes; JSON mode wraps it in an object.
pub fn error(message: impl Display) {
    if is_json() {
        eprintln!("{}", json!({ "error": message.to_string() }));
    } else {
        eprintln!("{} {message}", "✗".red());
    }
}

/// Section header.
pub fn section(title: impl Display) {
    if is_json() {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Machine-readable payload, printed only in JSON mode.
pub fn json_payload(value: serde_json::Value) {
    if is_json() {
        println!("{value}");
    }
}
