//! Text and JSON rendering for CLI output

use crate::attributes::{AttributeDefaults, ATTRIBUTE_NAMES};
use crate::error::{ArkError, Result};
use crate::plan::Action;
use crate::resolver::Resolution;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ArkError::Other(anyhow::anyhow!("Failed to serialize output: {e}")))
}

pub fn render_resolution(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(resolution);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        "Platform:".blue().bold(),
        resolution.platform.to_string().cyan()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Packages:".green().bold());
    if resolution.packages.is_empty() {
        let _ = writeln!(out, "  {}", "(none)".dimmed());
    }
    for name in &resolution.packages {
        let _ = writeln!(out, "  {} {}", "•".blue(), name);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Attributes:".green().bold());
    out.push_str(&attribute_lines(&resolution.attributes));
    Ok(out)
}

fn attribute_lines(attributes: &AttributeDefaults) -> String {
    let mut out = String::new();
    for (name, value) in attributes.entries() {
        let _ = writeln!(out, "  {} = {}", name.bold(), value);
    }
    out
}

pub fn render_packages(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&resolution.packages),
        OutputFormat::Text => Ok(resolution
            .packages
            .iter()
            .map(|name| format!("{name}\n"))
            .collect()),
    }
}

pub fn render_attributes(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&resolution.attributes),
        OutputFormat::Text => Ok(attribute_lines(&resolution.attributes)),
    }
}

/// Render a single attribute value. Unknown names list the valid ones.
pub fn render_attribute(
    resolution: &Resolution,
    name: &str,
    format: OutputFormat,
) -> Result<String> {
    if !AttributeDefaults::is_known(name) {
        return Err(ArkError::unknown_attribute(
            name,
            ATTRIBUTE_NAMES.iter().map(|n| n.to_string()).collect(),
        ));
    }

    let value = resolution.attributes.get(name);
    match format {
        OutputFormat::Json => to_json(&value),
        OutputFormat::Text => Ok(value.map(|v| format!("{v}\n")).unwrap_or_default()),
    }
}

pub fn render_plan(actions: &[Action], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(actions);
    }

    if actions.is_empty() {
        return Ok(format!("{}\n", "Nothing to converge".dimmed()));
    }

    let mut out = String::new();
    for action in actions {
        let _ = writeln!(out, "{} {}", "→".green(), action);
    }
    Ok(out)
}
