use anyhow::Result;
use clap::ValueEnum;
use ohmic_notation::{Quantity, SI_PREFIXES, format_float};
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Abbreviated with SI prefix and unit, e.g. 4.7kΩ
    Abbr,
    /// Plain decimal number
    Raw,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedValue<'a> {
    quantity: Quantity,
    input: &'a str,
    value: f64,
    abbreviated: String,
}

pub fn render_value(
    quantity: Quantity,
    input: &str,
    value: f64,
    format: OutputFormat,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Abbr => quantity.format(value),
        OutputFormat::Raw => format_float(value),
        OutputFormat::Json => serde_json::to_string(&ParsedValue {
            quantity,
            input,
            value,
            abbreviated: quantity.format(value),
        })?,
    };
    Ok(rendered)
}

pub fn render_prefixes(format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&SI_PREFIXES)?,
        OutputFormat::Abbr | OutputFormat::Raw => SI_PREFIXES
            .iter()
            .rev()
            .map(|p| format!("{:<2} {:<7} 1e{}", p.symbol, p.name, p.exponent))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}
