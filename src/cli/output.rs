//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DeskbotArgs, OutputFormat};
use crate::error::Result;

/// Result structure for one chat exchange.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResult {
    pub message: String,
    pub reply: String,
    pub mode: String,
}

/// Result structure for an order lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub order_id: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub message: String,
    pub mode: String,
    pub intent: Option<String>,
    pub confidence: f64,
}

/// Output a result in the configured format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &DeskbotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format: the message, then one line per field.
fn output_human<T: Serialize>(message: &str, result: &T, args: &DeskbotArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            match val {
                serde_json::Value::String(s) => println!("  {key}: {s}"),
                other => println!("  {key}: {other}"),
            }
        }
    } else {
        println!("{value}");
    }

    Ok(())
}

/// Output as JSON, optionally pretty-printed.
fn output_json<T: Serialize>(result: &T, args: &DeskbotArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
