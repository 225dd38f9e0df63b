//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordwiseArgs};
use crate::error::Result;
use crate::suggest::Suggestion;

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub input: String,
    pub suggestions: Vec<Suggestion>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub word_count: usize,
    pub shortest_word: usize,
    pub longest_word: usize,
    pub average_length: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordwiseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordwiseArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    if let Some(obj) = value.as_object()
        && let Some(suggestions) = obj.get("suggestions").and_then(|s| s.as_array())
    {
        output_suggestions_human(suggestions);

        if args.verbosity() > 1 {
            println!();
            if let Some(words) = obj.get("dictionary_words").and_then(|w| w.as_u64()) {
                println!("Dictionary words: {words}");
            }
            if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
                println!("Ranking time: {duration}ms");
            }
        }
    } else {
        output_generic_human(&value);
    }

    Ok(())
}

/// Output a suggestion list as a numbered, human-readable list.
fn output_suggestions_human(suggestions: &[serde_json::Value]) {
    if suggestions.is_empty() {
        println!("No suggestions.");
        return;
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        let word = suggestion
            .get("word")
            .and_then(|w| w.as_str())
            .unwrap_or("unknown");
        let penalty = suggestion
            .get("penalty")
            .and_then(|p| p.as_u64())
            .unwrap_or(0);
        println!("{:2}. {word} (penalty {penalty})", i + 1);
    }
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordwiseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
