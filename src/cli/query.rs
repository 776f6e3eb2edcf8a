//! Query command implementation.
//!
//! Serializes the resolved configuration to JSON - the exact value the
//! site generator receives - with optional field filtering and pretty
//! printing. Useful for shell scripting and for debugging what a given
//! `folio.toml` actually resolves to.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let value = serde_json::to_value(config)?;

    let output = match &args.fields {
        Some(fields) => filter_fields(&value, fields),
        None => value,
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Filter to specific dotted-path fields; missing paths show as null.
fn filter_fields(value: &JsonValue, fields: &[String]) -> JsonValue {
    let mut obj = Map::new();
    for field in fields {
        let entry = lookup_path(value, field).cloned().unwrap_or(JsonValue::Null);
        obj.insert(field.clone(), entry);
    }
    JsonValue::Object(obj)
}

/// Walk a dotted path ("theme.search.provider") through nested objects.
fn lookup_path<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    path.split('.').try_fold(value, |v, key| v.get(key))
}
