//! Pipeline inspection
//!
//! Shows the text as it stands after a given stage of the markdown transformer. Useful when a
//! construct renders wrong: step through the stages and see which one first mangles it.
//!
//! Sentinels are shown with [`protect::reveal`], so protected code newlines appear as `␤` and
//! every real newline is still a line boundary the next stage will act on.
//!
//! ## Extra Parameters
//!
//! - `all`: print every stage up to the requested one, each under a `== name ==` header
//! - `json`: print a JSON array of `{ "stage", "text" }` objects (implies `all`)
//!
//! Example: `prep inspect answer.md lists --extra-all`

use prep_render::protect;
use prep_render::{Pipeline, RenderOptions, STAGE_NAMES};
use std::collections::HashMap;

/// All stages `inspect` accepts, in pipeline order.
pub const AVAILABLE_STAGES: &[&str] = &STAGE_NAMES;

pub const DEFAULT_STAGE: &str = "restore";

/// Run `source` through `stage` and format the result for display.
pub fn execute_inspect(
    source: &str,
    stage: &str,
    options: &RenderOptions,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let pipeline = Pipeline::new(options.clone());
    let position = AVAILABLE_STAGES
        .iter()
        .position(|name| *name == stage)
        .ok_or_else(|| format!("Unknown stage '{stage}'"))?;

    let json = flag(extra_params, "json")?;
    let all = json || flag(extra_params, "all")?;

    let stages: &[&str] = if all {
        &AVAILABLE_STAGES[..=position]
    } else {
        &AVAILABLE_STAGES[position..=position]
    };

    let mut snapshots = Vec::with_capacity(stages.len());
    for name in stages {
        let text = pipeline
            .run_through(source, name)
            .ok_or_else(|| format!("Unknown stage '{name}'"))?;
        snapshots.push((*name, protect::reveal(&text)));
    }

    if json {
        let value: Vec<_> = snapshots
            .iter()
            .map(|(stage, text)| serde_json::json!({ "stage": stage, "text": text }))
            .collect();
        return serde_json::to_string_pretty(&value)
            .map_err(|e| format!("JSON serialization failed: {e}"));
    }

    if !all {
        return Ok(snapshots
            .pop()
            .map(|(_, text)| text + "\n")
            .unwrap_or_default());
    }

    Ok(snapshots
        .iter()
        .map(|(stage, text)| format!("== {stage} ==\n{text}\n"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn flag(params: &HashMap<String, String>, key: &str) -> Result<bool, String> {
    match params.get(key).map(|raw| raw.to_lowercase()) {
        None => Ok(false),
        Some(raw) => match raw.as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(format!("Invalid boolean value '{other}' for --extra-{key}")),
        },
    }
}
