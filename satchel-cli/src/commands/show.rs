use std::path::Path;

use anyhow::{Context, Result};
use satchel_core::{parse_event, parse_task};

use crate::render::Render;

/// Print the event or task stored in an .ics file.
pub fn run(file: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;

    // Try an event first, then fall back to a task
    match parse_event(&content) {
        Ok(event) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", event.render());
            }
            Ok(())
        }
        Err(event_err) => match parse_task(&content) {
            Ok(task) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&task)?);
                } else {
                    println!("{}", task.render());
                }
                Ok(())
            }
            Err(task_err) => anyhow::bail!(
                "{} holds neither an event ({event_err}) nor a task ({task_err})",
                file.display()
            ),
        },
    }
}
