//! `lexicon url ...` – add, remove, compose, and list URL entries.

use anyhow::Result;
use lexicon_core::urls::ModularUrl;
use lexicon_core::{UrlComponents, UrlEntry, UrlManager};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::UrlAction;

pub fn run_url(path: &Path, action: UrlAction) -> Result<()> {
    let mut manager = UrlManager::open(path)?;
    run_and_close(&mut manager, action)
}

/// Runs one URL action, then closes the manager, saving only after a
/// successful mutation. A failed action is reported as-is.
fn run_and_close(manager: &mut UrlManager, action: UrlAction) -> Result<()> {
    let mutated = matches!(action, UrlAction::Add { .. } | UrlAction::Remove { .. });

    if let Err(err) = dispatch(manager, action) {
        manager.close(false)?;
        return Err(err);
    }
    manager.close(mutated)?;
    Ok(())
}

fn dispatch(manager: &mut UrlManager, action: UrlAction) -> Result<()> {
    match action {
        UrlAction::Add {
            key,
            base_or_full,
            components,
        } => {
            let components: UrlComponents = components.into_iter().collect();
            let outcome = manager.add_url(key, base_or_full, Some(components))?;
            println!("{outcome}");
        }
        UrlAction::Remove { key } => {
            if manager.remove_url(&key)? {
                println!("Removed {key}");
            } else {
                println!("No URL for key {key}");
            }
        }
        UrlAction::Get { key, selections } => {
            let selections: HashMap<String, String> = selections.into_iter().collect();
            match manager.get_url(&key, &selections)? {
                Some(url) => println!("{url}"),
                None => println!("No URL for key {key}"),
            }
        }
        UrlAction::List => {
            let urls = manager.get_all_urls()?;
            if urls.is_empty() {
                println!("No URLs stored.");
            }
            for (key, entry) in &urls {
                println!("{:<20} {}", key, describe(entry));
            }
        }
    }
    Ok(())
}

/// One-line description of an entry for `url list`.
fn describe(entry: &UrlEntry) -> String {
    match entry {
        UrlEntry::Legacy(url) => url.clone(),
        UrlEntry::Modular(ModularUrl {
            base, components, ..
        }) => {
            let parts: Vec<String> = components
                .iter()
                .flat_map(|c| c.iter())
                .map(|(name, values)| format!("{name}={}", describe_values(values)))
                .collect();
            format!("{} [{}]", base.as_deref().unwrap_or("-"), parts.join(", "))
        }
        UrlEntry::Unrecognized(value) => format!("(unrecognized) {value}"),
    }
}

/// `a|b` for a list of strings, JSON text for anything else.
fn describe_values(values: &Value) -> String {
    match values.as_array() {
        Some(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("|"),
        _ => values.to_string(),
    }
}
