//! `lexicon exception ...` – add, remove, and look up exception messages.

use anyhow::Result;
use lexicon_core::ExceptionManager;
use std::path::Path;

use crate::cli::ExceptionAction;

pub fn run_exception(path: &Path, action: ExceptionAction) -> Result<()> {
    let mut manager = ExceptionManager::open(path);
    tracing::debug!(path = %path.display(), "opened exception store");

    match action {
        ExceptionAction::Add { key, message } => {
            if manager.add(key.as_str(), message)? {
                println!("Added {key}");
            } else {
                println!("Updated {key}");
            }
        }
        ExceptionAction::Remove { key } => {
            if manager.remove(&key)? {
                println!("Removed {key}");
            } else {
                println!("No exception for key {key}");
            }
        }
        ExceptionAction::Get { key } => match manager.get_value(&key) {
            Some(value) => match value.as_str() {
                Some(message) => println!("{message}"),
                None => println!("{value}"),
            },
            None => println!("No exception for key {key}"),
        },
        ExceptionAction::List => {
            if manager.is_empty() {
                println!("No exceptions stored.");
            }
            for (key, value) in manager.get_all() {
                match value.as_str() {
                    Some(message) => println!("{key}: {message}"),
                    None => println!("{key}: {value}"),
                }
            }
        }
        ExceptionAction::Keys => {
            for key in manager.keys() {
                println!("{key}");
            }
        }
    }
    Ok(())
}
