//! JSON snapshot loader.
//!
//! The record source drops one JSON file per collection into a data
//! directory (`clients.json`, `projects.json`, ...). A missing file means
//! the collection has not been produced yet and loads as `None`; a file
//! that exists but cannot be read or parsed is a [`LoadError`].

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::snapshot::Snapshot;
use crate::types::{Alert, Client, Milestone, Project, Subscription};

pub const CLIENTS_FILE: &str = "clients.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SUBSCRIPTIONS_FILE: &str = "subscriptions.json";
pub const ALERTS_FILE: &str = "alerts.json";
pub const MILESTONES_FILE: &str = "milestones.json";

/// Load whatever collections are present in `data_dir` into a snapshot.
pub fn load_snapshot(data_dir: &Path) -> Result<Snapshot, LoadError> {
    let projects: Option<Vec<Project>> = load_collection(data_dir, PROJECTS_FILE)?;
    let subscriptions: Option<Vec<Subscription>> = load_collection(data_dir, SUBSCRIPTIONS_FILE)?;

    // Monetary fields are non-negative by contract; a violation is the
    // record source's bug. Flag it, keep the value as-is.
    if let Some(ref records) = projects {
        for p in records.iter().filter(|p| p.value < 0.0) {
            log::warn!("project {} has negative value {}", p.id, p.value);
        }
    }
    if let Some(ref records) = subscriptions {
        for s in records.iter().filter(|s| s.amount < 0.0) {
            log::warn!("subscription {} has negative amount {}", s.id, s.amount);
        }
    }

    Ok(Snapshot {
        clients: load_collection::<Client>(data_dir, CLIENTS_FILE)?,
        projects,
        subscriptions,
        alerts: load_collection::<Alert>(data_dir, ALERTS_FILE)?,
        milestones: load_collection::<Milestone>(data_dir, MILESTONES_FILE)?,
    })
}

/// Load one collection file, `None` when the file does not exist.
pub fn load_collection<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
) -> Result<Option<Vec<T>>, LoadError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    let records = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Some(records))
}
