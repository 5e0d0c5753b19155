//! Immutable snapshot of the record collections.
//!
//! The snapshot is the explicit hand-off point between the record source
//! and the derivation layer: whoever fetched the data builds one, and every
//! derivation reads from it without touching ambient state. A collection
//! the source has not produced yet is `None` and is read as empty
//! everywhere — "not loaded yet" is a policy, never a failure.

use serde::{Deserialize, Serialize};

use crate::types::{Alert, Client, Milestone, Project, Subscription};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Subscription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<Alert>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,
}

impl Snapshot {
    pub fn clients(&self) -> &[Client] {
        self.clients.as_deref().unwrap_or_default()
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or_default()
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        self.subscriptions.as_deref().unwrap_or_default()
    }

    pub fn alerts(&self) -> &[Alert] {
        self.alerts.as_deref().unwrap_or_default()
    }

    pub fn milestones(&self) -> &[Milestone] {
        self.milestones.as_deref().unwrap_or_default()
    }

    /// True when no collection has been loaded at all. Callers typically
    /// gate rendering on this rather than on individual collections.
    pub fn is_unloaded(&self) -> bool {
        self.clients.is_none()
            && self.projects.is_none()
            && self.subscriptions.is_none()
            && self.alerts.is_none()
            && self.milestones.is_none()
    }
}
