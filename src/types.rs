//! Record types consumed by the derivation layer.
//!
//! These mirror the JSON shapes the record source produces (camelCase
//! fields). Status and type fields are closed enums so an unrecognized
//! value fails at the deserialization boundary instead of flowing through
//! the bucketing logic as an unnamed string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Prospect,
    Inactive,
}

/// A client record. `sector` and `source` are free text entered by the
/// user; the heatmap matches them by substring, not equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub source: String,
    pub status: ClientStatus,
    pub has_active_subscription: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nps: Option<f64>,
}

/// Project pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Discovery,
    Development,
    Delivery,
    PostSale,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// Completed or cancelled — the project no longer occupies the pipeline.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Statuses whose project value counts as realized revenue.
    pub fn is_revenue_bearing(self) -> bool {
        matches!(self, Self::Delivery | Self::PostSale | Self::Completed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Monetary value. Non-negative by contract with the record source.
    pub value: f64,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    /// Projects created without a deadline are never counted as overdue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Subscription billing status. `Other` absorbs statuses the record
/// source may add later (paused, trialing, ...) without breaking loads;
/// such subscriptions count toward neither MRR nor churn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    /// Monthly amount. Non-negative by contract with the record source.
    pub amount: f64,
    pub status: SubscriptionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    ProjectDelayed,
    PaymentPending,
    UpsellOpportunity,
    MilestoneDue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub is_completed: bool,
    #[serde(default)]
    pub requires_client_approval: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_deserializes_camel_case() {
        let json = r#"{
            "id": "c1",
            "name": "Acme",
            "sector": "Tecnologia",
            "source": "Google Ads",
            "status": "prospect",
            "hasActiveSubscription": false
        }"#;
        let c: Client = serde_json::from_str(json).unwrap();
        assert_eq!(c.status, ClientStatus::Prospect);
        assert!(!c.has_active_subscription);
        assert!(c.nps.is_none());
    }

    #[test]
    fn unknown_client_status_is_rejected() {
        let json = r#"{
            "id": "c1",
            "name": "Acme",
            "sector": "",
            "source": "",
            "status": "churned",
            "hasActiveSubscription": false
        }"#;
        assert!(serde_json::from_str::<Client>(json).is_err());
    }

    #[test]
    fn unknown_subscription_status_maps_to_other() {
        let json = r#"{"id": "s1", "amount": 99.0, "status": "paused"}"#;
        let s: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(s.status, SubscriptionStatus::Other);
    }

    #[test]
    fn project_due_date_is_optional() {
        let json = r#"{
            "id": "p1",
            "name": "Site",
            "value": 1200.0,
            "status": "development",
            "startDate": "2026-03-10"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert!(p.due_date.is_none());
        assert!(!p.status.is_closed());
    }

    #[test]
    fn alert_type_field_is_named_type_on_the_wire() {
        let json = r#"{
            "id": "a1",
            "type": "payment_pending",
            "title": "Fatura em aberto",
            "description": "Cliente Acme, 12 dias"
        }"#;
        let a: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(a.alert_type, AlertType::PaymentPending);
        assert!(!a.read);
    }
}
