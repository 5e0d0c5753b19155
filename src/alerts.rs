//! Alert digest for the dashboard's notification bell.

use serde::Serialize;

use crate::types::{Alert, AlertType};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDigest {
    pub total: usize,
    pub unread: usize,
    pub project_delayed: usize,
    pub payment_pending: usize,
    pub upsell_opportunity: usize,
    pub milestone_due: usize,
}

/// Count alerts by type and read state.
pub fn summarize_alerts(alerts: &[Alert]) -> AlertDigest {
    let mut digest = AlertDigest {
        total: alerts.len(),
        unread: 0,
        project_delayed: 0,
        payment_pending: 0,
        upsell_opportunity: 0,
        milestone_due: 0,
    };

    for alert in alerts {
        if !alert.read {
            digest.unread += 1;
        }
        match alert.alert_type {
            AlertType::ProjectDelayed => digest.project_delayed += 1,
            AlertType::PaymentPending => digest.payment_pending += 1,
            AlertType::UpsellOpportunity => digest.upsell_opportunity += 1,
            AlertType::MilestoneDue => digest.milestone_due += 1,
        }
    }

    digest
}
