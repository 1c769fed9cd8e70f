//! Admin dashboard domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::invoice::InvoiceSummary;
use super::lead_status::StatusBadge;
use super::sales_person::SalesPersonResponse;

/// Count cards and quick stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub my_assigned_leads: usize,
    pub upcoming_reminders: usize,
    pub total_sales_persons: usize,
    pub total_leads: usize,
    pub leads_with_email: usize,
    pub leads_with_phone: usize,
}

/// Reminder summary for the next seven days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderSummary {
    pub total: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub later: usize,
}

/// A lead row in the recent leads panel.
#[derive(Debug, Clone, Serialize)]
pub struct LeadCard {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub status: StatusBadge,
}

/// Navigation target offered by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavAction {
    pub label: String,
    pub path: String,
}

impl NavAction {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

/// Prompt shown in place of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub action: NavAction,
}

/// Empty-state prompts for each panel that has no rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyStates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leads: Option<EmptyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_persons: Option<EmptyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices: Option<EmptyState>,
}

/// Severity of a dashboard notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient, dismissible message, e.g. a section that failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Complete admin dashboard response.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub stats: DashboardStats,
    pub reminders: ReminderSummary,
    pub recent_leads: Vec<LeadCard>,
    pub recent_sales_persons: Vec<SalesPersonResponse>,
    pub sales_persons: Vec<SalesPersonResponse>,
    pub recent_invoices: Vec<InvoiceSummary>,
    pub empty_states: EmptyStates,
    pub actions: Vec<NavAction>,
    pub notices: Vec<Notice>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_is_zero() {
        let stats = DashboardStats::default();
        assert_eq!(stats.my_assigned_leads, 0);
        assert_eq!(stats.upcoming_reminders, 0);
        assert_eq!(stats.total_sales_persons, 0);
        assert_eq!(stats.total_leads, 0);
    }

    #[test]
    fn test_empty_states_skip_none() {
        let json = serde_json::to_string(&EmptyStates::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_string(&Notice::error("Failed to load leads")).unwrap();
        assert!(json.contains("\"level\":\"error\""));
        assert!(json.contains("Failed to load leads"));
    }
}
