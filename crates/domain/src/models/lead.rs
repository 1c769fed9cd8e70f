//! Lead domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lead_status::{LeadStatus, StatusBadge};

/// A prospective customer tracked through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub status_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Whether the lead is assigned to the given salesperson or user.
    pub fn is_assigned_to(&self, id: Uuid) -> bool {
        self.assigned_to == Some(id)
    }
}

/// Query parameters for listing leads. All filters are equality filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLeadsQuery {
    pub status_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
}

/// Lead with its resolved status badge.
#[derive(Debug, Clone, Serialize)]
pub struct LeadResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Uuid>,
    pub status: StatusBadge,
    pub created_at: DateTime<Utc>,
}

impl LeadResponse {
    /// Builds the response, resolving the status against the pipeline.
    pub fn from_lead(lead: Lead, statuses: &[LeadStatus]) -> Self {
        Self {
            status: StatusBadge::resolve(statuses, lead.status_id),
            id: lead.id,
            name: lead.name,
            company: lead.company,
            job_title: lead.job_title,
            status_id: lead.status_id,
            assigned_to: lead.assigned_to,
            created_at: lead.created_at,
        }
    }
}

/// Response for listing leads.
#[derive(Debug, Clone, Serialize)]
pub struct ListLeadsResponse {
    pub leads: Vec<LeadResponse>,
    pub total: usize,
}
