//! Lead pipeline status domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Badge classes used when a status or its color is unknown.
pub const DEFAULT_STATUS_CLASS: &str = "bg-gray-100 text-gray-800";

/// Label shown for leads whose status cannot be found.
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

/// A named, ordered stage of the lead pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadStatus {
    pub id: Uuid,
    pub name: String,
    pub order_index: i32,
    pub color: String,
}

/// Color tags with a dedicated badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Gray,
    Blue,
    Purple,
    Yellow,
    Orange,
    Pink,
    Green,
}

impl StatusColor {
    /// Parses a stored color tag. Tags are matched exactly.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "gray" => Some(StatusColor::Gray),
            "blue" => Some(StatusColor::Blue),
            "purple" => Some(StatusColor::Purple),
            "yellow" => Some(StatusColor::Yellow),
            "orange" => Some(StatusColor::Orange),
            "pink" => Some(StatusColor::Pink),
            "green" => Some(StatusColor::Green),
            _ => None,
        }
    }

    /// Badge classes for this color.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusColor::Gray => "bg-gray-100 text-gray-800",
            StatusColor::Blue => "bg-blue-100 text-blue-800",
            StatusColor::Purple => "bg-purple-100 text-purple-800",
            StatusColor::Yellow => "bg-yellow-100 text-yellow-800",
            StatusColor::Orange => "bg-orange-100 text-orange-800",
            StatusColor::Pink => "bg-pink-100 text-pink-800",
            StatusColor::Green => "bg-green-100 text-green-800",
        }
    }
}

impl LeadStatus {
    /// Badge classes for this status, falling back to gray for unmapped colors.
    pub fn color_class(&self) -> &'static str {
        StatusColor::parse(&self.color)
            .map(|c| c.badge_class())
            .unwrap_or(DEFAULT_STATUS_CLASS)
    }
}

/// Display label and color for a lead's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub color_class: String,
}

impl StatusBadge {
    /// Resolves the badge for `status_id` against the loaded pipeline.
    pub fn resolve(statuses: &[LeadStatus], status_id: Option<Uuid>) -> Self {
        let status = status_id.and_then(|id| statuses.iter().find(|s| s.id == id));
        match status {
            Some(status) => Self {
                label: status.name.clone(),
                color_class: status.color_class().to_string(),
            },
            None => Self {
                label: UNKNOWN_STATUS_LABEL.to_string(),
                color_class: DEFAULT_STATUS_CLASS.to_string(),
            },
        }
    }
}

/// Response for listing the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ListLeadStatusesResponse {
    pub statuses: Vec<LeadStatusResponse>,
    pub total: usize,
}

/// Pipeline status with its resolved badge class.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStatusResponse {
    pub id: Uuid,
    pub name: String,
    pub order_index: i32,
    pub color: String,
    pub color_class: String,
}

impl From<LeadStatus> for LeadStatusResponse {
    fn from(status: LeadStatus) -> Self {
        Self {
            color_class: status.color_class().to_string(),
            id: status.id,
            name: status.name,
            order_index: status.order_index,
            color: status.color,
        }
    }
}
