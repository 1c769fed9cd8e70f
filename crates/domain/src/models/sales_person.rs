//! Salesperson domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status value that marks a salesperson as active.
pub const ACTIVE_STATUS: &str = "active";

/// A salesperson account leads can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPerson {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl SalesPerson {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// Salesperson card with the number of leads assigned to them.
#[derive(Debug, Clone, Serialize)]
pub struct SalesPersonResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: String,
    pub is_active: bool,
    pub assigned_leads: usize,
    pub created_at: DateTime<Utc>,
}

impl SalesPersonResponse {
    pub fn new(person: &SalesPerson, assigned_leads: usize) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            email: person.email.clone(),
            phone: person.phone.clone(),
            status: person.status.clone(),
            is_active: person.is_active(),
            assigned_leads,
            created_at: person.created_at,
        }
    }
}

/// Response for listing salespersons.
#[derive(Debug, Clone, Serialize)]
pub struct ListSalesPersonsResponse {
    pub sales_persons: Vec<SalesPersonResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(status: &str) -> SalesPerson {
        SalesPerson {
            id: Uuid::new_v4(),
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            phone: None,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_active() {
        assert!(person("active").is_active());
        assert!(!person("inactive").is_active());
        assert!(!person("Active").is_active());
    }

    #[test]
    fn test_response_carries_lead_count() {
        let p = person("active");
        let response = SalesPersonResponse::new(&p, 4);
        assert_eq!(response.assigned_leads, 4);
        assert!(response.is_active);

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("phone"));
    }
}
