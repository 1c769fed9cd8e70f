//! Admin dashboard aggregation.
//!
//! The four source lists are read concurrently and independently. A list
//! that fails to load is replaced by an empty one and reported as a notice,
//! so the dashboard always renders. Everything else is computed in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, error};
use uuid::Uuid;

use crate::models::dashboard::{
    AdminDashboard, DashboardStats, EmptyState, EmptyStates, LeadCard, NavAction, Notice,
    ReminderSummary,
};
use crate::models::invoice::InvoiceSummary;
use crate::models::sales_person::SalesPersonResponse;
use crate::models::{Invoice, Lead, LeadStatus, SalesPerson, StatusBadge};

/// Number of rows in the "recent" panels.
const RECENT_PANEL_SIZE: usize = 3;

/// Status names counted by the email and phone cards.
const EMAIL_STATUS_NAME: &str = "Email";
const PHONE_STATUS_NAME: &str = "Phone";

/// Read access to the dashboard's source lists.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn list_sales_persons(&self) -> Result<Vec<SalesPerson>, sqlx::Error>;

    async fn list_leads(&self) -> Result<Vec<Lead>, sqlx::Error>;

    /// Pipeline statuses ordered by `order_index`.
    async fn list_lead_statuses(&self) -> Result<Vec<LeadStatus>, sqlx::Error>;

    /// Most recent invoices, newest first.
    async fn list_recent_invoices(&self, limit: i64) -> Result<Vec<Invoice>, sqlx::Error>;
}

/// Raw lists loaded for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub sales_persons: Vec<SalesPerson>,
    pub leads: Vec<Lead>,
    pub statuses: Vec<LeadStatus>,
    pub invoices: Vec<Invoice>,
    pub notices: Vec<Notice>,
}

fn or_notice<T>(
    result: Result<Vec<T>, sqlx::Error>,
    section: &str,
    notices: &mut Vec<Notice>,
) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            error!(section = section, error = %e, "Failed to load dashboard section");
            notices.push(Notice::error(format!("Failed to load {section}")));
            Vec::new()
        }
    }
}

/// Loads the four source lists concurrently.
pub async fn fetch_dashboard_data(store: &dyn DashboardStore, invoice_limit: i64) -> DashboardData {
    let (sales_persons, leads, statuses, invoices) = tokio::join!(
        store.list_sales_persons(),
        store.list_leads(),
        store.list_lead_statuses(),
        store.list_recent_invoices(invoice_limit),
    );

    let mut notices = Vec::new();
    let data = DashboardData {
        sales_persons: or_notice(sales_persons, "sales persons", &mut notices),
        leads: or_notice(leads, "leads", &mut notices),
        statuses: or_notice(statuses, "lead statuses", &mut notices),
        invoices: or_notice(invoices, "invoices", &mut notices),
        notices,
    };

    debug!(
        sales_persons = data.sales_persons.len(),
        leads = data.leads.len(),
        statuses = data.statuses.len(),
        invoices = data.invoices.len(),
        failed = data.notices.len(),
        "Dashboard data loaded"
    );

    data
}

/// Number of leads assigned to `user_id`.
pub fn count_assigned_to(leads: &[Lead], user_id: Uuid) -> usize {
    leads.iter().filter(|l| l.is_assigned_to(user_id)).count()
}

/// Assigned-lead count per assignee.
pub fn assigned_lead_counts(leads: &[Lead]) -> HashMap<Uuid, usize> {
    let mut counts = HashMap::new();
    for assignee in leads.iter().filter_map(|l| l.assigned_to) {
        *counts.entry(assignee).or_insert(0) += 1;
    }
    counts
}

/// Number of leads whose status is named exactly `name`.
pub fn count_leads_with_status_name(leads: &[Lead], statuses: &[LeadStatus], name: &str) -> usize {
    leads
        .iter()
        .filter(|lead| {
            lead.status_id
                .and_then(|id| statuses.iter().find(|s| s.id == id))
                .map_or(false, |status| status.name == name)
        })
        .count()
}

fn empty_states(data: &DashboardData) -> EmptyStates {
    let prompt = |message: &str, label: &str, path: &str| EmptyState {
        message: message.to_string(),
        action: NavAction::new(label, path),
    };

    EmptyStates {
        leads: data
            .leads
            .is_empty()
            .then(|| prompt("No leads yet", "Add Your First Lead", "/leads/add")),
        sales_persons: data.sales_persons.is_empty().then(|| {
            prompt(
                "No sales persons yet",
                "Add Your First Sales Person",
                "/admin/sales-persons/add",
            )
        }),
        invoices: data
            .invoices
            .is_empty()
            .then(|| prompt("No invoices yet", "Create Invoice", "/admin/invoices")),
    }
}

fn quick_actions() -> Vec<NavAction> {
    vec![
        NavAction::new("Manage Leads", "/leads"),
        NavAction::new("Manage Sales Persons", "/admin/sales-persons/add"),
        NavAction::new("Manage Invoices", "/admin/invoices"),
    ]
}

/// Computes the dashboard for `user_id` from loaded data.
pub fn build_admin_dashboard(
    data: DashboardData,
    user_id: Uuid,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> AdminDashboard {
    let counts = assigned_lead_counts(&data.leads);
    let sales_persons: Vec<SalesPersonResponse> = data
        .sales_persons
        .iter()
        .map(|p| SalesPersonResponse::new(p, counts.get(&p.id).copied().unwrap_or(0)))
        .collect();

    let stats = DashboardStats {
        my_assigned_leads: count_assigned_to(&data.leads, user_id),
        upcoming_reminders: 0,
        total_sales_persons: data.sales_persons.len(),
        total_leads: data.leads.len(),
        leads_with_email: count_leads_with_status_name(
            &data.leads,
            &data.statuses,
            EMAIL_STATUS_NAME,
        ),
        leads_with_phone: count_leads_with_status_name(
            &data.leads,
            &data.statuses,
            PHONE_STATUS_NAME,
        ),
    };

    let recent_leads = data
        .leads
        .iter()
        .take(RECENT_PANEL_SIZE)
        .map(|lead| LeadCard {
            id: lead.id,
            name: lead.name.clone(),
            company: lead.company.clone(),
            status: StatusBadge::resolve(&data.statuses, lead.status_id),
        })
        .collect();

    let recent_invoices = data
        .invoices
        .iter()
        .map(|i| InvoiceSummary::from_invoice(i, offset))
        .collect();

    AdminDashboard {
        stats,
        reminders: ReminderSummary::default(),
        recent_leads,
        recent_sales_persons: sales_persons.iter().take(RECENT_PANEL_SIZE).cloned().collect(),
        sales_persons,
        recent_invoices,
        empty_states: empty_states(&data),
        actions: quick_actions(),
        notices: data.notices,
        generated_at: now,
    }
}
