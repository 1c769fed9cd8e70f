//! Domain services for Axisphere CRM.
//!
//! Services contain business logic that operates on domain models. Storage
//! is reached through the store traits declared here and implemented by the
//! persistence layer.

pub mod activity_log;
pub mod activity_time;
pub mod dashboard;
pub mod invoice_draft;
pub mod invoicing;
pub mod pricing;

pub use activity_log::{add_note, list_notes, ActivityLogError, LeadNoteStore};
pub use dashboard::{build_admin_dashboard, fetch_dashboard_data, DashboardData, DashboardStore};
pub use invoice_draft::InvoiceDraft;
pub use invoicing::{quote, submit_invoice, InvoiceError, InvoiceStore};
