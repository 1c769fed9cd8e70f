//! HTTP route handlers.

pub mod dashboard;
pub mod health;
pub mod invoices;
pub mod lead_notes;
pub mod lead_statuses;
pub mod leads;
pub mod openapi;
pub mod packages;
pub mod sales_persons;
pub mod views;
