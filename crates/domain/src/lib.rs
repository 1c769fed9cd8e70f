//! Domain layer for the Axisphere CRM backend.
//!
//! This crate contains:
//! - Domain models (Package, Invoice, Lead, LeadNote, SalesPerson, LeadStatus)
//! - Request/response payloads and view descriptors
//! - Business logic services (invoicing, activity log, admin dashboard)
//! - Store traits implemented by the persistence layer

pub mod models;
pub mod services;
