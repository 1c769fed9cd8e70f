//! Domain models for Axisphere CRM.

pub mod dashboard;
pub mod invoice;
pub mod lead;
pub mod lead_note;
pub mod lead_status;
pub mod package;
pub mod sales_person;
pub mod view;

pub use invoice::{Invoice, NewInvoice};
pub use lead::Lead;
pub use lead_note::LeadNote;
pub use lead_status::{LeadStatus, StatusBadge};
pub use package::Package;
pub use sales_person::SalesPerson;
pub use view::View;
