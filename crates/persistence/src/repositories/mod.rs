//! Repository implementations for database operations.

pub mod dashboard;
pub mod invoice;
pub mod lead;
pub mod lead_note;
pub mod lead_status;
pub mod package;
pub mod sales_person;

pub use dashboard::DashboardRepository;
pub use invoice::{InvoiceCursor, InvoiceRepository};
pub use lead::{LeadFilter, LeadRepository};
pub use lead_note::LeadNoteRepository;
pub use lead_status::LeadStatusRepository;
pub use package::PackageRepository;
pub use sales_person::SalesPersonRepository;
