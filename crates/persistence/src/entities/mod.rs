//! Database entity definitions.

pub mod invoice;
pub mod lead;
pub mod lead_note;
pub mod lead_status;
pub mod package;
pub mod sales_person;

pub use invoice::InvoiceEntity;
pub use lead::LeadEntity;
pub use lead_note::LeadNoteEntity;
pub use lead_status::LeadStatusEntity;
pub use package::PackageEntity;
pub use sales_person::SalesPersonEntity;
