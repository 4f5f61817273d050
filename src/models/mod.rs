pub mod client;
pub mod contact_submission;
pub mod inbox;
pub mod lead;
pub mod profile;
pub mod project_request;
pub mod quote_request;

pub use client::{ClientDetails, ConsolidatedClient, MergeSnapshot};
pub use contact_submission::{ContactStatus, ContactSubmission};
pub use inbox::{InboxItem, SourceKind, SourceRecord, UnifiedStatus, UnknownSourceKind};
pub use lead::{Lead, LeadStatus};
pub use profile::{ContactProfile, EmailEntry, PhoneEntry, PostalAddress, PreferredContact};
pub use project_request::{ProjectRequest, ProjectStatus};
pub use quote_request::{QuoteRequest, QuoteStatus};
