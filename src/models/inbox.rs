use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::contact_submission::ContactSubmission;
use super::lead::Lead;
use super::project_request::ProjectRequest;
use super::quote_request::QuoteRequest;

/// Which capture collection a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Contact,
    Project,
    Quote,
    Lead,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Project => "project",
            Self::Quote => "quote",
            Self::Lead => "lead",
        }
    }

    /// Backing table name. Used to build SQL, so the set is closed.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Contact => "contact_submissions",
            Self::Project => "project_requests",
            Self::Quote => "quote_requests",
            Self::Lead => "leads",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown source kind '{0}' (expected contact, project, quote, or lead)")]
pub struct UnknownSourceKind(String);

impl FromStr for SourceKind {
    type Err = UnknownSourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contact" => Ok(Self::Contact),
            "project" => Ok(Self::Project),
            "quote" => Ok(Self::Quote),
            "lead" => Ok(Self::Lead),
            _ => Err(UnknownSourceKind(s.to_string())),
        }
    }
}

/// The shared status vocabulary the four native vocabularies map into.
/// The sources evolved independently ("accepted", "converted" and
/// "qualified" all mean roughly the same thing); staff triage wants one
/// mental model and one filter across all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnifiedStatus {
    New,
    InProgress,
    Converted,
    Closed,
}

impl UnifiedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Converted => "converted",
            Self::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "in_progress" | "in-progress" => Some(Self::InProgress),
            "converted" => Some(Self::Converted),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// The full record behind an inbox row, kept so callers can render
/// per-kind detail without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRecord {
    Contact(ContactSubmission),
    Project(ProjectRequest),
    Quote(QuoteRequest),
    Lead(Lead),
}

/// One row of the unified inbox: a view over one capture record.
/// Never persisted; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxItem {
    pub id: Uuid,
    pub source: SourceKind,
    pub name: String,
    pub email: Option<String>,
    pub status: UnifiedStatus,
    pub created_at: DateTime<Utc>,
    pub record: SourceRecord,
}

impl InboxItem {
    pub fn from_contact(c: ContactSubmission) -> Self {
        Self {
            id: c.id,
            source: SourceKind::Contact,
            name: c.name.clone(),
            email: Some(c.email.clone()),
            status: c.status.unified(),
            created_at: c.created_at,
            record: SourceRecord::Contact(c),
        }
    }

    pub fn from_project(r: ProjectRequest) -> Self {
        Self {
            id: r.id,
            source: SourceKind::Project,
            name: r.name.clone(),
            email: Some(r.email.clone()),
            status: r.status.unified(),
            created_at: r.created_at,
            record: SourceRecord::Project(r),
        }
    }

    pub fn from_quote(q: QuoteRequest) -> Self {
        Self {
            id: q.id,
            source: SourceKind::Quote,
            name: q.name.clone(),
            email: q.email.clone(),
            status: q.status.unified(),
            created_at: q.created_at,
            record: SourceRecord::Quote(q),
        }
    }

    pub fn from_lead(l: Lead) -> Self {
        Self {
            id: l.id,
            source: SourceKind::Lead,
            name: l.name.clone(),
            email: Some(l.email.clone()),
            status: l.status.unified(),
            created_at: l.created_at,
            record: SourceRecord::Lead(l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact_submission::ContactStatus;
    use crate::models::lead::LeadStatus;
    use crate::models::project_request::ProjectStatus;
    use crate::models::quote_request::QuoteStatus;

    #[test]
    fn test_contact_status_mapping() {
        assert_eq!(ContactStatus::New.unified(), UnifiedStatus::New);
        assert_eq!(ContactStatus::Read.unified(), UnifiedStatus::InProgress);
        assert_eq!(ContactStatus::Replied.unified(), UnifiedStatus::Closed);
    }

    #[test]
    fn test_project_status_mapping() {
        assert_eq!(ProjectStatus::New.unified(), UnifiedStatus::New);
        assert_eq!(ProjectStatus::Contacted.unified(), UnifiedStatus::InProgress);
        assert_eq!(ProjectStatus::Quoted.unified(), UnifiedStatus::InProgress);
        assert_eq!(ProjectStatus::Accepted.unified(), UnifiedStatus::Converted);
        assert_eq!(ProjectStatus::Declined.unified(), UnifiedStatus::Closed);
    }

    #[test]
    fn test_quote_status_mapping() {
        assert_eq!(QuoteStatus::New.unified(), UnifiedStatus::New);
        assert_eq!(QuoteStatus::Contacted.unified(), UnifiedStatus::InProgress);
        assert_eq!(QuoteStatus::Quoted.unified(), UnifiedStatus::InProgress);
        assert_eq!(QuoteStatus::Closed.unified(), UnifiedStatus::Closed);
    }

    #[test]
    fn test_lead_status_mapping() {
        assert_eq!(LeadStatus::New.unified(), UnifiedStatus::New);
        assert_eq!(LeadStatus::Contacted.unified(), UnifiedStatus::InProgress);
        assert_eq!(LeadStatus::Qualified.unified(), UnifiedStatus::InProgress);
        assert_eq!(LeadStatus::Converted.unified(), UnifiedStatus::Converted);
        assert_eq!(LeadStatus::Lost.unified(), UnifiedStatus::Closed);
    }

    #[test]
    fn test_only_native_new_maps_to_unified_new() {
        // the new-count shortcut counts native 'new' rows directly; it
        // only agrees with the unified feed because no other native
        // status lands on UnifiedStatus::New
        let contact_new: Vec<_> = [ContactStatus::New, ContactStatus::Read, ContactStatus::Replied]
            .iter()
            .filter(|s| s.unified() == UnifiedStatus::New)
            .collect();
        assert_eq!(contact_new.len(), 1);

        let project_new = [
            ProjectStatus::New,
            ProjectStatus::Contacted,
            ProjectStatus::Quoted,
            ProjectStatus::Accepted,
            ProjectStatus::Declined,
        ]
        .iter()
        .filter(|s| s.unified() == UnifiedStatus::New)
        .count();
        assert_eq!(project_new, 1);

        let quote_new = [
            QuoteStatus::New,
            QuoteStatus::Contacted,
            QuoteStatus::Quoted,
            QuoteStatus::Closed,
        ]
        .iter()
        .filter(|s| s.unified() == UnifiedStatus::New)
        .count();
        assert_eq!(quote_new, 1);

        let lead_new = [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ]
        .iter()
        .filter(|s| s.unified() == UnifiedStatus::New)
        .count();
        assert_eq!(lead_new, 1);
    }

    #[test]
    fn test_source_kind_from_str() {
        assert_eq!("lead".parse::<SourceKind>().unwrap(), SourceKind::Lead);
        assert_eq!("Contact".parse::<SourceKind>().unwrap(), SourceKind::Contact);
        assert!("submission".parse::<SourceKind>().is_err());
    }

    #[test]
    fn test_quote_item_may_lack_email() {
        let quote = QuoteRequest::new("Jo".to_string());
        let item = InboxItem::from_quote(quote);
        assert_eq!(item.email, None);
        assert_eq!(item.status, UnifiedStatus::New);
    }
}
