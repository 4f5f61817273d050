use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::contact_submission::ContactSubmission;
use super::inbox::SourceKind;
use super::lead::Lead;
use super::profile::{ContactProfile, EmailEntry, PhoneEntry, PostalAddress, PreferredContact};
use super::project_request::ProjectRequest;
use super::quote_request::QuoteRequest;

/// The common shape the consolidator folds, produced once per source kind
/// so the merge loop never branches on kind for field access. Field
/// renames live here and nowhere else: a project request's business name
/// arrives as `company`, a lead's `source` as `referral_source`.
#[derive(Debug, Clone)]
pub struct MergeSnapshot {
    pub id: Uuid,
    pub kind: SourceKind,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub referral_source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub profile: ContactProfile,
}

impl MergeSnapshot {
    /// The grouping key joining records into one client: the profile's
    /// primary email entry, else its first entry, else the record's
    /// scalar email field. No normalization is applied; keys compare
    /// byte-for-byte, and a record without any email groups under "".
    pub fn merge_key(&self) -> String {
        self.profile
            .primary_email()
            .map(str::to_string)
            .or_else(|| self.email.clone())
            .unwrap_or_default()
    }
}

impl ContactSubmission {
    pub fn merge_snapshot(&self) -> MergeSnapshot {
        MergeSnapshot {
            id: self.id,
            kind: SourceKind::Contact,
            name: self.name.clone(),
            email: Some(self.email.clone()),
            company: None,
            website: None,
            referral_source: None,
            created_at: self.created_at,
            profile: self.profile.clone(),
        }
    }
}

impl ProjectRequest {
    pub fn merge_snapshot(&self) -> MergeSnapshot {
        MergeSnapshot {
            id: self.id,
            kind: SourceKind::Project,
            name: self.name.clone(),
            email: Some(self.email.clone()),
            company: self.business_name.clone(),
            website: self.website.clone(),
            referral_source: None,
            created_at: self.created_at,
            profile: self.profile.clone(),
        }
    }
}

impl QuoteRequest {
    pub fn merge_snapshot(&self) -> MergeSnapshot {
        MergeSnapshot {
            id: self.id,
            kind: SourceKind::Quote,
            name: self.name.clone(),
            email: self.email.clone(),
            company: None,
            website: None,
            referral_source: None,
            created_at: self.created_at,
            profile: self.profile.clone(),
        }
    }
}

impl Lead {
    pub fn merge_snapshot(&self) -> MergeSnapshot {
        MergeSnapshot {
            id: self.id,
            kind: SourceKind::Lead,
            name: self.name.clone(),
            email: Some(self.email.clone()),
            company: self.company.clone(),
            website: self.website.clone(),
            referral_source: self.source.clone(),
            created_at: self.created_at,
            profile: self.profile.clone(),
        }
    }
}

/// One client as seen across every capture collection: every record
/// sharing a grouping key, merged. Recomputed per read, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ConsolidatedClient {
    pub primary_email: String,
    pub name: String,
    pub emails: Vec<EmailEntry>,
    pub phones: Vec<PhoneEntry>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub address: Option<PostalAddress>,
    pub tags: Option<String>,
    pub preferred_contact: Option<PreferredContact>,
    pub timezone: Option<String>,
    pub referral_source: Option<String>,
    pub notes: Option<String>,
    pub project_ids: Vec<Uuid>,
    pub quote_ids: Vec<Uuid>,
    pub lead_ids: Vec<Uuid>,
    pub contact_ids: Vec<Uuid>,
    pub first_seen: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub total_interactions: u32,
}

/// Merge policy: scalar fields keep the first non-empty value ever seen
/// for them; a later record never overwrites a populated field.
fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.as_deref().map_or(true, str::is_empty) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            *slot = Some(v);
        }
    }
}

impl ConsolidatedClient {
    /// Start a client from the first record seen for a key. A record with
    /// no email entries gets a synthesized single-entry list from its
    /// grouping key so the client is never displayed without one.
    pub fn seed(snap: MergeSnapshot) -> Self {
        let key = snap.merge_key();
        let mut client = Self {
            primary_email: key.clone(),
            name: String::new(),
            emails: Vec::new(),
            phones: Vec::new(),
            company: None,
            website: None,
            address: None,
            tags: None,
            preferred_contact: None,
            timezone: None,
            referral_source: None,
            notes: None,
            project_ids: Vec::new(),
            quote_ids: Vec::new(),
            lead_ids: Vec::new(),
            contact_ids: Vec::new(),
            first_seen: snap.created_at,
            last_activity: snap.created_at,
            total_interactions: 0,
        };
        if snap.profile.emails.is_empty() {
            let mut entry = EmailEntry::new(key);
            entry.is_primary = true;
            client.emails.push(entry);
        }
        client.absorb(snap);
        client
    }

    /// Fold one more record into the client. Scalars follow
    /// first-non-empty-wins; email and phone lists union by address /
    /// number, ignoring labels and primary flags for the comparison.
    pub fn absorb(&mut self, snap: MergeSnapshot) {
        if self.name.is_empty() && !snap.name.is_empty() {
            self.name = snap.name;
        }

        for entry in snap.profile.emails {
            if !self.emails.iter().any(|e| e.address == entry.address) {
                self.emails.push(entry);
            }
        }
        for entry in snap.profile.phones {
            if !self.phones.iter().any(|p| p.number == entry.number) {
                self.phones.push(entry);
            }
        }

        fill(&mut self.company, snap.company);
        fill(&mut self.website, snap.website);
        fill(&mut self.tags, snap.profile.tags);
        fill(&mut self.timezone, snap.profile.timezone);
        fill(&mut self.referral_source, snap.referral_source);
        fill(&mut self.notes, snap.profile.notes);
        if self.address.is_none() {
            self.address = snap.profile.address;
        }
        if self.preferred_contact.is_none() {
            self.preferred_contact = snap.profile.preferred_contact;
        }

        match snap.kind {
            SourceKind::Contact => self.contact_ids.push(snap.id),
            SourceKind::Project => self.project_ids.push(snap.id),
            SourceKind::Quote => self.quote_ids.push(snap.id),
            SourceKind::Lead => self.lead_ids.push(snap.id),
        }

        if snap.created_at < self.first_seen {
            self.first_seen = snap.created_at;
        }
        if snap.created_at > self.last_activity {
            self.last_activity = snap.created_at;
        }
        self.total_interactions += 1;
    }
}

/// Every raw record matching one client email, per collection.
#[derive(Debug, Clone)]
pub struct ClientDetails {
    pub projects: Vec<ProjectRequest>,
    pub quotes: Vec<QuoteRequest>,
    pub leads: Vec<Lead>,
    pub contacts: Vec<ContactSubmission>,
}

impl ClientDetails {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.quotes.is_empty()
            && self.leads.is_empty()
            && self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_merge_key_prefers_primary_entry() {
        let mut lead = Lead::new("Ada".into(), "legacy@x.com".into());
        lead.profile.add_email(EmailEntry::new("first@x.com".into()));
        lead.profile.add_email(EmailEntry::new("second@x.com".into()));
        lead.profile.set_primary_email("second@x.com");

        assert_eq!(lead.merge_snapshot().merge_key(), "second@x.com");
    }

    #[test]
    fn test_merge_key_falls_back_to_scalar_email() {
        let lead = Lead::new("Ada".into(), "legacy@x.com".into());
        assert_eq!(lead.merge_snapshot().merge_key(), "legacy@x.com");

        let quote = QuoteRequest::new("Jo".into());
        assert_eq!(quote.merge_snapshot().merge_key(), "");
    }

    #[test]
    fn test_seed_synthesizes_email_list_from_key() {
        let lead = Lead::new("Ada".into(), "ada@x.com".into());
        let client = ConsolidatedClient::seed(lead.merge_snapshot());

        assert_eq!(client.emails.len(), 1);
        assert_eq!(client.emails[0].address, "ada@x.com");
        assert!(client.emails[0].is_primary);
    }

    #[test]
    fn test_first_non_empty_company_wins() {
        let mut project = ProjectRequest::new("Ada".into(), "ada@x.com".into());
        project.business_name = Some("Acme".into());
        project.created_at = at(100);

        let mut lead = Lead::new("Ada".into(), "ada@x.com".into());
        lead.company = Some("Other Co".into());
        lead.created_at = at(200);

        let mut client = ConsolidatedClient::seed(project.merge_snapshot());
        client.absorb(lead.merge_snapshot());

        assert_eq!(client.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_later_record_fills_empty_scalar() {
        let contact = ContactSubmission::new("Ada".into(), "ada@x.com".into(), "hi".into());
        let mut lead = Lead::new("Ada".into(), "ada@x.com".into());
        lead.company = Some("Acme".into());
        lead.profile.timezone = Some("America/Chicago".into());

        let mut client = ConsolidatedClient::seed(contact.merge_snapshot());
        client.absorb(lead.merge_snapshot());

        assert_eq!(client.company.as_deref(), Some("Acme"));
        assert_eq!(client.timezone.as_deref(), Some("America/Chicago"));
    }

    #[test]
    fn test_phone_union_skips_duplicates() {
        let mut quote = QuoteRequest::new("Jo".into());
        quote.email = Some("jo@x.com".into());
        quote.profile.add_phone(PhoneEntry::new("555-1111".into()));

        let mut lead = Lead::new("Jo".into(), "jo@x.com".into());
        lead.profile.add_phone(PhoneEntry::new("555-1111".into()));
        lead.profile.add_phone(PhoneEntry::new("555-2222".into()));

        let mut client = ConsolidatedClient::seed(quote.merge_snapshot());
        client.absorb(lead.merge_snapshot());

        let numbers: Vec<_> = client.phones.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["555-1111", "555-2222"]);
    }

    #[test]
    fn test_lead_source_lands_as_referral_source() {
        let mut lead = Lead::new("Ada".into(), "ada@x.com".into());
        lead.source = Some("Referral".into());

        let client = ConsolidatedClient::seed(lead.merge_snapshot());
        assert_eq!(client.referral_source.as_deref(), Some("Referral"));
    }

    #[test]
    fn test_business_name_lands_as_company() {
        let mut project = ProjectRequest::new("Ada".into(), "ada@x.com".into());
        project.business_name = Some("Acme LLC".into());

        let client = ConsolidatedClient::seed(project.merge_snapshot());
        assert_eq!(client.company.as_deref(), Some("Acme LLC"));
    }

    #[test]
    fn test_activity_tracking() {
        let mut a = ContactSubmission::new("Ada".into(), "ada@x.com".into(), "hi".into());
        a.created_at = at(100);
        let mut b = Lead::new("Ada".into(), "ada@x.com".into());
        b.created_at = at(500);
        let mut c = QuoteRequest::new("Ada".into());
        c.email = Some("ada@x.com".into());
        c.created_at = at(300);

        let mut client = ConsolidatedClient::seed(a.merge_snapshot());
        client.absorb(b.merge_snapshot());
        client.absorb(c.merge_snapshot());

        assert_eq!(client.first_seen, at(100));
        assert_eq!(client.last_activity, at(500));
        assert_eq!(client.total_interactions, 3);
        assert_eq!(client.contact_ids.len(), 1);
        assert_eq!(client.lead_ids.len(), 1);
        assert_eq!(client.quote_ids.len(), 1);
        assert!(client.project_ids.is_empty());
    }
}
