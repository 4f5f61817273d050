use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use uuid::Uuid;

use super::Database;
use crate::models::*;

/// Helper to convert UUID parse errors to rusqlite errors
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Empty lists are stored as NULL rather than "[]"
fn json_or_null<T: serde::Serialize>(values: &[T]) -> Result<Option<String>> {
    if values.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(values)?))
    }
}

/// Profile fields serialized for the shared column set every capture
/// table carries.
struct ProfileColumns {
    emails: Option<String>,
    phones: Option<String>,
    address: Option<String>,
    tags: Option<String>,
    preferred_contact: Option<String>,
    timezone: Option<String>,
    notes: Option<String>,
}

fn profile_columns(profile: &ContactProfile) -> Result<ProfileColumns> {
    Ok(ProfileColumns {
        emails: json_or_null(&profile.emails)?,
        phones: json_or_null(&profile.phones)?,
        address: profile
            .address
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?,
        tags: profile.tags.clone(),
        preferred_contact: profile.preferred_contact.map(|p| p.as_str().to_string()),
        timezone: profile.timezone.clone(),
        notes: profile.notes.clone(),
    })
}

impl Database {
    // ==================== CONTACT SUBMISSIONS ====================

    pub fn insert_contact_submission(&self, c: &ContactSubmission) -> Result<()> {
        let p = profile_columns(&c.profile)?;
        self.conn.execute(
            r#"INSERT INTO contact_submissions (
                id, name, email, service, message, status,
                emails, phones, address, tags, preferred_contact, timezone, notes,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
            params![
                c.id.to_string(),
                c.name,
                c.email,
                c.service,
                c.message,
                c.status.as_str(),
                p.emails,
                p.phones,
                p.address,
                p.tags,
                p.preferred_contact,
                p.timezone,
                p.notes,
                c.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_contact_submission(&self, id: Uuid) -> Result<Option<ContactSubmission>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM contact_submissions WHERE id = ?")?;

        let result = stmt.query_row([id.to_string()], Self::row_to_contact);

        match result {
            Ok(c) => Ok(Some(c)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All contact submissions, oldest first. Creation order is the tie
    /// break the consolidator's first-write-wins policy depends on, so
    /// the ordering must stay deterministic.
    pub fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM contact_submissions ORDER BY created_at ASC, id ASC")?;

        let rows = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    pub fn set_contact_status(&self, id: Uuid, status: ContactStatus) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE contact_submissions SET status = ? WHERE id = ?",
            params![status.as_str(), id.to_string()],
        )?;
        Ok(rows > 0)
    }

    // ==================== PROJECT REQUESTS ====================

    pub fn insert_project_request(&self, r: &ProjectRequest) -> Result<()> {
        let p = profile_columns(&r.profile)?;
        self.conn.execute(
            r#"INSERT INTO project_requests (
                id, name, email, business_name, website, project_types, budget, timeline, status,
                emails, phones, address, tags, preferred_contact, timezone, notes,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
            params![
                r.id.to_string(),
                r.name,
                r.email,
                r.business_name,
                r.website,
                json_or_null(&r.project_types)?,
                r.budget,
                r.timeline,
                r.status.as_str(),
                p.emails,
                p.phones,
                p.address,
                p.tags,
                p.preferred_contact,
                p.timezone,
                p.notes,
                r.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_project_request(&self, id: Uuid) -> Result<Option<ProjectRequest>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM project_requests WHERE id = ?")?;

        let result = stmt.query_row([id.to_string()], Self::row_to_project);

        match result {
            Ok(r) => Ok(Some(r)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_project_requests(&self) -> Result<Vec<ProjectRequest>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM project_requests ORDER BY created_at ASC, id ASC")?;

        let rows = stmt
            .query_map([], Self::row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    pub fn set_project_status(&self, id: Uuid, status: ProjectStatus) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE project_requests SET status = ? WHERE id = ?",
            params![status.as_str(), id.to_string()],
        )?;
        Ok(rows > 0)
    }

    // ==================== QUOTE REQUESTS ====================

    pub fn insert_quote_request(&self, q: &QuoteRequest) -> Result<()> {
        let p = profile_columns(&q.profile)?;
        self.conn.execute(
            r#"INSERT INTO quote_requests (
                id, name, email, phone, service_type, issue_type, property_type, zip_code, status,
                emails, phones, address, tags, preferred_contact, timezone, notes,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
            params![
                q.id.to_string(),
                q.name,
                q.email,
                q.phone,
                q.service_type,
                q.issue_type,
                q.property_type,
                q.zip_code,
                q.status.as_str(),
                p.emails,
                p.phones,
                p.address,
                p.tags,
                p.preferred_contact,
                p.timezone,
                p.notes,
                q.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_quote_request(&self, id: Uuid) -> Result<Option<QuoteRequest>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM quote_requests WHERE id = ?")?;

        let result = stmt.query_row([id.to_string()], Self::row_to_quote);

        match result {
            Ok(q) => Ok(Some(q)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_quote_requests(&self) -> Result<Vec<QuoteRequest>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM quote_requests ORDER BY created_at ASC, id ASC")?;

        let rows = stmt
            .query_map([], Self::row_to_quote)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    pub fn set_quote_status(&self, id: Uuid, status: QuoteStatus) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE quote_requests SET status = ? WHERE id = ?",
            params![status.as_str(), id.to_string()],
        )?;
        Ok(rows > 0)
    }

    /// Staff conversion: seed a project request from a quote's identity
    /// and profile, and close the quote. One transaction; a failure
    /// leaves the quote untouched.
    pub fn convert_quote_to_project(&self, id: Uuid) -> Result<Option<ProjectRequest>> {
        self.conn.execute("BEGIN IMMEDIATE", [])?;
        match self.convert_quote_inner(id) {
            Ok(v) => {
                self.conn.execute("COMMIT", [])?;
                Ok(v)
            }
            Err(e) => {
                let _ = self.conn.execute("ROLLBACK", []);
                Err(e)
            }
        }
    }

    fn convert_quote_inner(&self, id: Uuid) -> Result<Option<ProjectRequest>> {
        let Some(quote) = self.get_quote_request(id)? else {
            return Ok(None);
        };

        let email = quote
            .email
            .clone()
            .or_else(|| quote.profile.primary_email().map(str::to_string))
            .unwrap_or_default();

        let mut project = ProjectRequest::new(quote.name.clone(), email);
        project.profile = quote.profile.clone();
        if let Some(phone) = &quote.phone {
            // the quote form's bare phone field travels along as an entry
            project.profile.add_phone(PhoneEntry::new(phone.clone()));
        }

        self.insert_project_request(&project)?;
        self.conn.execute(
            "UPDATE quote_requests SET status = ? WHERE id = ?",
            params![QuoteStatus::Closed.as_str(), id.to_string()],
        )?;

        Ok(Some(project))
    }

    // ==================== LEADS ====================

    pub fn insert_lead(&self, l: &Lead) -> Result<()> {
        let p = profile_columns(&l.profile)?;
        self.conn.execute(
            r#"INSERT INTO leads (
                id, name, email, company, website, source, status, last_contacted_at,
                emails, phones, address, tags, preferred_contact, timezone, notes,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
            params![
                l.id.to_string(),
                l.name,
                l.email,
                l.company,
                l.website,
                l.source,
                l.status.as_str(),
                l.last_contacted_at.map(|dt| dt.to_rfc3339()),
                p.emails,
                p.phones,
                p.address,
                p.tags,
                p.preferred_contact,
                p.timezone,
                p.notes,
                l.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_lead(&self, id: Uuid) -> Result<Option<Lead>> {
        let mut stmt = self.conn.prepare("SELECT * FROM leads WHERE id = ?")?;

        let result = stmt.query_row([id.to_string()], Self::row_to_lead);

        match result {
            Ok(l) => Ok(Some(l)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Find a lead by its scalar email field. Returns the oldest match.
    pub fn get_lead_by_email(&self, email: &str) -> Result<Option<Lead>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM leads WHERE email = ? ORDER BY created_at ASC, id ASC LIMIT 1")?;

        let result = stmt.query_row([email], Self::row_to_lead);

        match result {
            Ok(l) => Ok(Some(l)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_leads(&self) -> Result<Vec<Lead>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM leads ORDER BY created_at ASC, id ASC")?;

        let rows = stmt
            .query_map([], Self::row_to_lead)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Moving a lead to `contacted` also stamps `last_contacted_at`.
    pub fn set_lead_status(&self, id: Uuid, status: LeadStatus) -> Result<bool> {
        let rows = if status == LeadStatus::Contacted {
            self.conn.execute(
                "UPDATE leads SET status = ?, last_contacted_at = ? WHERE id = ?",
                params![status.as_str(), Utc::now().to_rfc3339(), id.to_string()],
            )?
        } else {
            self.conn.execute(
                "UPDATE leads SET status = ? WHERE id = ?",
                params![status.as_str(), id.to_string()],
            )?
        };
        Ok(rows > 0)
    }

    // ==================== CONTACT CHANNELS ====================

    /// Run one read-modify-write of a record's email/phone lists inside
    /// an immediate transaction, so two concurrent edits cannot both
    /// observe "no primary yet" and promote different entries.
    fn with_profile<F>(&self, kind: SourceKind, id: Uuid, apply: F) -> Result<bool>
    where
        F: FnOnce(&mut ContactProfile) -> bool,
    {
        self.conn.execute("BEGIN IMMEDIATE", [])?;
        match self.with_profile_inner(kind, id, apply) {
            Ok(v) => {
                self.conn.execute("COMMIT", [])?;
                Ok(v)
            }
            Err(e) => {
                let _ = self.conn.execute("ROLLBACK", []);
                Err(e)
            }
        }
    }

    fn with_profile_inner<F>(&self, kind: SourceKind, id: Uuid, apply: F) -> Result<bool>
    where
        F: FnOnce(&mut ContactProfile) -> bool,
    {
        // table names come from a closed enum, never from user input
        let sql = format!(
            "SELECT emails, phones, address, tags, preferred_contact, timezone, notes
             FROM {} WHERE id = ?",
            kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let mut profile = match stmt.query_row([id.to_string()], Self::row_to_profile) {
            Ok(p) => p,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        if !apply(&mut profile) {
            return Ok(false);
        }

        let sql = format!("UPDATE {} SET emails = ?, phones = ? WHERE id = ?", kind.table());
        self.conn.execute(
            &sql,
            params![
                json_or_null(&profile.emails)?,
                json_or_null(&profile.phones)?,
                id.to_string()
            ],
        )?;
        Ok(true)
    }

    pub fn add_email(&self, kind: SourceKind, id: Uuid, entry: EmailEntry) -> Result<bool> {
        self.with_profile(kind, id, |p| p.add_email(entry))
    }

    pub fn update_email(
        &self,
        kind: SourceKind,
        id: Uuid,
        address: &str,
        new_address: Option<String>,
        new_label: Option<String>,
    ) -> Result<bool> {
        self.with_profile(kind, id, |p| p.update_email(address, new_address, new_label))
    }

    pub fn remove_email(&self, kind: SourceKind, id: Uuid, address: &str) -> Result<bool> {
        self.with_profile(kind, id, |p| p.remove_email(address))
    }

    pub fn set_primary_email(&self, kind: SourceKind, id: Uuid, address: &str) -> Result<bool> {
        self.with_profile(kind, id, |p| p.set_primary_email(address))
    }

    pub fn add_phone(&self, kind: SourceKind, id: Uuid, entry: PhoneEntry) -> Result<bool> {
        self.with_profile(kind, id, |p| p.add_phone(entry))
    }

    pub fn update_phone(
        &self,
        kind: SourceKind,
        id: Uuid,
        number: &str,
        new_number: Option<String>,
        new_label: Option<String>,
    ) -> Result<bool> {
        self.with_profile(kind, id, |p| p.update_phone(number, new_number, new_label))
    }

    pub fn remove_phone(&self, kind: SourceKind, id: Uuid, number: &str) -> Result<bool> {
        self.with_profile(kind, id, |p| p.remove_phone(number))
    }

    pub fn set_primary_phone(&self, kind: SourceKind, id: Uuid, number: &str) -> Result<bool> {
        self.with_profile(kind, id, |p| p.set_primary_phone(number))
    }

    // ==================== ROW MAPPERS ====================

    fn row_to_profile(row: &Row) -> rusqlite::Result<ContactProfile> {
        let emails: Option<String> = row.get("emails")?;
        let phones: Option<String> = row.get("phones")?;
        let address: Option<String> = row.get("address")?;
        let preferred: Option<String> = row.get("preferred_contact")?;

        Ok(ContactProfile {
            emails: emails
                .as_deref()
                .and_then(|s| serde_json::from_str(s).ok())
                .unwrap_or_default(),
            phones: phones
                .as_deref()
                .and_then(|s| serde_json::from_str(s).ok())
                .unwrap_or_default(),
            address: address.as_deref().and_then(|s| serde_json::from_str(s).ok()),
            tags: row.get("tags")?,
            preferred_contact: preferred.as_deref().and_then(PreferredContact::parse),
            timezone: row.get("timezone")?,
            notes: row.get("notes")?,
        })
    }

    fn row_to_contact(row: &Row) -> rusqlite::Result<ContactSubmission> {
        let id: String = row.get("id")?;
        let status: String = row.get("status")?;
        let created_at: String = row.get("created_at")?;

        Ok(ContactSubmission {
            id: parse_uuid(&id)?,
            name: row.get("name")?,
            email: row.get("email")?,
            service: row.get("service")?,
            message: row.get("message")?,
            status: ContactStatus::parse(&status).unwrap_or_default(),
            profile: Self::row_to_profile(row)?,
            created_at: parse_timestamp(&created_at),
        })
    }

    fn row_to_project(row: &Row) -> rusqlite::Result<ProjectRequest> {
        let id: String = row.get("id")?;
        let status: String = row.get("status")?;
        let created_at: String = row.get("created_at")?;
        let project_types: Option<String> = row.get("project_types")?;

        Ok(ProjectRequest {
            id: parse_uuid(&id)?,
            name: row.get("name")?,
            email: row.get("email")?,
            business_name: row.get("business_name")?,
            website: row.get("website")?,
            project_types: project_types
                .as_deref()
                .and_then(|s| serde_json::from_str(s).ok())
                .unwrap_or_default(),
            budget: row.get("budget")?,
            timeline: row.get("timeline")?,
            status: ProjectStatus::parse(&status).unwrap_or_default(),
            profile: Self::row_to_profile(row)?,
            created_at: parse_timestamp(&created_at),
        })
    }

    fn row_to_quote(row: &Row) -> rusqlite::Result<QuoteRequest> {
        let id: String = row.get("id")?;
        let status: String = row.get("status")?;
        let created_at: String = row.get("created_at")?;

        Ok(QuoteRequest {
            id: parse_uuid(&id)?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            service_type: row.get("service_type")?,
            issue_type: row.get("issue_type")?,
            property_type: row.get("property_type")?,
            zip_code: row.get("zip_code")?,
            status: QuoteStatus::parse(&status).unwrap_or_default(),
            profile: Self::row_to_profile(row)?,
            created_at: parse_timestamp(&created_at),
        })
    }

    fn row_to_lead(row: &Row) -> rusqlite::Result<Lead> {
        let id: String = row.get("id")?;
        let status: String = row.get("status")?;
        let created_at: String = row.get("created_at")?;
        let last_contacted: Option<String> = row.get("last_contacted_at")?;

        Ok(Lead {
            id: parse_uuid(&id)?,
            name: row.get("name")?,
            email: row.get("email")?,
            company: row.get("company")?,
            website: row.get("website")?,
            source: row.get("source")?,
            status: LeadStatus::parse(&status).unwrap_or_default(),
            last_contacted_at: last_contacted.as_deref().map(parse_timestamp),
            profile: Self::row_to_profile(row)?,
            created_at: parse_timestamp(&created_at),
        })
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
    fn test_contact_submission_round_trip() {
        let db = Database::open_memory().unwrap();

        let mut c = ContactSubmission::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Need a new site".to_string(),
        );
        c.service = Some("web-design".to_string());
        c.status = ContactStatus::Read;
        c.profile.tags = Some("vip".to_string());
        c.profile.preferred_contact = Some(PreferredContact::Phone);
        db.insert_contact_submission(&c).unwrap();

        let got = db.get_contact_submission(c.id).unwrap().unwrap();
        assert_eq!(got.name, "Ada");
        assert_eq!(got.status, ContactStatus::Read);
        assert_eq!(got.profile.tags.as_deref(), Some("vip"));
        assert_eq!(got.profile.preferred_contact, Some(PreferredContact::Phone));
        assert_eq!(got.created_at.to_rfc3339(), c.created_at.to_rfc3339());
    }

    #[test]
    fn test_project_request_round_trip() {
        let db = Database::open_memory().unwrap();

        let mut r = ProjectRequest::new("Ada".to_string(), "ada@acme.com".to_string());
        r.business_name = Some("Acme LLC".to_string());
        r.project_types = vec!["website".to_string(), "branding".to_string()];
        r.budget = Some("10k-25k".to_string());
        db.insert_project_request(&r).unwrap();

        let got = db.get_project_request(r.id).unwrap().unwrap();
        assert_eq!(got.business_name.as_deref(), Some("Acme LLC"));
        assert_eq!(got.project_types, vec!["website", "branding"]);
        assert_eq!(got.status, ProjectStatus::New);
    }

    #[test]
    fn test_quote_request_round_trip_without_email() {
        let db = Database::open_memory().unwrap();

        let mut q = QuoteRequest::new("Jo".to_string());
        q.phone = Some("555-0101".to_string());
        q.zip_code = Some("78701".to_string());
        db.insert_quote_request(&q).unwrap();

        let got = db.get_quote_request(q.id).unwrap().unwrap();
        assert_eq!(got.email, None);
        assert_eq!(got.phone.as_deref(), Some("555-0101"));
    }

    #[test]
    fn test_lead_round_trip_with_profile_entries() {
        let db = Database::open_memory().unwrap();

        let mut l = Lead::new("Ada".to_string(), "ada@example.com".to_string());
        l.company = Some("Acme".to_string());
        l.source = Some("Referral".to_string());
        l.profile.add_email(EmailEntry::new("ada@acme.com".to_string()));
        l.profile.add_phone(PhoneEntry::new("555-1111".to_string()));
        db.insert_lead(&l).unwrap();

        let got = db.get_lead(l.id).unwrap().unwrap();
        assert_eq!(got.profile.emails.len(), 1);
        assert!(got.profile.emails[0].is_primary);
        assert_eq!(got.profile.primary_phone(), Some("555-1111"));
        assert_eq!(got.source.as_deref(), Some("Referral"));
    }

    #[test]
    fn test_list_order_is_created_at_ascending() {
        let db = Database::open_memory().unwrap();

        for (secs, name) in [(300, "c"), (100, "a"), (200, "b")] {
            let mut l = Lead::new(name.to_string(), format!("{}@x.com", name));
            l.created_at = at(secs);
            db.insert_lead(&l).unwrap();
        }

        let names: Vec<String> = db.list_leads().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_status_updates_row() {
        let db = Database::open_memory().unwrap();

        let c = ContactSubmission::new("A".into(), "a@x.com".into(), "hi".into());
        db.insert_contact_submission(&c).unwrap();

        assert!(db.set_contact_status(c.id, ContactStatus::Replied).unwrap());
        let got = db.get_contact_submission(c.id).unwrap().unwrap();
        assert_eq!(got.status, ContactStatus::Replied);

        // unknown id matches nothing
        assert!(!db.set_contact_status(Uuid::new_v4(), ContactStatus::Read).unwrap());
    }

    #[test]
    fn test_lead_contacted_stamps_last_contacted_at() {
        let db = Database::open_memory().unwrap();

        let l = Lead::new("Ada".into(), "ada@x.com".into());
        db.insert_lead(&l).unwrap();
        assert!(db.get_lead(l.id).unwrap().unwrap().last_contacted_at.is_none());

        assert!(db.set_lead_status(l.id, LeadStatus::Contacted).unwrap());
        let got = db.get_lead(l.id).unwrap().unwrap();
        assert_eq!(got.status, LeadStatus::Contacted);
        assert!(got.last_contacted_at.is_some());

        // other transitions leave the stamp alone
        assert!(db.set_lead_status(l.id, LeadStatus::Qualified).unwrap());
        assert!(db.get_lead(l.id).unwrap().unwrap().last_contacted_at.is_some());
    }

    #[test]
    fn test_convert_quote_to_project() {
        let db = Database::open_memory().unwrap();

        let mut q = QuoteRequest::new("Jo".to_string());
        q.email = Some("jo@x.com".to_string());
        q.phone = Some("555-0101".to_string());
        db.insert_quote_request(&q).unwrap();

        let project = db.convert_quote_to_project(q.id).unwrap().unwrap();
        assert_eq!(project.name, "Jo");
        assert_eq!(project.email, "jo@x.com");
        assert_eq!(project.profile.primary_phone(), Some("555-0101"));

        let quote = db.get_quote_request(q.id).unwrap().unwrap();
        assert_eq!(quote.status, QuoteStatus::Closed);

        let stored = db.get_project_request(project.id).unwrap();
        assert!(stored.is_some());

        // converting a missing quote is a no-op
        assert!(db.convert_quote_to_project(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_add_email_through_database() {
        let db = Database::open_memory().unwrap();

        let l = Lead::new("Ada".into(), "ada@x.com".into());
        db.insert_lead(&l).unwrap();

        let entry = EmailEntry::new("ada@acme.com".to_string());
        assert!(db.add_email(SourceKind::Lead, l.id, entry.clone()).unwrap());
        // duplicate address is refused
        assert!(!db.add_email(SourceKind::Lead, l.id, entry).unwrap());

        let got = db.get_lead(l.id).unwrap().unwrap();
        assert_eq!(got.profile.emails.len(), 1);
        assert!(got.profile.emails[0].is_primary);
    }

    #[test]
    fn test_remove_primary_email_promotes_through_database() {
        let db = Database::open_memory().unwrap();

        let c = ContactSubmission::new("A".into(), "a@x.com".into(), "hi".into());
        db.insert_contact_submission(&c).unwrap();

        db.add_email(SourceKind::Contact, c.id, EmailEntry::new("one@x.com".into()))
            .unwrap();
        db.add_email(SourceKind::Contact, c.id, EmailEntry::new("two@x.com".into()))
            .unwrap();

        assert!(db.remove_email(SourceKind::Contact, c.id, "one@x.com").unwrap());

        let got = db.get_contact_submission(c.id).unwrap().unwrap();
        assert_eq!(got.profile.emails.len(), 1);
        assert_eq!(got.profile.emails[0].address, "two@x.com");
        assert!(got.profile.emails[0].is_primary);
    }

    #[test]
    fn test_set_primary_phone_through_database() {
        let db = Database::open_memory().unwrap();

        let mut q = QuoteRequest::new("Jo".into());
        q.email = Some("jo@x.com".into());
        db.insert_quote_request(&q).unwrap();

        db.add_phone(SourceKind::Quote, q.id, PhoneEntry::new("555-1111".into()))
            .unwrap();
        db.add_phone(SourceKind::Quote, q.id, PhoneEntry::new("555-2222".into()))
            .unwrap();

        assert!(db.set_primary_phone(SourceKind::Quote, q.id, "555-2222").unwrap());
        let got = db.get_quote_request(q.id).unwrap().unwrap();
        assert_eq!(got.profile.primary_phone(), Some("555-2222"));
        assert_eq!(got.profile.phones.iter().filter(|p| p.is_primary).count(), 1);

        // a record that doesn't exist reports false, not an error
        assert!(!db
            .set_primary_phone(SourceKind::Quote, Uuid::new_v4(), "555-2222")
            .unwrap());
    }

    #[test]
    fn test_update_email_relabels_without_moving_primary() {
        let db = Database::open_memory().unwrap();

        let l = Lead::new("Ada".into(), "ada@x.com".into());
        db.insert_lead(&l).unwrap();
        db.add_email(SourceKind::Lead, l.id, EmailEntry::new("a@x.com".into()))
            .unwrap();

        assert!(db
            .update_email(SourceKind::Lead, l.id, "a@x.com", None, Some("work".into()))
            .unwrap());
        let got = db.get_lead(l.id).unwrap().unwrap();
        assert_eq!(got.profile.emails[0].label.as_deref(), Some("work"));
        assert!(got.profile.emails[0].is_primary);
    }

    #[test]
    fn test_get_lead_by_email() {
        let db = Database::open_memory().unwrap();

        let l = Lead::new("Ada".into(), "ada@x.com".into());
        db.insert_lead(&l).unwrap();

        assert!(db.get_lead_by_email("ada@x.com").unwrap().is_some());
        assert!(db.get_lead_by_email("nobody@x.com").unwrap().is_none());
        // byte-exact match only
        assert!(db.get_lead_by_email("Ada@x.com").unwrap().is_none());
    }
}
