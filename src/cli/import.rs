use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::ui::is_valid_email;
use crate::db::Database;
use crate::models::{Lead, PhoneEntry};

/// A row from a CSV lead import.
///
/// Headers must match field names exactly (case-sensitive: `company` not
/// `COMPANY`). Empty strings are converted to `None` for optional fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRow {
    /// Prospect name (required)
    pub name: String,

    /// Email address (required)
    pub email: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub company: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub website: Option<String>,

    /// How the prospect found the agency
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

impl ImportRow {
    /// Validate that required fields are present and usable.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("name is required and cannot be empty");
        }
        if !is_valid_email(&self.email) {
            bail!("'{}' is not a valid email address", self.email);
        }
        Ok(())
    }

    fn into_lead(self) -> Lead {
        let mut lead = Lead::new(self.name, self.email);
        lead.company = self.company;
        lead.website = self.website;
        lead.source = self.source;
        lead.profile.notes = self.notes;
        if let Some(phone) = self.phone {
            lead.profile.add_phone(PhoneEntry::new(phone));
        }
        lead
    }
}

/// Deserialize empty strings as None.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Import results summary.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub imported: u32,
    pub duplicates: u32,
    pub errors: u32,
}

/// Execute the import command.
pub fn run_import(db: &Database, file: &str, dry_run: bool) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        bail!("File not found: {}", file);
    }

    let reader = File::open(path).context("Failed to open CSV file")?;
    let stats = import_leads(db, reader, dry_run)?;

    println!("Imported: {}", stats.imported);
    if stats.duplicates > 0 {
        println!("Skipped (already present): {}", stats.duplicates);
    }
    if stats.errors > 0 {
        println!("Failed: {}", stats.errors);
    }
    if dry_run {
        println!("(dry run, nothing written)");
    }
    Ok(())
}

fn import_leads<R: std::io::Read>(db: &Database, reader: R, dry_run: bool) -> Result<ImportStats> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stats = ImportStats::default();

    log::debug!("lead import starting (dry_run={})", dry_run);

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let line = idx + 2; // CSV line number (1-indexed, skip header)

        let row: ImportRow = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Line {}: parse error: {}", line, e);
                stats.errors += 1;
                continue;
            }
        };

        if let Err(e) = row.validate() {
            eprintln!("Line {}: {}", line, e);
            stats.errors += 1;
            continue;
        }

        if db.get_lead_by_email(&row.email)?.is_some() {
            stats.duplicates += 1;
            continue;
        }

        if !dry_run {
            db.insert_lead(&row.into_lead())?;
        }
        stats.imported += 1;
    }

    Ok(stats)
}
