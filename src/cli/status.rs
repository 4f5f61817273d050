use anyhow::{bail, Result};
use uuid::Uuid;

use crate::db::Database;
use crate::models::{ContactStatus, LeadStatus, ProjectStatus, QuoteStatus, SourceKind};

pub fn run_status(db: &Database, kind: SourceKind, id: Uuid, status: &str) -> Result<()> {
    let updated = match kind {
        SourceKind::Contact => {
            let Some(s) = ContactStatus::parse(status) else {
                bail!("unknown contact status '{}' (expected new, read, or replied)", status);
            };
            db.set_contact_status(id, s)?
        }
        SourceKind::Project => {
            let Some(s) = ProjectStatus::parse(status) else {
                bail!(
                    "unknown project status '{}' (expected new, contacted, quoted, accepted, or declined)",
                    status
                );
            };
            db.set_project_status(id, s)?
        }
        SourceKind::Quote => {
            let Some(s) = QuoteStatus::parse(status) else {
                bail!(
                    "unknown quote status '{}' (expected new, contacted, quoted, or closed)",
                    status
                );
            };
            db.set_quote_status(id, s)?
        }
        SourceKind::Lead => {
            let Some(s) = LeadStatus::parse(status) else {
                bail!(
                    "unknown lead status '{}' (expected new, contacted, qualified, converted, or lost)",
                    status
                );
            };
            db.set_lead_status(id, s)?
        }
    };

    if !updated {
        bail!("no {} record with id {}", kind.as_str(), id);
    }
    println!("Updated {} {} to {}", kind.as_str(), id, status.to_lowercase());
    Ok(())
}

pub fn run_convert(db: &Database, id: Uuid) -> Result<()> {
    match db.convert_quote_to_project(id)? {
        Some(project) => {
            println!("Created project request {} from quote {}", project.id, id);
            Ok(())
        }
        None => bail!("no quote request with id {}", id),
    }
}
