use anyhow::{Context, Result};

use crate::db::Database;

/// Write the consolidated roster to a CSV file, one row per client.
pub fn run_export(db: &Database, file: &str) -> Result<()> {
    let clients = db.all_clients()?;

    let mut writer = csv::Writer::from_path(file).context("Failed to create CSV file")?;
    writer.write_record([
        "name",
        "email",
        "company",
        "website",
        "referral_source",
        "phones",
        "tags",
        "first_seen",
        "last_activity",
        "records",
    ])?;

    for c in &clients {
        let phones = c
            .phones
            .iter()
            .map(|p| p.number.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let first_seen = c.first_seen.to_rfc3339();
        let last_activity = c.last_activity.to_rfc3339();
        let records = c.total_interactions.to_string();

        writer.write_record([
            c.name.as_str(),
            c.primary_email.as_str(),
            c.company.as_deref().unwrap_or(""),
            c.website.as_deref().unwrap_or(""),
            c.referral_source.as_deref().unwrap_or(""),
            phones.as_str(),
            c.tags.as_deref().unwrap_or(""),
            first_seen.as_str(),
            last_activity.as_str(),
            records.as_str(),
        ])?;
    }

    writer.flush()?;
    println!("Exported {} clients to {}", clients.len(), file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lead;

    #[test]
    fn test_export_writes_one_row_per_client() {
        let db = Database::open_memory().unwrap();

        let mut l = Lead::new("Ada".into(), "ada@x.com".into());
        l.company = Some("Acme".into());
        db.insert_lead(&l).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clients.csv");
        run_export(&db, path.to_str().unwrap()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().starts_with("name,email,company"));
        let row = lines.next().unwrap();
        assert!(row.contains("ada@x.com"));
        assert!(row.contains("Acme"));
        assert_eq!(lines.next(), None);
    }
}
