use anyhow::{bail, Result};

use super::ui::{format_date, truncate_chars};
use crate::db::Database;
use crate::models::{SourceRecord, UnifiedStatus};

/// One-line detail for an inbox row, drawn from the source record.
fn detail_line(record: &SourceRecord) -> String {
    match record {
        SourceRecord::Contact(c) => {
            let first_line = c.message.lines().next().unwrap_or("");
            match &c.service {
                Some(s) => format!("{}: {}", s, first_line),
                None => first_line.to_string(),
            }
        }
        SourceRecord::Project(r) => {
            let mut parts = Vec::new();
            if let Some(b) = &r.business_name {
                parts.push(b.clone());
            }
            if !r.project_types.is_empty() {
                parts.push(r.project_types.join("/"));
            }
            if let Some(b) = &r.budget {
                parts.push(b.clone());
            }
            parts.join(", ")
        }
        SourceRecord::Quote(q) => {
            let mut parts = Vec::new();
            if let Some(s) = &q.service_type {
                parts.push(s.clone());
            }
            if let Some(z) = &q.zip_code {
                parts.push(z.clone());
            }
            if let Some(p) = &q.phone {
                parts.push(p.clone());
            }
            parts.join(", ")
        }
        SourceRecord::Lead(l) => {
            let mut parts = Vec::new();
            if let Some(c) = &l.company {
                parts.push(c.clone());
            }
            if let Some(s) = &l.source {
                parts.push(format!("via {}", s));
            }
            parts.join(", ")
        }
    }
}

pub fn run_inbox(db: &Database, status: Option<String>, limit: usize, all: bool) -> Result<()> {
    let filter = match status.as_deref() {
        Some(s) => match UnifiedStatus::parse(s) {
            Some(u) => Some(u),
            None => bail!(
                "unknown status '{}' (expected new, in-progress, converted, or closed)",
                s
            ),
        },
        None => None,
    };

    let new_count = db.inbox_new_count()?;
    let mut items = db.inbox_items()?;
    if let Some(f) = filter {
        items.retain(|i| i.status == f);
    }

    println!("Inbox ({} new)\n", new_count);

    if items.is_empty() {
        println!("No items.");
        return Ok(());
    }

    println!(
        "{:<10}  {:<8}  {:<12}  {:<22}  {:<26}  {}",
        "DATE", "SOURCE", "STATUS", "NAME", "EMAIL", "DETAIL"
    );

    let shown = if all { items.len() } else { items.len().min(limit) };
    for item in &items[..shown] {
        println!(
            "{:<10}  {:<8}  {:<12}  {:<22}  {:<26}  {}",
            format_date(&item.created_at),
            item.source.as_str(),
            item.status.as_str(),
            truncate_chars(&item.name, 22),
            truncate_chars(item.email.as_deref().unwrap_or("-"), 26),
            truncate_chars(&detail_line(&item.record), 40),
        );
    }

    if shown < items.len() {
        println!("\n{} of {} items shown (use --all for the rest)", shown, items.len());
    }

    Ok(())
}
