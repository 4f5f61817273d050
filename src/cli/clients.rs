use anyhow::Result;

use super::ui::{format_date, truncate_chars};
use crate::db::Database;
use crate::models::{ConsolidatedClient, ContactSubmission, Lead, ProjectRequest, QuoteRequest};

pub fn run_clients(db: &Database) -> Result<()> {
    let clients = db.all_clients()?;

    if clients.is_empty() {
        println!("No clients yet.");
        return Ok(());
    }

    println!(
        "{:<24}  {:<28}  {:<20}  {:>7}  {}",
        "NAME", "EMAIL", "COMPANY", "RECORDS", "LAST ACTIVITY"
    );
    for c in &clients {
        let name = if c.name.is_empty() { "(unnamed)" } else { c.name.as_str() };
        println!(
            "{:<24}  {:<28}  {:<20}  {:>7}  {}",
            truncate_chars(name, 24),
            truncate_chars(&c.primary_email, 28),
            truncate_chars(c.company.as_deref().unwrap_or(""), 20),
            c.total_interactions,
            format_date(&c.last_activity),
        );
    }

    println!("\n{} clients", clients.len());
    Ok(())
}

/// Print the merged view, only the fields that are set.
fn print_summary(client: &ConsolidatedClient) {
    let name = if client.name.is_empty() { "(unnamed)" } else { client.name.as_str() };
    println!("{}\n", name);

    for email in &client.emails {
        let marker = if email.is_primary { " *" } else { "" };
        match &email.label {
            Some(label) => println!("  {} ({}){}", email.address, label, marker),
            None => println!("  {}{}", email.address, marker),
        }
    }
    for phone in &client.phones {
        let marker = if phone.is_primary { " *" } else { "" };
        match &phone.label {
            Some(label) => println!("  {} ({}){}", phone.number, label, marker),
            None => println!("  {}{}", phone.number, marker),
        }
    }
    if let Some(company) = &client.company {
        println!("  {}", company);
    }
    if let Some(website) = &client.website {
        println!("  {}", website);
    }
    if let Some(addr) = &client.address {
        if let Some(loc) = addr.city_state() {
            println!("  {}", loc);
        }
    }
    if let Some(tags) = &client.tags {
        println!("  tags: {}", tags);
    }
    if let Some(pc) = &client.preferred_contact {
        println!("  prefers: {}", pc.as_str());
    }
    if let Some(tz) = &client.timezone {
        println!("  {}", tz);
    }
    if let Some(source) = &client.referral_source {
        println!("  via {}", source);
    }
    if let Some(notes) = &client.notes {
        println!("  {}", truncate_chars(notes.lines().next().unwrap_or(""), 60));
    }

    println!(
        "\n  first seen {}, last activity {}, {} records",
        format_date(&client.first_seen),
        format_date(&client.last_activity),
        client.total_interactions
    );
}

fn print_project(r: &ProjectRequest) {
    let types = if r.project_types.is_empty() {
        String::new()
    } else {
        format!("  {}", r.project_types.join("/"))
    };
    println!(
        "  {}  [{}]{}  {}",
        format_date(&r.created_at),
        r.status.as_str(),
        types,
        r.id
    );
}

fn print_quote(q: &QuoteRequest) {
    let service = q.service_type.as_deref().map(|s| format!("  {}", s)).unwrap_or_default();
    println!(
        "  {}  [{}]{}  {}",
        format_date(&q.created_at),
        q.status.as_str(),
        service,
        q.id
    );
}

fn print_lead(l: &Lead) {
    let source = l.source.as_deref().map(|s| format!("  via {}", s)).unwrap_or_default();
    println!(
        "  {}  [{}]{}  {}",
        format_date(&l.created_at),
        l.status.as_str(),
        source,
        l.id
    );
}

fn print_contact(c: &ContactSubmission) {
    let first_line = c.message.lines().next().unwrap_or("");
    println!(
        "  {}  [{}]  {}  {}",
        format_date(&c.created_at),
        c.status.as_str(),
        truncate_chars(first_line, 40),
        c.id
    );
}

pub fn run_client(db: &Database, email: &str) -> Result<()> {
    let details = db.client_details(email)?;

    if details.is_empty() {
        println!("No records for {}", email);
        return Ok(());
    }

    let clients = db.all_clients()?;
    if let Some(client) = clients.iter().find(|c| c.primary_email == email) {
        print_summary(client);
    }

    if !details.projects.is_empty() {
        println!("\nProject requests");
        for r in &details.projects {
            print_project(r);
        }
    }
    if !details.quotes.is_empty() {
        println!("\nQuote requests");
        for q in &details.quotes {
            print_quote(q);
        }
    }
    if !details.leads.is_empty() {
        println!("\nLeads");
        for l in &details.leads {
            print_lead(l);
        }
    }
    if !details.contacts.is_empty() {
        println!("\nContact submissions");
        for c in &details.contacts {
            print_contact(c);
        }
    }

    Ok(())
}
