use anyhow::{bail, Result};

use super::ui::is_valid_email;
use super::AddCommand;
use crate::db::Database;
use crate::models::{ContactSubmission, Lead, ProjectRequest, QuoteRequest};

pub fn run_add(db: &Database, cmd: AddCommand) -> Result<()> {
    match cmd {
        AddCommand::Contact(args) => {
            if !is_valid_email(&args.email) {
                bail!("'{}' is not a valid email address", args.email);
            }
            let mut c = ContactSubmission::new(args.name, args.email, args.message);
            c.service = args.service;
            db.insert_contact_submission(&c)?;
            println!("Added contact submission {}", c.id);
        }
        AddCommand::Project(args) => {
            if !is_valid_email(&args.email) {
                bail!("'{}' is not a valid email address", args.email);
            }
            let mut r = ProjectRequest::new(args.name, args.email);
            r.business_name = args.business;
            r.website = args.website;
            r.project_types = args.project_types;
            r.budget = args.budget;
            r.timeline = args.timeline;
            db.insert_project_request(&r)?;
            println!("Added project request {}", r.id);
        }
        AddCommand::Quote(args) => {
            if let Some(ref email) = args.email {
                if !is_valid_email(email) {
                    bail!("'{}' is not a valid email address", email);
                }
            }
            if args.email.is_none() && args.phone.is_none() {
                bail!("a quote needs at least an email or a phone number");
            }
            let mut q = QuoteRequest::new(args.name);
            q.email = args.email;
            q.phone = args.phone;
            q.service_type = args.service;
            q.issue_type = args.issue;
            q.property_type = args.property;
            q.zip_code = args.zip;
            db.insert_quote_request(&q)?;
            println!("Added quote request {}", q.id);
        }
        AddCommand::Lead(args) => {
            if !is_valid_email(&args.email) {
                bail!("'{}' is not a valid email address", args.email);
            }
            let mut l = Lead::new(args.name, args.email);
            l.company = args.company;
            l.website = args.website;
            l.source = args.source;
            l.profile.notes = args.notes;
            db.insert_lead(&l)?;
            println!("Added lead {}", l.id);
        }
    }
    Ok(())
}
