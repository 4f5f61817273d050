use anyhow::{bail, Result};

use super::ui::is_valid_email;
use super::{EmailAction, PhoneAction};
use crate::db::Database;
use crate::models::{EmailEntry, PhoneEntry};

pub fn run_email(db: &Database, action: EmailAction) -> Result<()> {
    match action {
        EmailAction::Add(args) => {
            if !is_valid_email(&args.address) {
                bail!("'{}' is not a valid email address", args.address);
            }
            let mut entry = EmailEntry::new(args.address.clone());
            entry.label = args.label;
            entry.is_primary = args.primary;
            if !db.add_email(args.kind, args.id, entry)? {
                bail!(
                    "no {} record with id {}, or it already has {}",
                    args.kind.as_str(),
                    args.id,
                    args.address
                );
            }
            println!("Added {} to {} {}", args.address, args.kind.as_str(), args.id);
        }
        EmailAction::Update(args) => {
            if let Some(ref new) = args.new_address {
                if !is_valid_email(new) {
                    bail!("'{}' is not a valid email address", new);
                }
            }
            if args.new_address.is_none() && args.label.is_none() {
                bail!("nothing to change (pass --new-address and/or --label)");
            }
            if !db.update_email(args.kind, args.id, &args.address, args.new_address, args.label)? {
                bail!("no matching email on {} {}", args.kind.as_str(), args.id);
            }
            println!("Updated {} on {} {}", args.address, args.kind.as_str(), args.id);
        }
        EmailAction::Remove(args) => {
            if !db.remove_email(args.kind, args.id, &args.address)? {
                bail!("no matching email on {} {}", args.kind.as_str(), args.id);
            }
            println!("Removed {} from {} {}", args.address, args.kind.as_str(), args.id);
        }
        EmailAction::SetPrimary(args) => {
            if !db.set_primary_email(args.kind, args.id, &args.address)? {
                bail!("no matching email on {} {}", args.kind.as_str(), args.id);
            }
            println!("{} is now primary on {} {}", args.address, args.kind.as_str(), args.id);
        }
    }
    Ok(())
}

pub fn run_phone(db: &Database, action: PhoneAction) -> Result<()> {
    match action {
        PhoneAction::Add(args) => {
            let mut entry = PhoneEntry::new(args.number.clone());
            entry.label = args.label;
            entry.is_primary = args.primary;
            if !db.add_phone(args.kind, args.id, entry)? {
                bail!(
                    "no {} record with id {}, or it already has {}",
                    args.kind.as_str(),
                    args.id,
                    args.number
                );
            }
            println!("Added {} to {} {}", args.number, args.kind.as_str(), args.id);
        }
        PhoneAction::Update(args) => {
            if args.new_number.is_none() && args.label.is_none() {
                bail!("nothing to change (pass --new-number and/or --label)");
            }
            if !db.update_phone(args.kind, args.id, &args.number, args.new_number, args.label)? {
                bail!("no matching phone on {} {}", args.kind.as_str(), args.id);
            }
            println!("Updated {} on {} {}", args.number, args.kind.as_str(), args.id);
        }
        PhoneAction::Remove(args) => {
            if !db.remove_phone(args.kind, args.id, &args.number)? {
                bail!("no matching phone on {} {}", args.kind.as_str(), args.id);
            }
            println!("Removed {} from {} {}", args.number, args.kind.as_str(), args.id);
        }
        PhoneAction::SetPrimary(args) => {
            if !db.set_primary_phone(args.kind, args.id, &args.number)? {
                bail!("no matching phone on {} {}", args.kind.as_str(), args.id);
            }
            println!("{} is now primary on {} {}", args.number, args.kind.as_str(), args.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EmailAddArgs, EmailRefArgs};
    use crate::models::{Lead, SourceKind};

    #[test]
    fn test_email_add_then_set_primary() {
        let db = Database::open_memory().unwrap();
        let lead = Lead::new("Ada".into(), "ada@x.com".into());
        db.insert_lead(&lead).unwrap();

        run_email(
            &db,
            EmailAction::Add(EmailAddArgs {
                kind: SourceKind::Lead,
                id: lead.id,
                address: "a@x.com".into(),
                label: None,
                primary: false,
            }),
        )
        .unwrap();
        run_email(
            &db,
            EmailAction::Add(EmailAddArgs {
                kind: SourceKind::Lead,
                id: lead.id,
                address: "b@x.com".into(),
                label: Some("work".into()),
                primary: false,
            }),
        )
        .unwrap();
        run_email(
            &db,
            EmailAction::SetPrimary(EmailRefArgs {
                kind: SourceKind::Lead,
                id: lead.id,
                address: "b@x.com".into(),
            }),
        )
        .unwrap();

        let got = db.get_lead(lead.id).unwrap().unwrap();
        assert_eq!(got.profile.primary_email(), Some("b@x.com"));
    }

    #[test]
    fn test_email_add_rejects_bad_address() {
        let db = Database::open_memory().unwrap();
        let lead = Lead::new("Ada".into(), "ada@x.com".into());
        db.insert_lead(&lead).unwrap();

        let result = run_email(
            &db,
            EmailAction::Add(EmailAddArgs {
                kind: SourceKind::Lead,
                id: lead.id,
                address: "nope".into(),
                label: None,
                primary: false,
            }),
        );
        assert!(result.is_err());
    }
}
