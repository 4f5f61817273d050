use std::collections::HashMap;

use anyhow::Result;

use super::Database;
use crate::models::{ClientDetails, ConsolidatedClient, MergeSnapshot};

impl Database {
    /// The consolidated client roster: every record across the four
    /// capture collections, grouped by resolved primary email and merged.
    /// Collections fold in a fixed order (projects, leads, quotes,
    /// contacts; oldest first within each) so the first-non-empty-wins
    /// policy resolves ties the same way on every run. Recomputed from
    /// the source tables on every call; nothing is cached.
    pub fn all_clients(&self) -> Result<Vec<ConsolidatedClient>> {
        let projects = self.list_project_requests()?;
        let leads = self.list_leads()?;
        let quotes = self.list_quote_requests()?;
        let contacts = self.list_contact_submissions()?;

        let snapshots = projects
            .iter()
            .map(|r| r.merge_snapshot())
            .chain(leads.iter().map(|l| l.merge_snapshot()))
            .chain(quotes.iter().map(|q| q.merge_snapshot()))
            .chain(contacts.iter().map(|c| c.merge_snapshot()));

        // request-scoped accumulation; key order is tracked explicitly
        // rather than trusting any map's iteration order
        let mut by_email: HashMap<String, ConsolidatedClient> = HashMap::new();
        let mut first_seen_keys: Vec<String> = Vec::new();

        for snap in snapshots {
            let key = snap.merge_key();
            match by_email.get_mut(&key) {
                Some(client) => client.absorb(snap),
                None => {
                    first_seen_keys.push(key.clone());
                    by_email.insert(key, ConsolidatedClient::seed(snap));
                }
            }
        }

        let mut clients: Vec<ConsolidatedClient> = first_seen_keys
            .into_iter()
            .filter_map(|key| by_email.remove(&key))
            .collect();

        // stable sort: clients sharing a last-activity time keep
        // first-seen order
        clients.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        Ok(clients)
    }

    /// Every raw record for one client email, per collection. Matches on
    /// the same resolved key `all_clients` groups by, so any roster entry
    /// can be looked up by its displayed email. Byte-exact comparison,
    /// no case folding.
    pub fn client_details(&self, email: &str) -> Result<ClientDetails> {
        let matches = |snap: &MergeSnapshot| snap.merge_key() == email;

        Ok(ClientDetails {
            projects: self
                .list_project_requests()?
                .into_iter()
                .filter(|r| matches(&r.merge_snapshot()))
                .collect(),
            quotes: self
                .list_quote_requests()?
                .into_iter()
                .filter(|q| matches(&q.merge_snapshot()))
                .collect(),
            leads: self
                .list_leads()?
                .into_iter()
                .filter(|l| matches(&l.merge_snapshot()))
                .collect(),
            contacts: self
                .list_contact_submissions()?
                .into_iter()
                .filter(|c| matches(&c.merge_snapshot()))
                .collect(),
        })
    }
}
