use anyhow::Result;

use super::Database;
use crate::models::InboxItem;

impl Database {
    /// The unified inbox: every record from all four capture collections
    /// as one feed, newest first. Computed fresh on every call; if any
    /// collection read fails the whole call fails, because a silently
    /// partial inbox would let staff miss leads.
    pub fn inbox_items(&self) -> Result<Vec<InboxItem>> {
        let mut items: Vec<InboxItem> = Vec::new();

        for c in self.list_contact_submissions()? {
            items.push(InboxItem::from_contact(c));
        }
        for r in self.list_project_requests()? {
            items.push(InboxItem::from_project(r));
        }
        for q in self.list_quote_requests()? {
            items.push(InboxItem::from_quote(q));
        }
        for l in self.list_leads()? {
            items.push(InboxItem::from_lead(l));
        }

        // stable sort: records sharing a timestamp keep collection order
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Badge count of actionable items: rows whose native status is the
    /// literal 'new', summed across the four tables in one statement.
    /// Counted directly rather than by filtering `inbox_items`; every
    /// source's 'new' is the only native status that unifies to New, so
    /// the two always agree.
    pub fn inbox_new_count(&self) -> Result<u32> {
        let count: u32 = self.conn.query_row(
            r#"SELECT
                (SELECT COUNT(*) FROM contact_submissions WHERE status = 'new')
              + (SELECT COUNT(*) FROM project_requests WHERE status = 'new')
              + (SELECT COUNT(*) FROM quote_requests WHERE status = 'new')
              + (SELECT COUNT(*) FROM leads WHERE status = 'new')"#,
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
