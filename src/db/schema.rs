pub const SCHEMA_VERSION: i32 = 1;

/// V1: the four capture collections. Every table carries the same
/// optional contact-profile columns (emails/phones as JSON entry lists,
/// address as a JSON object) so profile mutations can address any record
/// by (table, id) with one statement shape.
pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS contact_submissions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    service TEXT,
    message TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'new',
    emails TEXT,
    phones TEXT,
    address TEXT,
    tags TEXT,
    preferred_contact TEXT,
    timezone TEXT,
    notes TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contact_status ON contact_submissions(status);
CREATE INDEX IF NOT EXISTS idx_contact_created ON contact_submissions(created_at);
CREATE INDEX IF NOT EXISTS idx_contact_email ON contact_submissions(email);

CREATE TABLE IF NOT EXISTS project_requests (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    business_name TEXT,
    website TEXT,
    project_types TEXT,
    budget TEXT,
    timeline TEXT,
    status TEXT NOT NULL DEFAULT 'new',
    emails TEXT,
    phones TEXT,
    address TEXT,
    tags TEXT,
    preferred_contact TEXT,
    timezone TEXT,
    notes TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_project_status ON project_requests(status);
CREATE INDEX IF NOT EXISTS idx_project_created ON project_requests(created_at);
CREATE INDEX IF NOT EXISTS idx_project_email ON project_requests(email);

CREATE TABLE IF NOT EXISTS quote_requests (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    service_type TEXT,
    issue_type TEXT,
    property_type TEXT,
    zip_code TEXT,
    status TEXT NOT NULL DEFAULT 'new',
    emails TEXT,
    phones TEXT,
    address TEXT,
    tags TEXT,
    preferred_contact TEXT,
    timezone TEXT,
    notes TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_quote_status ON quote_requests(status);
CREATE INDEX IF NOT EXISTS idx_quote_created ON quote_requests(created_at);

CREATE TABLE IF NOT EXISTS leads (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    company TEXT,
    website TEXT,
    source TEXT,
    status TEXT NOT NULL DEFAULT 'new',
    last_contacted_at TEXT,
    emails TEXT,
    phones TEXT,
    address TEXT,
    tags TEXT,
    preferred_contact TEXT,
    timezone TEXT,
    notes TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_lead_status ON leads(status);
CREATE INDEX IF NOT EXISTS idx_lead_created ON leads(created_at);
CREATE INDEX IF NOT EXISTS idx_lead_email ON leads(email);
"#;
