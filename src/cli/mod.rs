use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

pub mod add;
pub mod channels;
pub mod clients;
pub mod export;
pub mod import;
pub mod inbox;
pub mod status;
pub mod ui;

pub use add::run_add;
pub use channels::{run_email, run_phone};
pub use clients::{run_client, run_clients};
pub use export::run_export;
pub use import::run_import;
pub use inbox::run_inbox;
pub use status::{run_convert, run_status};

use crate::models::SourceKind;

#[derive(Parser)]
#[command(name = "leadcmd")]
#[command(about = "Lead inbox and client roster for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the unified inbox across all four capture sources
    Inbox(InboxArgs),
    /// List consolidated clients, most recently active first
    Clients,
    /// Show every record behind one client email
    Client(ClientArgs),
    /// Record a new submission, request, quote, or lead
    #[command(subcommand)]
    Add(AddCommand),
    /// Update a record's status
    Status(StatusArgs),
    /// Convert a quote request into a project request
    Convert(ConvertArgs),
    /// Manage a record's email addresses
    #[command(subcommand)]
    Email(EmailAction),
    /// Manage a record's phone numbers
    #[command(subcommand)]
    Phone(PhoneAction),
    /// Import leads from a CSV file
    Import(ImportArgs),
    /// Export the consolidated roster to a CSV file
    Export(ExportArgs),
}

#[derive(Args)]
pub struct InboxArgs {
    /// Only show one unified status: new, in-progress, converted, closed
    #[arg(short, long)]
    pub status: Option<String>,
    #[arg(short, long, default_value = "50")]
    pub limit: usize,
    /// Show every item regardless of --limit
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args)]
pub struct ClientArgs {
    /// The client's email, as shown by `clients`
    pub email: String,
}

#[derive(Subcommand)]
pub enum AddCommand {
    /// A contact-form submission
    Contact(AddContactArgs),
    /// A project intake request
    Project(AddProjectArgs),
    /// A quote request
    Quote(AddQuoteArgs),
    /// A staff-entered lead
    Lead(AddLeadArgs),
}

#[derive(Args)]
pub struct AddContactArgs {
    #[arg(short, long)]
    pub name: String,
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long)]
    pub message: String,
    #[arg(short, long)]
    pub service: Option<String>,
}

#[derive(Args)]
pub struct AddProjectArgs {
    #[arg(short, long)]
    pub name: String,
    #[arg(short, long)]
    pub email: String,
    /// Business name
    #[arg(short, long)]
    pub business: Option<String>,
    #[arg(short, long)]
    pub website: Option<String>,
    /// Repeat for multiple project types
    #[arg(short = 't', long = "type")]
    pub project_types: Vec<String>,
    #[arg(long)]
    pub budget: Option<String>,
    #[arg(long)]
    pub timeline: Option<String>,
}

#[derive(Args)]
pub struct AddQuoteArgs {
    #[arg(short, long)]
    pub name: String,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub service: Option<String>,
    #[arg(long)]
    pub issue: Option<String>,
    #[arg(long)]
    pub property: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
}

#[derive(Args)]
pub struct AddLeadArgs {
    #[arg(short, long)]
    pub name: String,
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long)]
    pub company: Option<String>,
    #[arg(short, long)]
    pub website: Option<String>,
    /// How the prospect found the agency
    #[arg(short, long)]
    pub source: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Record kind: contact, project, quote, or lead
    pub kind: SourceKind,
    /// Record id
    pub id: Uuid,
    /// New status, in the kind's own vocabulary
    pub status: String,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Quote request id
    pub id: Uuid,
}

#[derive(Subcommand)]
pub enum EmailAction {
    /// Add an address to a record
    Add(EmailAddArgs),
    /// Change an address or its label
    Update(EmailUpdateArgs),
    /// Remove an address
    Remove(EmailRefArgs),
    /// Make an address the record's primary
    SetPrimary(EmailRefArgs),
}

#[derive(Args)]
pub struct EmailAddArgs {
    pub kind: SourceKind,
    pub id: Uuid,
    pub address: String,
    #[arg(short, long)]
    pub label: Option<String>,
    /// Make this the primary address
    #[arg(short, long)]
    pub primary: bool,
}

#[derive(Args)]
pub struct EmailUpdateArgs {
    pub kind: SourceKind,
    pub id: Uuid,
    pub address: String,
    /// Replacement address
    #[arg(long)]
    pub new_address: Option<String>,
    #[arg(short, long)]
    pub label: Option<String>,
}

#[derive(Args)]
pub struct EmailRefArgs {
    pub kind: SourceKind,
    pub id: Uuid,
    pub address: String,
}

#[derive(Subcommand)]
pub enum PhoneAction {
    /// Add a number to a record
    Add(PhoneAddArgs),
    /// Change a number or its label
    Update(PhoneUpdateArgs),
    /// Remove a number
    Remove(PhoneRefArgs),
    /// Make a number the record's primary
    SetPrimary(PhoneRefArgs),
}

#[derive(Args)]
pub struct PhoneAddArgs {
    pub kind: SourceKind,
    pub id: Uuid,
    pub number: String,
    #[arg(short, long)]
    pub label: Option<String>,
    /// Make this the primary number
    #[arg(short, long)]
    pub primary: bool,
}

#[derive(Args)]
pub struct PhoneUpdateArgs {
    pub kind: SourceKind,
    pub id: Uuid,
    pub number: String,
    /// Replacement number
    #[arg(long)]
    pub new_number: Option<String>,
    #[arg(short, long)]
    pub label: Option<String>,
}

#[derive(Args)]
pub struct PhoneRefArgs {
    pub kind: SourceKind,
    pub id: Uuid,
    pub number: String,
}

#[derive(Args)]
pub struct ImportArgs {
    /// CSV file of leads (headers: name, email, company, website, source, phone, notes)
    pub file: String,
    /// Parse and validate without writing anything
    #[arg(short, long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination CSV file
    pub file: String,
}
