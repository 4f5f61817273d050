use clap::Parser;
use leadcmd::cli::{
    run_add, run_client, run_clients, run_convert, run_email, run_export, run_import, run_inbox,
    run_phone, run_status, Cli, Commands,
};
use leadcmd::db::Database;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let db = match cli.db {
        Some(path) => Database::open_at(path)?,
        None => Database::open()?,
    };

    match cli.command {
        Commands::Inbox(args) => {
            run_inbox(&db, args.status, args.limit, args.all)?;
        }
        Commands::Clients => {
            run_clients(&db)?;
        }
        Commands::Client(args) => {
            run_client(&db, &args.email)?;
        }
        Commands::Add(cmd) => {
            run_add(&db, cmd)?;
        }
        Commands::Status(args) => {
            run_status(&db, args.kind, args.id, &args.status)?;
        }
        Commands::Convert(args) => {
            run_convert(&db, args.id)?;
        }
        Commands::Email(action) => {
            run_email(&db, action)?;
        }
        Commands::Phone(action) => {
            run_phone(&db, action)?;
        }
        Commands::Import(args) => {
            run_import(&db, &args.file, args.dry_run)?;
        }
        Commands::Export(args) => {
            run_export(&db, &args.file)?;
        }
    }

    Ok(())
}
