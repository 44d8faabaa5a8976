use anyhow::bail;
use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::Database;
use crate::types::Role;

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create missing tables and indexes")]
    Schema,

    #[command(about = "Insert reference data and demo accounts, companies and holdings")]
    Seed,

    #[command(about = "Change the role of an existing account")]
    Promote {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, default_value = "ANALYST", help = "GUEST, VIEWER or ANALYST")]
        role: Role,
    },
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let db = Database::connect(&config.database).await?;

    let outcome = match cmd {
        DbCommands::Schema => {
            db.apply_schema().await?;
            json!({ "command": "schema", "ok": true })
        }
        DbCommands::Seed => {
            db.apply_schema().await?;
            db.seed_demo_data().await?;
            json!({ "command": "seed", "ok": true })
        }
        DbCommands::Promote { email, role } => {
            if !db.users().set_role(&email, role).await? {
                db.close().await;
                bail!("no account with email {email}");
            }
            json!({ "command": "promote", "ok": true, "email": email, "role": role })
        }
    };

    db.close().await;
    report(&outcome, output_format);
    Ok(())
}

fn report(outcome: &serde_json::Value, output_format: OutputFormat) {
    match output_format {
        OutputFormat::Json => println!("{outcome}"),
        OutputFormat::Text => {
            let command = outcome["command"].as_str().unwrap_or_default();
            match command {
                "promote" => println!(
                    "{} is now {}",
                    outcome["email"].as_str().unwrap_or_default(),
                    outcome["role"].as_str().unwrap_or_default()
                ),
                other => println!("db {other}: done"),
            }
        }
    }
}
