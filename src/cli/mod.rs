pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "company-registry")]
#[command(about = "Company registry API server and database tooling")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Print command results as JSON")]
    pub json: bool,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Schema and seed data management")]
    Db {
        #[command(subcommand)]
        cmd: commands::db::DbCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        None => commands::serve::handle(None).await,
        Some(Commands::Serve { port }) => commands::serve::handle(port).await,
        Some(Commands::Db { cmd }) => commands::db::handle(cmd, output_format).await,
    }
}
