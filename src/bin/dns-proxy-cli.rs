use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dns_proxy::{CPanelTxtStore, Config, TxtRecordSummary, TxtStore};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Manage TXT records on a cPanel-hosted zone", long_about = None)]
struct Cli {
    /// `KEY=value` file holding cpanel_url, cpanel_user and cpanel_apikey.
    #[arg(long, default_value = "/etc/dns-proxy-cli.conf")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a TXT record.
    SetTxt {
        #[arg(long)]
        domain: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Delete the TXT record with exactly this value.
    DeleteTxt {
        #[arg(long)]
        domain: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Replace the value of a TXT record.
    EditTxt {
        #[arg(long)]
        domain: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        old_value: String,
        #[arg(long)]
        new_value: String,
    },
    /// List the TXT records of the domain's zone.
    ListTxt {
        #[arg(long)]
        domain: String,
        /// Only list records with this key.
        #[arg(long)]
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let cli = Cli::parse();
    let config = Config::try_from_file(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    let store = CPanelTxtStore::try_from_config(&config)?;

    match cli.command {
        Commands::SetTxt { domain, key, value } => {
            store
                .create_txt(&domain, &key, &value)
                .await
                .context("failed to set TXT record")?;
            println!("TXT record set successfully.");
        }
        Commands::DeleteTxt { domain, key, value } => {
            store
                .delete_txt(&domain, &key, &value)
                .await
                .context("failed to delete TXT record")?;
            println!("TXT record deleted successfully.");
        }
        Commands::EditTxt {
            domain,
            key,
            old_value,
            new_value,
        } => {
            store
                .edit_txt(&domain, &key, &old_value, &new_value)
                .await
                .context("failed to edit TXT record")?;
            println!("TXT record edited successfully.");
        }
        Commands::ListTxt { domain, key } => {
            let records = store
                .list_txt(&domain, key.as_deref())
                .await
                .context("failed to list TXT records")?;
            print_records(&domain, key.as_deref(), &records);
        }
    }
    Ok(())
}

// Stdout carries the command's output, so logs go to stderr.
fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dns_proxy=warn".into()),
        )
        .init();
}

fn print_records(domain: &str, key: Option<&str>, records: &[TxtRecordSummary]) {
    if records.is_empty() {
        match key.filter(|k| !k.is_empty()) {
            Some(key) => println!("No TXT records found for key '{key}' in domain '{domain}'"),
            None => println!("No TXT records found for domain '{domain}'"),
        }
        return;
    }

    println!("TXT records for domain '{domain}':");
    for record in records {
        println!(
            "  Line: {:<3} | Key: {:<30} | Value: {}",
            record.line, record.key, record.value
        );
    }
}
