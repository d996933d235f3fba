use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stokvel::config::{Settings, SmsConfig, StokvelPaths};
use stokvel::notify::{SmsSender, TwilioSender};
use stokvel::shell::Shell;
use stokvel::storage::Storage;

#[derive(Parser)]
#[command(
    name = "stokvel",
    version,
    about = "Terminal ledger for stokvel savings groups",
    long_about = "Stokvel Manager keeps the books for community savings groups: \
                  members, contributions, payouts and savings goals, with \
                  summaries that can be forwarded by SMS and a CSV export on exit."
)]
struct Cli {
    /// Directory holding the database, settings and audit log
    #[arg(long, env = "STOKVEL_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for the CSV export written on exit (defaults to the data directory)
    #[arg(long, env = "STOKVEL_EXPORT_DIR", value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let paths = match cli.data_dir {
        Some(dir) => StokvelPaths::with_base_dir(dir),
        None => StokvelPaths::new()?,
    };

    println!("Initializing database...");
    let first_run = !paths.is_initialized();
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(paths.clone())
        .with_context(|| format!("Failed to open ledger in {}", paths.base_dir().display()))?;
    if first_run {
        settings.save(&paths)?;
    }

    let sms = match SmsConfig::from_env() {
        Some(config) => match TwilioSender::new(config) {
            Ok(sender) => Some(sender),
            Err(e) => {
                tracing::warn!(error = %e, "SMS disabled");
                None
            }
        },
        None => {
            tracing::info!("Twilio credentials not set; SMS disabled");
            None
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(&storage, &settings, stdin.lock(), io::stdout().lock());
    if let Some(sender) = sms.as_ref() {
        shell = shell.with_sms(sender as &dyn SmsSender);
    }
    if let Some(dir) = cli.export_dir {
        shell = shell.with_export_dir(dir);
    }

    shell.run()?;
    Ok(())
}
