use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use preferencias::config::{load_config, load_config_from, DEFAULT_DIR, DEFAULT_STORE_NAME};
use preferencias::prefs::PreferenceRecordStore;
use preferencias::record::PersonRecord;
use preferencias::store::FileStore;
use preferencias::Command;

#[derive(Parser)]
#[command(name = "preferencias", about = "Save, show and delete a single person record")]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Store a record, replacing any previous one.
    Save {
        #[arg(long, default_value = "")]
        id: String,
        #[arg(long, default_value = "")]
        nombre: String,
        #[arg(long, default_value = "")]
        apellidos: String,
        /// Birth year; anything that is not an integer is stored as empty.
        #[arg(long, default_value = "")]
        nacimiento: String,
    },
    /// Show the stored record.
    Read,
    /// Delete the stored record.
    Delete,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::Save {
                id,
                nombre,
                apellidos,
                nacimiento,
            } => Command::Save(PersonRecord::from_form(&id, &nombre, &apellidos, &nacimiento)),
            Action::Read => Command::Read,
            Action::Delete => Command::Delete,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let path = path.to_str().context("config path is not valid UTF-8")?;
            load_config_from(path, true)
        }
        None => load_config(),
    }
    .context("failed to load configuration")?;

    let dir = config.store.dir.as_deref().unwrap_or(DEFAULT_DIR);
    let name = config.store.name.as_deref().unwrap_or(DEFAULT_STORE_NAME);
    log::info!("using preference group {:?} in {}", name, dir);

    let store = FileStore::open(dir, name)
        .await
        .with_context(|| format!("failed to open preference group {name:?} in {dir}"))?;
    let records = PreferenceRecordStore::new(store);

    let output = Command::from(cli.action).execute(&records).await?;
    println!("{}", output);

    Ok(())
}
