mod associate;
mod client;
mod config;
mod kubemodel;
mod store;

use anyhow::{Context, Result};
use associate::LogDiagnostics;
use clap::{Parser, Subcommand};
use config::SwitchConfig;
use gardenpath::{garden_kubeconfig_path, parse_with, seed_identifier, shoot_identifier, ParseMode};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Lach")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print identifier of a shoot kubeconfig
    Shoot {
        landscape: String,
        project: String,
        shoot: String,
    },
    /// Print identifier of a seed kubeconfig
    Seed { landscape: String, seed: String },
    /// Print kubeconfig path of the landscape's garden cluster
    GardenPath { landscape: String },
    /// Decode kubeconfig identifier
    Parse {
        /// Require the kind marker to be the second segment
        #[clap(long)]
        strict: bool,
        identifier: String,
    },
    /// List kubeconfigs of every configured gardener store
    List {
        switch_config: PathBuf,
        /// Only list store with this id
        #[clap(long)]
        store: Option<String>,
    },
}

async fn list(switch_config: PathBuf, only: Option<String>) -> Result<()> {
    let config = SwitchConfig::from_path(&switch_config)
        .with_context(|| format!("loading {}", switch_config.display()))?;

    for store in config.gardener_stores() {
        if only.is_some() && store.id != only {
            continue;
        }
        let store_config = config::get_store_config(store)?;
        let landscape = store_config.landscape(store)?;
        log::info!("Listing landscape {}", landscape);

        let client = client::garden_client(&store_config).await?;
        let snapshot = client::fetch_snapshot(&client)
            .await
            .with_context(|| format!("fetching objects of landscape {}", landscape))?;
        for entry in store::resolve(&landscape, snapshot, &LogDiagnostics) {
            println!("{}", entry.path());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    match opts.command {
        Command::Shoot {
            landscape,
            project,
            shoot,
        } => println!("{}", shoot_identifier(&landscape, &project, &shoot)),
        Command::Seed { landscape, seed } => println!("{}", seed_identifier(&landscape, &seed)),
        Command::GardenPath { landscape } => println!("{}", garden_kubeconfig_path(&landscape)),
        Command::Parse { strict, identifier } => {
            let mode = if strict {
                ParseMode::Strict
            } else {
                ParseMode::Compatible
            };
            let id = parse_with(&identifier, mode)?;
            println!("landscape: {}", id.landscape);
            println!("kind:      {}", id.kind);
            println!("name:      {}", id.name);
            if !id.project.is_empty() {
                println!("namespace: {}", id.namespace);
                println!("project:   {}", id.project);
            }
        }
        Command::List {
            switch_config,
            store,
        } => list(switch_config, store).await?,
    }
    Ok(())
}
