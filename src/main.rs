// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate, expand commands)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use sutta_server::logging::init_logging;
use sutta_server::{
    load_config_file, save_config_file, ReferenceCatalog, ServerConfig, SuttaServer, Table,
    TableSource,
};

#[derive(Parser)]
#[command(name = "sutta-server")]
#[command(about = "Reference data server for a Buddhist text archive")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("SUTTA_RUSTC_VERSION"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Override the directory holding the reference tables
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run,

    /// Validate the configuration and reference tables without starting the server
    Validate,

    /// Print the acronym and name forms of one or more uids
    Expand {
        /// uids to expand, e.g. "sn22.1-5"
        #[arg(required = true)]
        uids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate) => validate_config(&cli.config, cli.data_dir),
        Some(Commands::Expand { uids }) => expand_uids(&cli.config, cli.data_dir, &uids),
        Some(Commands::Run) | None => run_server(cli.config, cli.port, cli.data_dir).await,
    }
}

/// Load a .env file next to the config file, if there is one.
fn load_env_file(config_path: &Path) -> bool {
    let Some(env_file) = config_path.parent().map(|dir| dir.join(".env")) else {
        return false;
    };
    if !env_file.exists() {
        return false;
    }
    match dotenvy::from_path(&env_file) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

fn apply_overrides(config: &mut ServerConfig, port: Option<u16>, data_dir: Option<PathBuf>) {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }
}

/// Run the Sutta Server
async fn run_server(
    config_path: PathBuf,
    port_override: Option<u16>,
    data_dir_override: Option<PathBuf>,
) -> Result<()> {
    let env_file_loaded = load_env_file(&config_path);

    // Create a default config on first run
    let created_default = !config_path.exists();
    let mut config = if created_default {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut default_config = ServerConfig::default();
        if let Some(port) = port_override {
            default_config.port = port;
        }
        save_config_file(&default_config, &config_path)?;
        default_config
    } else {
        load_config_file(&config_path)?
    };

    apply_overrides(&mut config, port_override, data_dir_override);
    init_logging(&config.log_level)?;

    if created_default {
        warn!(
            "Config file '{}' not found. Created default configuration.",
            config_path.display()
        );
    }

    info!("Starting Sutta Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }

    info!("Config file: {}", config_path.display());
    info!("Reference tables: {}", config.data_dir.display());
    debug!("Server configuration: {config:?}");

    let server = SuttaServer::new(config)?;
    server.run().await
}

/// Validate the configuration and every reference table
fn validate_config(config_path: &Path, data_dir_override: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    load_env_file(config_path);

    let mut config = match load_config_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    };
    println!("[OK] Configuration file is valid");

    apply_overrides(&mut config, None, data_dir_override);

    let source = TableSource::new(&config.data_dir);
    match ReferenceCatalog::load(&source) {
        Ok(catalog) => {
            println!("[OK] Reference tables are valid");
            println!();
            println!("Summary:");
            println!("  Host: {}", config.host);
            println!("  Port: {}", config.port);
            println!("  Log Level: {}", config.log_level);
            println!("  Data Dir: {}", config.data_dir.display());
            for table in Table::all() {
                println!("  {table}: {} entries", catalog.entry_count(*table));
            }
            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Reference tables are invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}

/// Print `uid<TAB>acronym<TAB>name` for each uid
fn expand_uids(
    config_path: &Path,
    data_dir_override: Option<PathBuf>,
    uids: &[String],
) -> Result<()> {
    load_env_file(config_path);

    let mut config = if config_path.exists() {
        load_config_file(config_path)?
    } else {
        ServerConfig::default()
    };
    apply_overrides(&mut config, None, data_dir_override);

    // Keep stdout for results; only problems are logged.
    init_logging("warn")?;

    let catalog = ReferenceCatalog::load(&TableSource::new(&config.data_dir))?;
    for uid in uids {
        println!(
            "{uid}\t{}\t{}",
            catalog.expand_uid_to_acronym(uid),
            catalog.expand_uid_to_name(uid)
        );
    }

    Ok(())
}
