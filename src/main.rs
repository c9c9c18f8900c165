//! babel-plugins CLI
//!
//! Inspect and edit Babel plugin lists stored as JSON, either a bare array of
//! plugin entries or a host object with `options.babel.plugins`.

use anyhow::{Context, Result};
use babel_plugin_helpers::{
    add_plugin, find_plugin, has_plugin, normalize_plugin_name, resolve_plugin_name,
    AddPluginOptions, ConfigDocument, PluginConfig, VERSION,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "babel-plugins")]
#[command(author, version = VERSION, about = "Normalize Babel plugin names and place plugins in a pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of each raw plugin name
    Normalize {
        /// Raw plugin names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the canonical name a plugin entry resolves to
    Resolve {
        /// Plugin entry as JSON, e.g. '"foo"' or '["foo", {}]'
        entry: String,
    },

    /// Print the configured entry for a plugin
    Find {
        /// JSON configuration file
        config: PathBuf,
        /// Canonical plugin name
        name: String,
    },

    /// Report whether a plugin is configured
    Has {
        /// JSON configuration file
        config: PathBuf,
        /// Canonical plugin name
        name: String,
    },

    /// Insert a plugin entry honoring placement constraints
    Add {
        /// JSON configuration file
        config: PathBuf,
        /// Plugin entry as JSON
        entry: String,
        /// Plugins the new entry must come before
        #[arg(long, value_name = "NAME")]
        before: Vec<String>,
        /// Plugins the new entry must come after
        #[arg(long, value_name = "NAME")]
        after: Vec<String>,
        /// Write the result back to the configuration file
        #[arg(short, long)]
        write: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Normalize { names } => {
            for name in names {
                println!("{}", normalize_plugin_name(&name));
            }
        }
        Commands::Resolve { entry } => {
            let entry = PluginConfig::from_json(&entry)?;
            match resolve_plugin_name(&entry) {
                Some(name) => println!("{}", name),
                None => println!("<unresolvable>"),
            }
        }
        Commands::Find { config, name } => {
            let doc = load(&config)?;
            let Some(entry) = find_plugin(&doc, &name) else {
                tracing::info!(%name, "plugin not configured");
                return Ok(ExitCode::FAILURE);
            };
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        Commands::Has { config, name } => {
            let doc = load(&config)?;
            println!("{}", has_plugin(&doc, &name));
        }
        Commands::Add {
            config,
            entry,
            before,
            after,
            write,
        } => {
            let mut doc = load(&config)?;
            let entry = PluginConfig::from_json(&entry)?;
            let options = AddPluginOptions { before, after };
            add_plugin(&mut doc, entry, &options)
                .with_context(|| format!("adding plugin to '{}'", config.display()))?;

            if write {
                doc.save(&config)
                    .with_context(|| format!("writing '{}'", config.display()))?;
                tracing::info!(path = %config.display(), "configuration updated");
            } else {
                println!("{}", doc.to_json_pretty()?);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load(path: &Path) -> Result<ConfigDocument> {
    tracing::debug!(path = %path.display(), "loading plugin configuration");
    ConfigDocument::load(path).with_context(|| format!("loading '{}'", path.display()))
}
