//! Configuration command handlers.

use anyhow::Result;

use crate::cli::args::ConfigCommands;
use crate::cli::output::{print_key_value, print_success};
use crate::shared::config::{CliConfig, config_path, load_config, write_default_config};

/// Handle config subcommands.
pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Profiles => list_profiles(),
        ConfigCommands::Init { force } => init_config(force),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config() -> Result<()> {
    match load_config()? {
        Some(cfg) => {
            println!("Current configuration:");
            println!();
            print_key_value("Default profile", &cfg.default_profile);

            if let Some(profile) = cfg.profiles.get(&cfg.default_profile) {
                print_key_value("Catalog", &profile.catalog);
            }
        }
        None => {
            let defaults = CliConfig::default();
            println!("No config file found. Using defaults:");
            println!();
            print_key_value("Default profile", &defaults.default_profile);
            if let Some(profile) = defaults.profiles.get(&defaults.default_profile) {
                print_key_value("Catalog", &profile.catalog);
            }
            println!();
            println!("Run 'arcade config init' to create a config file.");
        }
    }

    Ok(())
}

fn list_profiles() -> Result<()> {
    match load_config()? {
        Some(cfg) => {
            println!("Available profiles:");
            println!();

            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();

            for name in names {
                let marker = if name == &cfg.default_profile {
                    " (default)"
                } else {
                    ""
                };
                println!("  {}{}", name, marker);
                println!("    Catalog: {}", cfg.profiles[name].catalog);
            }
        }
        None => {
            println!("No config file found.");
            println!("Run 'arcade config init' to create a config file.");
        }
    }

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = config_path()?;
    write_default_config(&path, force)?;

    print_success(&format!("Created config file at {}", path.display()));
    println!();
    println!("Edit this file to point profiles at other catalogs (URL or JSON file).");

    Ok(())
}

fn show_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}
