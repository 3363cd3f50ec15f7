//! Config command handler

use crate::args::ConfigSubcommand;
use grade_analyzer::config::Config;
use std::io::{self, Write};
use std::process::ExitCode;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> ExitCode {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) -> ExitCode {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return ExitCode::SUCCESS;
    };

    if let Some(value) = config.get(&k) {
        println!("{value}");
        ExitCode::SUCCESS
    } else {
        eprintln!("Unknown config key: '{k}'");
        ExitCode::FAILURE
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> ExitCode {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        return ExitCode::FAILURE;
    }

    println!("✓ Set {key} = {value}");
    ExitCode::SUCCESS
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> ExitCode {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        return ExitCode::FAILURE;
    }

    println!("✓ Reset {key} to default");
    ExitCode::SUCCESS
}

/// Handle the config reset subcommand
pub fn handle_config_reset() -> ExitCode {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return ExitCode::SUCCESS;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
        println!("✗ Reset cancelled");
        return ExitCode::SUCCESS;
    }

    match Config::reset() {
        Ok(()) => {
            println!("✓ Config reset to defaults");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to remove config file: {e}");
            ExitCode::FAILURE
        }
    }
}
