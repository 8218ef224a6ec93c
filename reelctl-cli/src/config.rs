use anyhow::Result;
use clap::{Parser, Subcommand};
use reelctl_core::ReelConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = ReelConfig::config_path();

    // Check if config already exists
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    ReelConfig::default().save_to(&config_path)?;

    println!("Created config at: {:?}", config_path);
    Ok(())
}

fn run_show() -> Result<()> {
    let config = ReelConfig::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", ReelConfig::config_path().display());
    Ok(())
}
