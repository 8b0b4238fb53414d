pub mod add;
pub mod demo;
pub mod init;

use crate::libs::{config::Config, messages};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write ptm.json to the working directory")]
    Init(init::InitArgs),
    #[command(about = "Validate a task and append it to the task store")]
    Add(add::AddArgs),
    #[command(about = "Add the built-in sample tasks")]
    Demo,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<ExitCode> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args).map(|_| ExitCode::SUCCESS),
            Commands::Add(args) => add::cmd(args, &Self::configure()?),
            Commands::Demo => demo::cmd(&Self::configure()?).map(|_| ExitCode::SUCCESS),
        }
    }

    /// Loads `ptm.json` and applies its message language.
    fn configure() -> Result<Config> {
        let config = Config::read()?;
        messages::set_language(config.language);
        Ok(config)
    }
}
