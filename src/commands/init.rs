//! Configuration initialization command.
//!
//! Writes `ptm.json` to the working directory so the store file name and
//! message language can be edited by hand afterwards.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::{Language, Message},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Message language to store in the configuration
    #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
    language: LanguageArg,
    /// Name of the JSON file that holds the tasks
    #[arg(long)]
    db_file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LanguageArg {
    En,
    Vi,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Vi => Language::Vi,
        }
    }
}

/// Saves a configuration built from the defaults and the given overrides.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    let storage = DataStorage::new();
    let mut config = Config::read_in(&storage)?;

    config.language = init_args.language.into();
    if let Some(db_file_name) = init_args.db_file_name {
        config.db_file_name = db_file_name;
    }
    config.save_in(&storage)?;

    msg_success!(Message::ConfigSaved(storage.get_path(CONFIG_FILE_NAME).display().to_string()));
    Ok(())
}
