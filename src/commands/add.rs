use crate::{
    db::tasks::JsonTaskRepository,
    libs::{config::Config, data_storage::DataStorage, validator::TaskManager},
};
use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Free-form description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date in YYYY-MM-DD format
    #[arg(long)]
    due: String,
    /// One of: Low, Medium, High
    #[arg(short, long)]
    priority: String,
}

pub fn cmd(add_args: AddArgs, config: &Config) -> Result<ExitCode> {
    let repository = JsonTaskRepository::from_config(config, &DataStorage::new());
    let manager = TaskManager::new(repository);

    let added = manager.add_new_task(&add_args.title, add_args.description.as_deref(), &add_args.due, &add_args.priority);

    Ok(if added.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
