//! Command-line interface for the smtbiz application.
//!
//! Each user action is a subcommand. A command collects and validates its
//! input, invokes the record store, and renders the outcome as text — there
//! is no background work and no state kept between invocations.

pub mod add;
pub mod delete;
pub mod list;
pub mod reset;
pub mod search;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new customer record")]
    Add(add::AddArgs),
    #[command(about = "Update an existing customer record")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a customer record by ID")]
    Delete(delete::DeleteArgs),
    #[command(about = "Search customers by name substring")]
    Search(search::SearchArgs),
    #[command(about = "List all customer records")]
    List(list::ListArgs),
    #[command(about = "Reset the store to the 5 sample records")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
