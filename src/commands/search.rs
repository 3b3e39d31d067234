use crate::db::customers::Customers;
use crate::libs::customer::validate_search_name;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Name fragment to search for (substring match)
    name: String,
    /// Print matches as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    validate_search_name(&args.name)?;

    let mut customers = Customers::new()?;
    let found = customers.search_by_name(&args.name)?;

    if found.is_empty() {
        msg_warning!(Message::NoCustomersMatching(args.name));
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        msg_info!(Message::CustomersFound(found.len()));
        View::customers(&found)?;
    }

    Ok(())
}
