use crate::db::customers::Customers;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut customers = Customers::new()?;
    let all = customers.list_all()?;

    if all.is_empty() {
        msg_info!(Message::NoCustomersFound);
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        msg_info!(Message::CustomersFound(all.len()));
        View::customers(&all)?;
    }

    Ok(())
}
