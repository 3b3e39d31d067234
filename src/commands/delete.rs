use crate::db::customers::Customers;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Customer ID of the record to delete
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    if args.id.is_empty() {
        msg_bail_anyhow!(Message::CustomerIdRequired);
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(Message::ConfirmDeleteCustomer(args.id.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut customers = Customers::new()?;
    if customers.delete(&args.id) > 0 {
        msg_success!(Message::CustomerDeleted(args.id));
    } else {
        msg_warning!(Message::CustomerNotFound(args.id));
    }

    Ok(())
}
