use crate::db::customers::Customers;
use crate::libs::customer::Customer;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// 6-digit customer ID (primary key)
    id: String,
    /// Customer name
    name: String,
    /// Email address
    email: String,
    /// Mobile number
    mobile: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let customer = Customer::new(&args.id, &args.name, &args.email, &args.mobile);
    customer.validate()?;

    let mut customers = Customers::new()?;
    if customers.insert(&customer).is_inserted() {
        msg_success!(Message::CustomerCreated(customer.id));
    } else {
        msg_error!(Message::CustomerInsertFailed(customer.id));
    }

    Ok(())
}
