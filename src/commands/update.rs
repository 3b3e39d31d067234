use crate::db::customers::Customers;
use crate::libs::customer::Customer;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// 6-digit customer ID of the record to update
    id: String,
    /// New customer name
    name: String,
    /// New email address
    email: String,
    /// New mobile number
    mobile: String,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let customer = Customer::new(&args.id, &args.name, &args.email, &args.mobile);
    customer.validate()?;

    let mut customers = Customers::new()?;
    if customers.update(&customer) > 0 {
        msg_success!(Message::CustomerUpdated(customer.id));
    } else {
        msg_warning!(Message::CustomerNotFound(customer.id));
    }

    Ok(())
}
