use super::customer::Customer;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn customers(customers: &[Customer]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "MOBILE"]);
        for customer in customers {
            table.add_row(row![customer.id, customer.name, customer.email, customer.mobile]);
        }
        table.printstd();

        Ok(())
    }
}
