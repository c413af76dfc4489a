//! Customers derived from sales history
//!
//! The store does not keep a customer collection; customers are an
//! aggregation over sales, in order of first appearance.

use chrono::NaiveDate;

use crate::domain::codec;
use crate::domain::Sale;

/// One customer's aggregated sales position
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub name: String,
    pub contact: String,
    pub balance: f64,
    pub last_order: Option<NaiveDate>,
}

impl CustomerSummary {
    /// Column headers for delimited export
    pub fn headers() -> &'static [&'static str] {
        &["name", "contact", "balance", "lastOrder"]
    }

    /// Field values in `headers()` order
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact.clone(),
            codec::fmt_number(self.balance),
            codec::fmt_date(self.last_order),
        ]
    }
}

/// Aggregate sales into per-customer summaries.
///
/// Balance is the summed sale amount, `last_order` the latest sale date.
/// Contact details are not tracked yet, so the placeholder dash is used.
pub fn derive_customers(sales: &[Sale]) -> Vec<CustomerSummary> {
    let mut customers: Vec<CustomerSummary> = Vec::new();

    for sale in sales {
        let position = customers.iter().position(|c| c.name == sale.customer);
        let entry = match position {
            Some(i) => &mut customers[i],
            None => {
                customers.push(CustomerSummary {
                    name: sale.customer.clone(),
                    contact: "—".to_string(),
                    balance: 0.0,
                    last_order: None,
                });
                let last = customers.len() - 1;
                &mut customers[last]
            }
        };

        entry.balance += sale.amount;
        // None sorts before any date, so undated sales never win here.
        if sale.date > entry.last_order {
            entry.last_order = sale.date;
        }
    }

    customers
}
