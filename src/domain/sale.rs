//! Sales records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::codec::{self, CsvRow};
use crate::domain::{Collection, Normalized, Record, RecordId, StoreData};

/// Payment state of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    #[default]
    Paid,
    Overdue,
    Pending,
}

impl FromStr for SaleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(SaleStatus::Paid),
            "overdue" => Ok(SaleStatus::Overdue),
            "pending" => Ok(SaleStatus::Pending),
            _ => Err(format!(
                "Invalid status: '{}'. Valid statuses are: paid, overdue, pending",
                s
            )),
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaleStatus::Paid => "paid",
            SaleStatus::Overdue => "overdue",
            SaleStatus::Pending => "pending",
        };
        f.write_str(label)
    }
}

/// One sale: an order line with customer, amount and payment status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default = "RecordId::new")]
    pub id: RecordId,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: SaleStatus,
}

impl Sale {
    /// Construct a sale with a fresh id
    pub fn build(
        order_id: &str,
        customer: &str,
        product: &str,
        amount: f64,
        date: Option<NaiveDate>,
        status: SaleStatus,
    ) -> Self {
        Sale {
            id: RecordId::new(),
            order_id: order_id.to_string(),
            customer: customer.to_string(),
            product: product.to_string(),
            amount,
            date,
            status,
        }
    }
}

impl Record for Sale {
    const COLLECTION: Collection = Collection::Sales;

    fn id(&self) -> RecordId {
        self.id
    }

    fn headers() -> &'static [&'static str] {
        &["orderId", "customer", "product", "amount", "date", "status"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer.clone(),
            self.product.clone(),
            codec::fmt_number(self.amount),
            codec::fmt_date(self.date),
            self.status.to_string(),
        ]
    }

    fn from_row(row: &CsvRow) -> Normalized<Self> {
        let mut issues = Vec::new();
        let record = Sale {
            id: RecordId::new(),
            order_id: row.value("orderId"),
            customer: row.value("customer"),
            product: row.value("product"),
            amount: row.number("amount", &mut issues),
            date: row.date("date", &mut issues),
            status: row.status("status", &mut issues),
        };
        Normalized { record, issues }
    }

    fn records(data: &StoreData) -> &[Self] {
        &data.sales
    }

    fn records_mut(data: &mut StoreData) -> &mut Vec<Self> {
        &mut data.sales
    }
}
