//! Delivery records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::codec::{self, CsvRow};
use crate::domain::{Collection, Normalized, Record, RecordId, StoreData};

/// Fulfillment state of a delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Completed,
}

impl FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(DeliveryStatus::Pending),
            "completed" => Ok(DeliveryStatus::Completed),
            _ => Err(format!(
                "Invalid status: '{}'. Valid statuses are: pending, completed",
                s
            )),
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// One outgoing delivery tied to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(default = "RecordId::new")]
    pub id: RecordId,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub worth: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: DeliveryStatus,
}

impl Delivery {
    /// Construct a delivery with a fresh id
    pub fn build(
        order_id: &str,
        customer: &str,
        mode: &str,
        worth: f64,
        date: Option<NaiveDate>,
        status: DeliveryStatus,
    ) -> Self {
        Delivery {
            id: RecordId::new(),
            order_id: order_id.to_string(),
            customer: customer.to_string(),
            mode: mode.to_string(),
            worth,
            date,
            status,
        }
    }
}

impl Record for Delivery {
    const COLLECTION: Collection = Collection::Deliveries;

    fn id(&self) -> RecordId {
        self.id
    }

    fn headers() -> &'static [&'static str] {
        &["orderId", "customer", "mode", "worth", "date", "status"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer.clone(),
            self.mode.clone(),
            codec::fmt_number(self.worth),
            codec::fmt_date(self.date),
            self.status.to_string(),
        ]
    }

    fn from_row(row: &CsvRow) -> Normalized<Self> {
        let mut issues = Vec::new();
        let record = Delivery {
            id: RecordId::new(),
            order_id: row.value("orderId"),
            customer: row.value("customer"),
            mode: row.value("mode"),
            worth: row.number("worth", &mut issues),
            date: row.date("date", &mut issues),
            status: row.status("status", &mut issues),
        };
        Normalized { record, issues }
    }

    fn records(data: &StoreData) -> &[Self] {
        &data.deliveries
    }

    fn records_mut(data: &mut StoreData) -> &mut Vec<Self> {
        &mut data.deliveries
    }
}
