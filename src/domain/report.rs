//! Business summary computed over the whole store

use chrono::Datelike;

use crate::domain::customer::{derive_customers, CustomerSummary};
use crate::domain::{DeliveryStatus, Product, StoreData};

/// Sales total for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySales {
    pub label: String,
    pub total: f64,
}

/// The numbers behind the dashboard: headline figures, top customers,
/// products running low and a monthly sales breakdown
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub total_sales: f64,
    pub expenses: f64,
    pub profit: f64,
    pub pending_deliveries: usize,
    pub top_customers: Vec<CustomerSummary>,
    pub low_stock: Vec<Product>,
    pub monthly: Vec<MonthlySales>,
}

/// At most this many customers appear in the report
const TOP_CUSTOMERS: usize = 5;

/// At most this many months appear in the breakdown (most recent kept)
const MONTHS_SHOWN: usize = 8;

impl DashboardReport {
    pub fn compute(data: &StoreData, expense_ratio: f64) -> Self {
        let total_sales: f64 = data.sales.iter().map(|s| s.amount).sum();
        let expenses = (total_sales * expense_ratio).round();
        let profit = total_sales - expenses;

        let pending_deliveries = data
            .deliveries
            .iter()
            .filter(|d| d.status != DeliveryStatus::Completed)
            .count();

        let mut top_customers = derive_customers(&data.sales);
        top_customers.sort_by(|a, b| {
            b.balance
                .partial_cmp(&a.balance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        top_customers.truncate(TOP_CUSTOMERS);

        let low_stock: Vec<Product> = data
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect();

        DashboardReport {
            total_sales,
            expenses,
            profit,
            pending_deliveries,
            top_customers,
            low_stock,
            monthly: monthly_breakdown(data),
        }
    }
}

/// Group dated sales by calendar month, oldest first, keeping the most
/// recent months. Undated sales count toward totals but not here.
fn monthly_breakdown(data: &StoreData) -> Vec<MonthlySales> {
    let mut buckets: Vec<((i32, u32), f64)> = Vec::new();

    for sale in &data.sales {
        let Some(date) = sale.date else {
            continue;
        };
        let key = (date.year(), date.month());
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += sale.amount,
            None => buckets.push((key, sale.amount)),
        }
    }

    buckets.sort_by_key(|(key, _)| *key);
    if buckets.len() > MONTHS_SHOWN {
        buckets.drain(..buckets.len() - MONTHS_SHOWN);
    }

    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlySales {
            label: format!("{} {}", month_name(month), year),
            total,
        })
        .collect()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
