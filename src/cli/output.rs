//! Output formatting utilities

use std::io::{BufRead, Write};

use crate::domain::codec::fmt_date;
use crate::domain::{CustomerSummary, DashboardReport, Delivery, Product, Sale};

/// Format an amount as money: currency symbol, thousands grouping, no
/// decimals.
pub fn format_money(amount: f64, currency: &str) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded < 0 {
        format!("-{}{}", currency, grouped)
    } else {
        format!("{}{}", currency, grouped)
    }
}

/// Replace an empty value with the placeholder dash
fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

/// Render rows under a header with aligned columns
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    let push_row = |cells: Vec<String>, output: &mut String| {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            let pad = widths[i].saturating_sub(cell.chars().count());
            if i + 1 < cells.len() {
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    };

    push_row(headers.iter().map(|h| h.to_string()).collect(), &mut output);
    for row in rows {
        push_row(row.clone(), &mut output);
    }
    output
}

/// Format the sales collection for display
pub fn format_sales(sales: &[Sale], currency: &str) -> String {
    if sales.is_empty() {
        return "No sales found\n".to_string();
    }

    let rows: Vec<Vec<String>> = sales
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                s.id.short(),
                s.order_id.clone(),
                s.customer.clone(),
                s.product.clone(),
                format_money(s.amount, currency),
                fmt_date(s.date),
                s.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &["#", "id", "orderId", "customer", "product", "amount", "date", "status"],
        &rows,
    )
}

/// Format the product inventory for display
pub fn format_products(products: &[Product], currency: &str) -> String {
    if products.is_empty() {
        return "No products found\n".to_string();
    }

    let rows: Vec<Vec<String>> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.id.short(),
                p.name.clone(),
                or_dash(&p.category),
                p.stock.to_string(),
                p.reorder.to_string(),
                format_money(p.price, currency),
            ]
        })
        .collect();

    render_table(
        &["#", "id", "name", "category", "stock", "reorder", "price"],
        &rows,
    )
}

/// Format the deliveries collection for display
pub fn format_deliveries(deliveries: &[Delivery], currency: &str) -> String {
    if deliveries.is_empty() {
        return "No deliveries found\n".to_string();
    }

    let rows: Vec<Vec<String>> = deliveries
        .iter()
        .enumerate()
        .map(|(i, d)| {
            vec![
                (i + 1).to_string(),
                d.id.short(),
                d.order_id.clone(),
                d.customer.clone(),
                or_dash(&d.mode),
                format_money(d.worth, currency),
                fmt_date(d.date),
                d.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &["#", "id", "orderId", "customer", "mode", "worth", "date", "status"],
        &rows,
    )
}

/// Format the derived customer view for display
pub fn format_customers(customers: &[CustomerSummary], currency: &str) -> String {
    if customers.is_empty() {
        return "No customers found\n".to_string();
    }

    let rows: Vec<Vec<String>> = customers
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                (i + 1).to_string(),
                c.name.clone(),
                c.contact.clone(),
                format_money(c.balance, currency),
                fmt_date(c.last_order),
            ]
        })
        .collect();

    render_table(&["#", "name", "contact", "balance", "lastOrder"], &rows)
}

/// Format the business report for display
pub fn format_report(report: &DashboardReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total sales         {}\n",
        format_money(report.total_sales, currency)
    ));
    output.push_str(&format!(
        "Expenses (est.)     {}\n",
        format_money(report.expenses, currency)
    ));
    output.push_str(&format!(
        "Profit (est.)       {}\n",
        format_money(report.profit, currency)
    ));
    output.push_str(&format!(
        "Pending deliveries  {}\n",
        report.pending_deliveries
    ));

    output.push_str("\nTop customers\n");
    if report.top_customers.is_empty() {
        output.push_str("  No data\n");
    } else {
        for customer in &report.top_customers {
            output.push_str(&format!(
                "  {}  {}\n",
                customer.name,
                format_money(customer.balance, currency)
            ));
        }
    }

    output.push_str("\nLow stock\n");
    if report.low_stock.is_empty() {
        output.push_str("  All good\n");
    } else {
        for product in &report.low_stock {
            output.push_str(&format!(
                "  {}  {} in stock (reorder at {})\n",
                product.name, product.stock, product.reorder
            ));
        }
    }

    output.push_str("\nSales by month\n");
    if report.monthly.is_empty() {
        output.push_str("  No data\n");
    } else {
        for month in &report.monthly {
            output.push_str(&format!(
                "  {}  {}\n",
                month.label,
                format_money(month.total, currency)
            ));
        }
    }

    output
}

/// Ask the user a yes/no question on the terminal. Only an explicit
/// "y"/"yes" counts as a yes.
pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
