use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::{
    cli::args::OutputFormat,
    models::{Catalog, OrderReceipt, OrderSummary},
};

#[derive(Tabled)]
struct MenuTableRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct SummaryTableRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

pub fn format_menu_table(catalog: &Catalog) -> String {
    let rows: Vec<MenuTableRow> = catalog
        .entries()
        .map(|entry| MenuTableRow {
            item: entry.name.clone(),
            price: format_price(u64::from(entry.unit_price)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_summary_table(summary: &OrderSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {}\n",
        style("Customer Name").bold(),
        style(&summary.customer_name).green()
    ));

    if summary.is_empty() {
        output.push_str(&format!("{}\n", style("No items ordered").dim()));
    } else {
        let rows: Vec<SummaryTableRow> = summary
            .lines
            .iter()
            .map(|line| SummaryTableRow {
                item: line.item.clone(),
                quantity: line.quantity,
                unit_price: format_price(u64::from(line.unit_price)),
                line_total: format_price(line.line_total),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded()).with(Alignment::left());
        output.push_str(&format!("{}\n", table));
    }

    output.push_str(&format!(
        "{}: {}",
        style("Total Price").bold(),
        style(format_price(summary.grand_total)).yellow()
    ));

    output
}

pub fn format_receipt_json(receipt: &OrderReceipt) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(receipt)?)
}

/// Renders a submitted order in the requested format.
pub fn render_receipt(receipt: &OrderReceipt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(receipt.summary.to_string()),
        OutputFormat::Table => Ok(format_summary_table(&receipt.summary)),
        OutputFormat::Json => format_receipt_json(receipt),
    }
}

pub fn format_price(amount: u64) -> String {
    format!("${}", amount)
}
