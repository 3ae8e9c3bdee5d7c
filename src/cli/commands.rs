use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::{error, info, warn};

use crate::{
    cli::args::*,
    models::{AddItemRequest, Catalog, OrderError, OrderReceipt},
    services::OrderService,
    utils::{
        formatting::{format_menu_table, format_price, render_receipt},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");

const ACTIONS: [&str; 6] = [
    "Set customer name",
    "Add item",
    "View current order",
    "Submit order",
    "Reset order",
    "Quit",
];

pub struct CliApp {
    config: Config,
    catalog: Arc<Catalog>,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        console::set_colors_enabled(config.color);
        Self {
            config,
            catalog: Arc::new(Catalog::default()),
        }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command.unwrap_or(Commands::Order { format: None }) {
            Commands::Order { format } => self.handle_order_session(format),
            Commands::Menu => self.handle_menu(),
            Commands::Price { item } => self.handle_price(&item),
            Commands::Quote {
                customer,
                items,
                format,
                output,
            } => self.handle_quote(customer, items, format, output),
        }
    }

    fn handle_menu(&self) -> Result<()> {
        println!("{} {}", INFO, style("Menu").bold().cyan());
        println!("{}", format_menu_table(&self.catalog));
        Ok(())
    }

    fn handle_price(&self, item: &str) -> Result<()> {
        let price = self.catalog.price_of(item)?;
        println!("Price: {}", format_price(u64::from(price)));
        Ok(())
    }

    fn handle_quote(
        &self,
        customer: String,
        items: Vec<ItemSpec>,
        format: Option<OutputFormat>,
        output: Option<String>,
    ) -> Result<()> {
        let receipt = build_quote(self.catalog.clone(), customer, &items)?;
        let rendered = render_receipt(&receipt, format.unwrap_or(self.config.format))?;

        match output {
            Some(path) => {
                write_output(Path::new(&path), &rendered)?;
                info!("Order {} written to {}", receipt.order_id, path);
                println!("{} Order summary written to {}", CHECKMARK, style(&path).green());
            }
            None => println!("{}", rendered),
        }

        Ok(())
    }

    // Interactive session
    fn handle_order_session(&self, format: Option<OutputFormat>) -> Result<()> {
        let format = format.unwrap_or(self.config.format);
        let theme = ColorfulTheme::default();
        let mut service = OrderService::new(self.catalog.clone());

        println!("{} {}", ROCKET, style("Ordering System").bold().cyan());

        loop {
            let action = Select::with_theme(&theme)
                .with_prompt("What would you like to do?")
                .items(&ACTIONS)
                .default(1)
                .interact()?;

            match action {
                0 => self.prompt_customer_name(&theme, &mut service)?,
                1 => self.prompt_add_item(&theme, &mut service)?,
                2 => self.show_current_order(&service),
                3 => self.submit_order(&service, format)?,
                4 => self.prompt_reset(&theme, &mut service)?,
                _ => break,
            }
        }

        info!("Ordering session ended");
        Ok(())
    }

    fn prompt_customer_name(&self, theme: &ColorfulTheme, service: &mut OrderService) -> Result<()> {
        let name: String = Input::with_theme(theme)
            .with_prompt("Customer Name")
            .with_initial_text(service.order().customer_name())
            .allow_empty(true)
            .interact_text()?;

        service.set_customer_name(name);
        Ok(())
    }

    fn prompt_add_item(&self, theme: &ColorfulTheme, service: &mut OrderService) -> Result<()> {
        let items = self.catalog.items();
        let labels: Vec<String> = items
            .iter()
            .map(|item| match service.price_of(item) {
                Ok(price) => format!("{} ({})", item, format_price(u64::from(price))),
                Err(_) => item.to_string(),
            })
            .collect();

        let initial = items
            .iter()
            .position(|item| *item == self.catalog.default_item())
            .unwrap_or(0);

        let selected = Select::with_theme(theme)
            .with_prompt("Select Item")
            .items(&labels)
            .default(initial)
            .interact()?;
        let item = items[selected];

        loop {
            let input: String = Input::with_theme(theme)
                .with_prompt("Quantity")
                .allow_empty(true)
                .interact_text()?;

            let added = AddItemRequest::from_input(item, &input).and_then(|request| {
                let message = item_added_message(&request);
                service.add(request).map(|_| message)
            });

            match added {
                Ok(message) => {
                    println!("{} {}", CHECKMARK, message);
                    self.show_current_order(service);
                    return Ok(());
                }
                Err(OrderError::InvalidQuantity { .. }) => {
                    println!("{} Please enter a valid quantity.", CROSS);
                }
                Err(e) => {
                    println!("{} Failed to add item: {}", CROSS, style(&e).red());
                    error!("Failed to add {}: {}", item, e);
                    return Ok(());
                }
            }
        }
    }

    fn show_current_order(&self, service: &OrderService) {
        match service.summarize() {
            Ok(summary) if summary.is_empty() => {
                println!("{} No items ordered yet", INFO);
            }
            Ok(summary) => print!("{}", summary.ordered_items()),
            Err(e) => {
                println!("{} Failed to show order: {}", CROSS, style(&e).red());
                error!("Failed to summarize order: {}", e);
            }
        }
    }

    fn submit_order(&self, service: &OrderService, format: OutputFormat) -> Result<()> {
        if service.is_empty() {
            println!("{} The order is empty", WARNING);
            warn!("Submit attempted on empty order {}", service.order().id());
        }

        match service.summarize() {
            Ok(summary) => {
                let receipt = OrderReceipt::new(service.order().id(), summary);
                println!("{} {}", INFO, style("Order Summary").bold().cyan());
                println!("{}", render_receipt(&receipt, format)?);
                info!(
                    "Order {} (opened {}) submitted, total {}",
                    receipt.order_id,
                    service.order().opened_at(),
                    format_price(receipt.summary.grand_total)
                );
            }
            Err(e) => {
                println!("{} Failed to submit order: {}", CROSS, style(&e).red());
                error!("Failed to submit order: {}", e);
            }
        }

        Ok(())
    }

    fn prompt_reset(&self, theme: &ColorfulTheme, service: &mut OrderService) -> Result<()> {
        let pending = !service.is_empty() || !service.order().customer_name().is_empty();
        if pending {
            let confirm = Confirm::with_theme(theme)
                .with_prompt("Are you sure you want to reset this order?")
                .default(false)
                .interact()?;

            if !confirm {
                println!("Order reset cancelled");
                return Ok(());
            }
        }

        service.reset();
        println!("{} Order has been reset.", CHECKMARK);
        Ok(())
    }
}

/// Confirmation shown after an item is added, echoing the parsed quantity.
pub fn item_added_message(request: &AddItemRequest) -> String {
    format!("{} {}(s) added to the order.", request.quantity, request.item)
}

/// Prices a full order given on the command line.
pub fn build_quote(
    catalog: Arc<Catalog>,
    customer: String,
    items: &[ItemSpec],
) -> Result<OrderReceipt> {
    let mut service = OrderService::new(catalog);
    service.set_customer_name(customer);

    for spec in items {
        service
            .add_item_from_input(&spec.item, &spec.quantity)
            .with_context(|| format!("Could not add '{}={}'", spec.item, spec.quantity))?;
    }

    let summary = service.summarize()?;
    Ok(OrderReceipt::new(service.order().id(), summary))
}

pub fn write_output(path: &Path, rendered: &str) -> Result<()> {
    let mut contents = rendered.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
