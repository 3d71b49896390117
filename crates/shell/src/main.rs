//! Interactive console shell for the MODSHOP order-management demo.
//!
//! Thin I/O glue: renders menus, parses input, and drives the domain crates.
//! All state lives in the [`AppContext`] and [`OrderRegistry`] built in
//! `main` and threaded through every flow.

use std::io::{self, Write};

use anyhow::Result;

use modshop_catalog::{Addon, Catalog, ProductCode};
use modshop_core::{AppContext, DomainError, DomainResult, Settings, SettingsUpdate};
use modshop_orders::{Order, OrderId, OrderRegistry};
use modshop_pricing::PricingPolicy;

fn main() -> Result<()> {
    modshop_observability::init();
    tracing::info!("shell session started");

    let mut ctx = AppContext::new();
    let mut registry = OrderRegistry::new();
    let mut current: Option<OrderId> = None;

    println!("== MODSHOP ==");

    loop {
        print_menu(current);

        let Some(choice) = read_line("Choice: ")? else {
            break;
        };
        println!();

        match choice.as_str() {
            "1" => {
                let order = registry.create_order(&mut ctx);
                current = Some(order.id());
                println!("Order {} created", order.id());
            }
            "2" => match current_order(&mut registry, current) {
                Some(id) => add_product(&mut registry, id, &mut ctx)?,
                None => println!("Create an order first!"),
            },
            "3" => match current_order(&mut registry, current) {
                Some(id) => {
                    let empty = registry
                        .get_order(id)
                        .map(|order| order.products().is_empty())
                        .unwrap_or(true);
                    if empty {
                        println!("Add some products first");
                    } else {
                        apply_addon(&mut registry, id)?;
                    }
                }
                None => println!("Create an order first!"),
            },
            "4" => match current_order(&mut registry, current) {
                Some(id) => change_strategy(&mut registry, id, &mut ctx)?,
                None => println!("Create an order first!"),
            },
            "5" => match current_order(&mut registry, current) {
                Some(id) => {
                    if let Some(order) = registry.get_order(id) {
                        show_order(order, &ctx);
                    }
                }
                None => println!("No current order"),
            },
            "6" => match current_order(&mut registry, current) {
                Some(id) => {
                    if let Some(order) = registry.get_order(id) {
                        order.checkout(&mut ctx);
                        current = None;
                    }
                }
                None => println!("No order to checkout"),
            },
            "7" => show_all_orders(&registry, &ctx),
            "8" => configure(&mut ctx)?,
            "9" => show_log(&ctx),
            "0" => {
                println!("Goodbye");
                break;
            }
            _ => println!("Invalid choice!"),
        }

        println!();
    }

    Ok(())
}

fn print_menu(current: Option<OrderId>) {
    println!("MAIN MENU");
    println!("1. Create a new order");
    println!("2. Add a product to the current order");
    println!("3. Apply an add-on to a product");
    println!("4. Change pricing strategy");
    println!("5. Show the current order");
    println!("6. Checkout the current order");
    println!("7. Show all orders");
    println!("8. Configure the system");
    println!("9. Show the system log");
    println!("0. Quit");

    match current {
        Some(id) => println!("Current order: {id}"),
        None => println!("No current order, create one first!"),
    }
}

/// Read one trimmed line from stdin; `None` means the input was closed.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Resolve the current-order cursor, dropping it if the id no longer resolves.
fn current_order(registry: &mut OrderRegistry, current: Option<OrderId>) -> Option<OrderId> {
    current.filter(|id| registry.get_order(*id).is_some())
}

fn parse_number(input: &str) -> DomainResult<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_input(format!("not a number: '{}'", input.trim())))
}

/// Parse a 1-based menu position into a 0-based index.
fn parse_position(input: &str, len: usize) -> DomainResult<usize> {
    let position: usize = input
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_input(format!("not a number: '{}'", input.trim())))?;
    if position == 0 || position > len {
        return Err(DomainError::invalid_input(format!(
            "position {position} out of range 1..={len}"
        )));
    }
    Ok(position - 1)
}

fn money(amount: f64, settings: &Settings) -> String {
    format!("{} {:.2}", settings.currency_label, amount)
}

fn add_product(registry: &mut OrderRegistry, id: OrderId, ctx: &mut AppContext) -> Result<()> {
    println!("PRODUCT CATALOG");
    for (position, code) in ProductCode::ALL.iter().enumerate() {
        println!(
            "{}. {} ({})",
            position + 1,
            code.as_str(),
            money(code.list_price(), ctx.settings())
        );
    }

    let Some(choice) = read_line("Choice: ")? else {
        return Ok(());
    };
    let code = match parse_position(&choice, ProductCode::ALL.len()) {
        Ok(index) => ProductCode::ALL[index],
        Err(_) => {
            println!("Invalid product!");
            return Ok(());
        }
    };

    match Catalog::create(ctx, code.as_str()) {
        Ok(product) => {
            let description = product.description();
            if let Some(order) = registry.get_order(id) {
                order.add_product(product, ctx);
                println!("{description} added to the order!");
            }
        }
        Err(DomainError::NotFound) => println!("Invalid product!"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn apply_addon(registry: &mut OrderRegistry, id: OrderId) -> Result<()> {
    let Some(order) = registry.get_order(id) else {
        return Ok(());
    };

    println!("Pick the product to customize:");
    for (position, product) in order.products().iter().enumerate() {
        println!("{}. {}", position + 1, product.description());
    }

    let Some(choice) = read_line("Product number: ")? else {
        return Ok(());
    };
    let index = match parse_position(&choice, order.products().len()) {
        Ok(index) => index,
        Err(_) => {
            println!("Invalid index!");
            return Ok(());
        }
    };

    println!("AVAILABLE ADD-ONS");
    for (position, addon) in Addon::ALL.iter().enumerate() {
        println!(
            "{}. {} (+{:.2})",
            position + 1,
            addon.label(),
            addon.surcharge()
        );
    }

    let Some(choice) = read_line("Choice: ")? else {
        return Ok(());
    };
    let addon = match parse_position(&choice, Addon::ALL.len()) {
        Ok(index) => Addon::ALL[index],
        Err(_) => {
            println!("Invalid add-on!");
            return Ok(());
        }
    };

    if let Some(product) = order.apply_addon(index, addon) {
        println!("Add-on applied. New product: {}", product.description());
    }

    Ok(())
}

fn change_strategy(registry: &mut OrderRegistry, id: OrderId, ctx: &mut AppContext) -> Result<()> {
    println!("PRICING STRATEGIES");
    println!("1. Standard (price + VAT)");
    println!("2. Promo (20% off)");
    println!("3. Wholesale (35% off, no VAT)");
    println!("4. Dynamic (custom factor)");

    let Some(choice) = read_line("Choice: ")? else {
        return Ok(());
    };

    let strategy = match choice.as_str() {
        "1" => PricingPolicy::Standard,
        "2" => PricingPolicy::Promo,
        "3" => PricingPolicy::Wholesale,
        "4" => {
            let Some(input) = read_line("Multiplier: ")? else {
                return Ok(());
            };
            match parse_number(&input) {
                Ok(factor) => PricingPolicy::Dynamic(factor),
                Err(_) => {
                    println!("Invalid strategy!");
                    return Ok(());
                }
            }
        }
        _ => {
            println!("Invalid strategy!");
            return Ok(());
        }
    };

    if let Some(order) = registry.get_order(id) {
        order.change_strategy(strategy, ctx);
        println!("Strategy changed: {}", strategy.name());
    }

    Ok(())
}

fn show_order(order: &Order, ctx: &AppContext) {
    let settings = ctx.settings();

    println!("Order {}", order.id());
    println!("Status: {}", order.status());
    println!("Strategy: {}", order.strategy().name());
    println!("Products:");

    for (position, product) in order.products().iter().enumerate() {
        let final_price = order.strategy().apply(product.base_price(), settings);
        println!("  {}. {}", position + 1, product.description());
        println!("     base price: {}", money(product.base_price(), settings));
        println!("     final price: {}", money(final_price, settings));
    }

    println!("TOTAL: {}", money(order.compute_total(ctx), settings));
}

fn show_all_orders(registry: &OrderRegistry, ctx: &AppContext) {
    println!("ALL ORDERS");

    if registry.list_all().is_empty() {
        println!("No orders yet.");
        return;
    }

    for order in registry.list_all() {
        show_order(order, ctx);
        println!();
    }
}

fn configure(ctx: &mut AppContext) -> Result<()> {
    let settings = ctx.settings();
    println!("SYSTEM CONFIGURATION");
    println!("Currency: {}", settings.currency_label);
    println!("VAT: {}%", settings.tax_rate * 100.0);
    println!("Base discount: {}%", settings.base_discount * 100.0);

    let Some(answer) = read_line("Change the settings? (y/n): ")? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let mut update = SettingsUpdate::default();

    if let Some(input) = read_line("New currency (empty keeps current): ")? {
        if !input.is_empty() {
            update.currency_label = Some(input);
        }
    }
    if let Some(input) = read_line("New VAT % (empty keeps current): ")? {
        update.tax_rate = parse_optional_percent(&input);
    }
    if let Some(input) = read_line("New base discount % (empty keeps current): ")? {
        update.base_discount = parse_optional_percent(&input);
    }

    ctx.update_settings(update);
    println!("Configuration updated");

    Ok(())
}

/// Empty or unparseable input keeps the current value.
fn parse_optional_percent(input: &str) -> Option<f64> {
    if input.trim().is_empty() {
        return None;
    }
    match parse_number(input) {
        Ok(percent) => Some(percent / 100.0),
        Err(err) => {
            println!("{err}, keeping current value");
            None
        }
    }
}

fn show_log(ctx: &AppContext) {
    println!("SYSTEM LOG");
    for entry in ctx.log().entries() {
        println!("{entry}");
    }
}
