//! Black-box test of the full order flow: catalog, decoration, pricing,
//! notification, registry.

use modshop_catalog::{Addon, Catalog};
use modshop_core::{AppContext, SettingsUpdate};
use modshop_orders::{OrderRegistry, OrderStatus};
use modshop_pricing::PricingPolicy;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn decorated_tshirt_checkout_end_to_end() {
    let mut ctx = AppContext::new();
    let mut registry = OrderRegistry::new();

    let id = registry.create_order(&mut ctx).id();
    let tshirt = Catalog::create(&mut ctx, "TSHIRT").expect("known code");
    assert_eq!(tshirt.base_price(), 20.00);

    let order = registry.get_order(id).expect("just created");
    order.add_product(tshirt, &mut ctx);

    let decorated = order
        .apply_addon(0, Addon::FrontPrint)
        .expect("line exists");
    assert_eq!(decorated.base_price(), 25.00);

    // Standard policy with default settings: 25 * 1.22
    assert_eq!(round2(order.compute_total(&ctx)), 30.50);

    order.checkout(&mut ctx);
    assert_eq!(order.status(), OrderStatus::Completed);

    // The total stays queryable after checkout.
    let completed = registry.get_order(id).expect("still registered");
    assert_eq!(round2(completed.compute_total(&ctx)), 30.50);
}

#[test]
fn system_log_traces_the_whole_session() {
    let mut ctx = AppContext::new();
    let mut registry = OrderRegistry::new();

    let id = registry.create_order(&mut ctx).id();
    let mug = Catalog::create(&mut ctx, "mug").expect("known code");
    let order = registry.get_order(id).expect("just created");
    order.add_product(mug, &mut ctx);
    order.change_strategy(PricingPolicy::Promo, &mut ctx);
    order.checkout(&mut ctx);

    let messages: Vec<&str> = ctx
        .log()
        .entries()
        .iter()
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "New order created: 1",
            "Factory: creation of product 'mug'",
            "Order 1: Product added: Tazza",
            "Order 1: Strategy changed: Promo (-20%)",
            "Order 1: Order completed and paid!",
        ]
    );
}

#[test]
fn settings_changes_reprice_existing_orders() {
    let mut ctx = AppContext::new();
    let mut registry = OrderRegistry::new();

    let id = registry.create_order(&mut ctx).id();
    let gadget = Catalog::create(&mut ctx, "GADGET").expect("known code");
    let order = registry.get_order(id).expect("just created");
    order.add_product(gadget, &mut ctx);

    assert_eq!(round2(order.compute_total(&ctx)), 14.64); // 12 * 1.22

    ctx.update_settings(SettingsUpdate {
        tax_rate: Some(0.0),
        base_discount: Some(0.5),
        ..SettingsUpdate::default()
    });

    let order = registry.get_order(id).expect("still registered");
    assert_eq!(round2(order.compute_total(&ctx)), 6.00); // 12 * 1.0 * 0.5
}

#[test]
fn independent_orders_have_independent_state() {
    let mut ctx = AppContext::new();
    let mut registry = OrderRegistry::new();

    let first = registry.create_order(&mut ctx).id();
    let second = registry.create_order(&mut ctx).id();

    let skin = Catalog::create(&mut ctx, "SKIN").expect("known code");
    registry
        .get_order(first)
        .expect("registered")
        .add_product(skin, &mut ctx);
    registry
        .get_order(second)
        .expect("registered")
        .change_strategy(PricingPolicy::Wholesale, &mut ctx);

    let first_order = registry.get_order(first).expect("registered");
    assert_eq!(first_order.strategy(), PricingPolicy::Standard);
    assert_eq!(first_order.products().len(), 1);

    let second_order = registry.get_order(second).expect("registered");
    assert_eq!(second_order.strategy(), PricingPolicy::Wholesale);
    assert!(second_order.products().is_empty());
}
