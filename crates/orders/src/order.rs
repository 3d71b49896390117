use serde::{Deserialize, Serialize};

use modshop_catalog::{Addon, Product};
use modshop_core::AppContext;
use modshop_pricing::PricingPolicy;

use crate::listener::Listener;

/// Sequential order identifier, assigned by the registry. Never reused.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order lifecycle; the transition to `Completed` is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InPreparation,
    Completed,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::InPreparation => f.write_str("in preparation"),
            OrderStatus::Completed => f.write_str("completed"),
        }
    }
}

/// A customer order: an ordered sequence of (possibly decorated) products,
/// the active pricing policy, and the registered listeners.
///
/// The total is recomputed from the current products and policy on every
/// call; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    products: Vec<Product>,
    strategy: PricingPolicy,
    status: OrderStatus,
    listeners: Vec<Listener>,
}

impl Order {
    pub(crate) fn new(id: OrderId) -> Self {
        Self {
            id,
            products: Vec::new(),
            strategy: PricingPolicy::default(),
            status: OrderStatus::InPreparation,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn strategy(&self) -> PricingPolicy {
        self.strategy
    }

    /// Current products in insertion order; display positions are 1-based.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Append-only listener registration; there is no removal.
    pub fn register_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Append a product and notify listeners with its description at the
    /// time of addition.
    pub fn add_product(&mut self, product: Product, ctx: &mut AppContext) {
        let event = format!("Product added: {}", product.description());
        tracing::debug!(order_id = %self.id, code = %product.code(), "product added");
        self.products.push(product);
        self.notify(&event, ctx);
    }

    /// Remove the product at `index` (0-based). Out-of-range indices are
    /// ignored: no change, no event.
    pub fn remove_product(&mut self, index: usize, ctx: &mut AppContext) {
        if index >= self.products.len() {
            return;
        }
        let removed = self.products.remove(index);
        tracing::debug!(order_id = %self.id, code = %removed.code(), "product removed");
        self.notify(&format!("Product removed: {}", removed.description()), ctx);
    }

    /// Replace the product at `index` with an add-on wrapped version of
    /// itself, returning the decorated product. Decoration emits no event.
    pub fn apply_addon(&mut self, index: usize, addon: Addon) -> Option<&Product> {
        let slot = self.products.get_mut(index)?;
        *slot = slot.clone().decorate(addon);
        Some(&*slot)
    }

    /// Replace the active pricing policy and notify listeners.
    pub fn change_strategy(&mut self, strategy: PricingPolicy, ctx: &mut AppContext) {
        self.strategy = strategy;
        self.notify(&format!("Strategy changed: {}", strategy.name()), ctx);
    }

    /// Sum of the active policy applied to each product's base price,
    /// recomputed fresh on every call.
    pub fn compute_total(&self, ctx: &AppContext) -> f64 {
        self.products
            .iter()
            .map(|p| self.strategy.apply(p.base_price(), ctx.settings()))
            .sum()
    }

    /// Mark the order completed and paid. There is deliberately no guard
    /// against an empty order or a repeated checkout; calling this again
    /// re-emits the completion event.
    pub fn checkout(&mut self, ctx: &mut AppContext) {
        self.status = OrderStatus::Completed;
        tracing::info!(order_id = %self.id, "order checked out");
        self.notify("Order completed and paid!", ctx);
    }

    fn notify(&self, event: &str, ctx: &mut AppContext) {
        for listener in &self.listeners {
            listener.notify(event, self.id, ctx);
        }
    }
}
