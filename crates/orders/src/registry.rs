//! Order registry: owns every order of the run and issues sequential ids.

use modshop_core::AppContext;

use crate::listener::Listener;
use crate::order::{Order, OrderId};

/// Default listener set attached to every new order, in fan-out order.
const DEFAULT_LISTENERS: [Listener; 3] = [Listener::Ui, Listener::Log, Listener::Email];

/// Creates, stores, and looks up orders.
///
/// Identifiers start at 1 and increase by one per created order; they are
/// never reused, regardless of later checkouts or removals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRegistry {
    orders: Vec<Order>,
    next_id: u64,
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new order with the next sequential id and the default
    /// listeners attached, store it, and return it.
    pub fn create_order(&mut self, ctx: &mut AppContext) -> &mut Order {
        let id = OrderId::new(self.next_id);
        self.next_id += 1;

        let mut order = Order::new(id);
        for listener in DEFAULT_LISTENERS {
            order.register_listener(listener);
        }

        ctx.append_log(format!("New order created: {id}"));
        tracing::info!(order_id = %id, "order created");

        self.orders.push(order);
        let slot = self.orders.len() - 1;
        &mut self.orders[slot]
    }

    /// Linear lookup by id.
    pub fn get_order(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    /// All orders in creation order.
    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modshop_catalog::{Product, ProductCode};

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut ctx = AppContext::new();
        let mut registry = OrderRegistry::new();

        let first = registry.create_order(&mut ctx).id();
        let second = registry.create_order(&mut ctx).id();
        let third = registry.create_order(&mut ctx).id();

        assert_eq!(first, OrderId::new(1));
        assert_eq!(second, OrderId::new(2));
        assert_eq!(third, OrderId::new(3));
    }

    #[test]
    fn ids_keep_increasing_after_checkout() {
        let mut ctx = AppContext::new();
        let mut registry = OrderRegistry::new();

        let id = registry.create_order(&mut ctx).id();
        registry
            .get_order(id)
            .expect("just created")
            .checkout(&mut ctx);

        let next = registry.create_order(&mut ctx).id();
        assert_eq!(next, OrderId::new(2));
    }

    #[test]
    fn create_order_attaches_the_default_listeners() {
        let mut ctx = AppContext::new();
        let mut registry = OrderRegistry::new();

        let order = registry.create_order(&mut ctx);
        let id = order.id();
        order.add_product(Product::Base(ProductCode::Mug), &mut ctx);

        // The log listener is among the defaults, so the mutation shows up
        // in the system log alongside the creation entry.
        let messages: Vec<String> = ctx
            .log()
            .entries()
            .iter()
            .map(|e| e.message.clone())
            .collect();
        assert_eq!(
            messages,
            vec![
                "New order created: 1".to_string(),
                format!("Order {id}: Product added: Tazza"),
            ]
        );
    }

    #[test]
    fn get_order_finds_existing_ids() {
        let mut ctx = AppContext::new();
        let mut registry = OrderRegistry::new();
        let id = registry.create_order(&mut ctx).id();

        assert!(registry.get_order(id).is_some());
    }

    #[test]
    fn get_order_returns_none_for_unknown_ids() {
        let mut ctx = AppContext::new();
        let mut registry = OrderRegistry::new();
        registry.create_order(&mut ctx);

        assert!(registry.get_order(OrderId::new(42)).is_none());
    }

    #[test]
    fn list_all_preserves_creation_order() {
        let mut ctx = AppContext::new();
        let mut registry = OrderRegistry::new();
        registry.create_order(&mut ctx);
        registry.create_order(&mut ctx);

        let ids: Vec<OrderId> = registry.list_all().iter().map(Order::id).collect();
        assert_eq!(ids, vec![OrderId::new(1), OrderId::new(2)]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Registry ids are strictly increasing from 1 for any number of
            /// creations.
            #[test]
            fn ids_are_strictly_increasing(count in 1usize..50) {
                let mut ctx = AppContext::new();
                let mut registry = OrderRegistry::new();

                let ids: Vec<u64> = (0..count)
                    .map(|_| registry.create_order(&mut ctx).id().value())
                    .collect();

                prop_assert_eq!(ids, (1..=count as u64).collect::<Vec<_>>());
            }
        }
    }
}
