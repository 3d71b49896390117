//! Order notification fan-out.
//!
//! The listener set is closed: console display, system log, and a simulated
//! email channel. Fan-out runs synchronously in registration order, and
//! listeners cannot fail.

use serde::{Deserialize, Serialize};

use modshop_core::AppContext;

use crate::order::OrderId;

/// An observer informed of order-state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Listener {
    /// Renders the event next to the order id on the console.
    Ui,
    /// Appends the event to the shared system log.
    Log,
    /// Simulates an outgoing email notification on the console.
    Email,
}

impl Listener {
    pub fn notify(&self, event: &str, order_id: OrderId, ctx: &mut AppContext) {
        match self {
            Listener::Ui => println!("[UI] {event} - Order {order_id}"),
            Listener::Log => ctx.append_log(format!("Order {order_id}: {event}")),
            Listener::Email => println!("[Email] notification sent: {event}"),
        }
    }
}
