//! In-memory order store: the reference implementation of the queue
//! collaborator plus the staff-side lifecycle operations.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use porfirio_core::order::{Order, OrderKind, OrderLine, OrderStatus};
use porfirio_core::{OrderId, Seconds, TimestampMs};
use porfirio_kitchen::OrderSource;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),
}

/// Everything needed to open an order; the store assigns id, status and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_id: String,
    pub kind: OrderKind,
    pub items: Vec<OrderLine>,
    /// Estimate shown to the customer at placement, kept on the record.
    pub eta_secs: Seconds,
}

#[derive(Debug, Default)]
struct OrderBook {
    next_id: OrderId,
    orders: BTreeMap<OrderId, Order>,
}

/// Thread-safe in-memory order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: Mutex<OrderBook>,
}

fn now_ms() -> TimestampMs {
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    TimestampMs(ms)
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new order with status `Received` and return the stored record.
    pub fn place(&self, draft: OrderDraft) -> Order {
        let now = now_ms();
        let total_cents = Order::total_cents(&draft.items);
        let mut book = self.inner.lock().expect("order book poisoned");
        book.next_id += 1;
        let order = Order {
            id: book.next_id,
            customer_id: draft.customer_id,
            kind: draft.kind,
            items: draft.items,
            status: OrderStatus::Received,
            total_cents,
            eta_secs: draft.eta_secs,
            placed_at: now,
            updated_at: now,
        };
        book.orders.insert(order.id, order.clone());
        info!(order_id = order.id, total_cents, "order placed");
        order
    }

    /// Staff workflow: move an order through its lifecycle.
    pub fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), StoreError> {
        let mut book = self.inner.lock().expect("order book poisoned");
        let order = book.orders.get_mut(&id).ok_or(StoreError::UnknownOrder(id))?;
        order.status = status;
        order.updated_at = now_ms();
        Ok(())
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let book = self.inner.lock().expect("order book poisoned");
        book.orders.get(&id).cloned()
    }

    pub fn orders_with_status(&self, statuses: &[OrderStatus]) -> Vec<Order> {
        let book = self.inner.lock().expect("order book poisoned");
        book.orders
            .values()
            .filter(|o| statuses.contains(&o.status))
            .cloned()
            .collect()
    }

    pub fn orders_for_customer(&self, customer_id: &str) -> Vec<Order> {
        let book = self.inner.lock().expect("order book poisoned");
        book.orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect()
    }
}

impl OrderSource for InMemoryOrderStore {
    fn active_orders(&self) -> Result<Vec<Order>> {
        let book = self.inner.lock().expect("order book poisoned");
        Ok(book
            .orders
            .values()
            .filter(|o| o.status.is_active())
            .cloned()
            .collect())
    }
}
