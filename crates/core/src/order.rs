use serde::{Deserialize, Serialize};

use crate::{MenuId, MoneyCents, OrderId, Seconds, TimestampMs};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Received,
    InProgress,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Active orders are the ones still owed to a customer; only these
    /// contribute to standing kitchen load.
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Received | OrderStatus::InProgress)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    CashOrTransfer,
    MercadoPago,
}

/// How the order is fulfilled: at a table or picked up at the counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderKind {
    DineIn { table: String },
    Pickup { payment: PaymentMethod },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub menu_id: MenuId,
    pub qty: u32,
    pub unit_price_cents: MoneyCents,
    #[serde(default)]
    pub note: Option<String>,
}

impl OrderLine {
    pub fn line_total_cents(&self) -> MoneyCents {
        self.unit_price_cents.saturating_mul(self.qty as i64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: String,
    pub kind: OrderKind,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total_cents: MoneyCents,
    /// Wait estimate shown to the customer when the order was placed.
    pub eta_secs: Seconds,
    pub placed_at: TimestampMs,
    pub updated_at: TimestampMs,
}

impl Order {
    pub fn total_cents(lines: &[OrderLine]) -> MoneyCents {
        lines.iter().map(OrderLine::line_total_cents).sum()
    }
}
