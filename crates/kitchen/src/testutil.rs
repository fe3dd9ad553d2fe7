//! Shared fixtures for kitchen tests.

use porfirio_core::menu::{MenuItem, Station};
use porfirio_core::order::{Order, OrderKind, OrderLine, OrderStatus, PaymentMethod};
use porfirio_core::{OrderId, TimestampMs};
use porfirio_menu::StaticCatalog;

pub(crate) fn espresso() -> &'static str {
    "espresso"
}

pub(crate) fn cold() -> &'static str {
    "frappe"
}

pub(crate) fn fryer_item() -> &'static str {
    "churro_6"
}

fn fixture(id: &str, station: Station, prep: u64, cap: u32) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: id.to_string(),
        category: "test".to_string(),
        price_cents: 5_000,
        station,
        prep_time_secs: prep,
        batch_capacity: cap,
        active: true,
        includes_drink: false,
        promo_window: None,
    }
}

/// Small catalog: espresso 180 s serial, frappe 240 s serial, churro_6 with
/// 180 s batches of 6, plus a zero-cost stock item and a mix promo.
pub(crate) fn test_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        fixture(espresso(), Station::Barista, 180, 1),
        fixture(cold(), Station::Cold, 240, 1),
        fixture(fryer_item(), Station::Fryer, 180, 6),
        fixture("bunuelos", Station::Stock, 0, 1),
        fixture("promo_combo", Station::Mix, 0, 1),
        fixture("mystery", Station::Unknown, 60, 1),
    ])
}

pub(crate) fn line(menu_id: &str, qty: u32) -> OrderLine {
    OrderLine {
        menu_id: menu_id.to_string(),
        qty,
        unit_price_cents: 5_000,
        note: None,
    }
}

pub(crate) fn order_with(id: OrderId, status: OrderStatus, items: Vec<OrderLine>) -> Order {
    let total = Order::total_cents(&items);
    Order {
        id,
        customer_id: "ABC123".to_string(),
        kind: OrderKind::Pickup { payment: PaymentMethod::CashOrTransfer },
        items,
        status,
        total_cents: total,
        eta_secs: 0,
        placed_at: TimestampMs(0),
        updated_at: TimestampMs(0),
    }
}
