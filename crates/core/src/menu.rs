use serde::{Deserialize, Serialize};

use crate::{MenuId, MoneyCents, Seconds};

/// Physical preparation resource a menu item is routed to.
///
/// `Stock` items are pre-made and carry no prep delay. `Mix` items are
/// composite promotions whose components are not costed independently.
/// Station strings outside the known set deserialize to `Unknown` and take
/// the serial barista workload rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Station {
    Barista,
    Fryer,
    Cold,
    Stock,
    Mix,
    #[serde(other)]
    Unknown,
}

/// Daily time window during which a promotional item is offered,
/// in minutes since midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoWindow {
    pub start_min: u16,
    pub end_min: u16,
}

impl PromoWindow {
    pub const MORNING: PromoWindow = PromoWindow { start_min: 8 * 60, end_min: 12 * 60 };
    pub const AFTERNOON: PromoWindow = PromoWindow { start_min: 13 * 60, end_min: 17 * 60 };

    pub fn contains(&self, min_of_day: u16) -> bool {
        self.start_min <= min_of_day && min_of_day < self.end_min
    }
}

fn default_batch_capacity() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

/// Static descriptor of one orderable item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: MenuId,
    pub name: String,
    pub category: String,
    pub price_cents: MoneyCents,
    pub station: Station,
    pub prep_time_secs: Seconds,
    /// Units that fit in one fryer batch; meaningful for `Station::Fryer` only.
    #[serde(default = "default_batch_capacity")]
    pub batch_capacity: u32,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Breakfast plates bundle a 354 ml drink.
    #[serde(default)]
    pub includes_drink: bool,
    #[serde(default)]
    pub promo_window: Option<PromoWindow>,
}
