//! Cash-drawer reconciliation: shift closings and period profit
//! consolidation.

use serde::{Deserialize, Serialize};

use porfirio_core::MoneyCents;

/// Bill counts in the drawer plus the card-terminal total.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashCount {
    pub b20: u32,
    pub b50: u32,
    pub b100: u32,
    pub b200: u32,
    pub b500: u32,
    pub card_cents: MoneyCents,
}

impl CashCount {
    pub fn cash_total_cents(&self) -> MoneyCents {
        let pesos = self.b20 as i64 * 20
            + self.b50 as i64 * 50
            + self.b100 as i64 * 100
            + self.b200 as i64 * 200
            + self.b500 as i64 * 500;
        pesos * 100
    }

    pub fn grand_total_cents(&self) -> MoneyCents {
        self.cash_total_cents() + self.card_cents
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Evening,
}

impl Shift {
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Morning => "MAT",
            Shift::Evening => "VES",
        }
    }
}

/// One drawer count at the end of a shift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftClosing {
    /// ISO date, e.g. "2026-08-24".
    pub date: String,
    pub shift: Shift,
    pub count: CashCount,
}

impl ShiftClosing {
    pub fn closing_id(&self) -> String {
        format!("{}_{}", self.date, self.shift.code())
    }
}

/// Labeled cost lines for a consolidation period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CostSchedule {
    pub fixed: Vec<(String, MoneyCents)>,
    pub variable: Vec<(String, MoneyCents)>,
}

impl CostSchedule {
    pub fn total_cents(&self) -> MoneyCents {
        self.fixed
            .iter()
            .chain(self.variable.iter())
            .map(|(_, cents)| cents)
            .sum()
    }
}

/// The house cost figures used for consolidation.
pub fn default_costs() -> CostSchedule {
    let entry = |label: &str, cents: MoneyCents| (label.to_string(), cents);
    CostSchedule {
        fixed: vec![
            entry("Nómina", 1_010_000),
            entry("Renta", 875_000),
            entry("Luz", 93_750),
            entry("Agua", 30_000),
            entry("Regalías", 377_000),
        ],
        variable: vec![
            entry("SAMS/SUPER", 408_692),
            entry("Mercado", 32_000),
            entry("Molino", 10_000),
            entry("Gas", 71_200),
        ],
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Consolidation {
    pub sales_cents: MoneyCents,
    pub costs_cents: MoneyCents,
    pub profit_cents: MoneyCents,
    pub cash_to_return_cents: MoneyCents,
}

/// Roll a period of shift closings into sales, profit and the cash the
/// drawer hands back. When the period is profitable the house keeps profit
/// out of cash first; on a loss all cash goes back.
pub fn consolidate(closings: &[ShiftClosing], costs: &CostSchedule) -> Consolidation {
    let cash: MoneyCents = closings.iter().map(|c| c.count.cash_total_cents()).sum();
    let cards: MoneyCents = closings.iter().map(|c| c.count.card_cents).sum();
    let sales = cash + cards;
    let costs_total = costs.total_cents();
    let profit = sales - costs_total;
    let cash_to_return = if profit > 0 { (cash - profit).max(0) } else { cash };
    Consolidation {
        sales_cents: sales,
        costs_cents: costs_total,
        profit_cents: profit,
        cash_to_return_cents: cash_to_return,
    }
}
