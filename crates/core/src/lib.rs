//! Core types for the Porfirio ordering and loyalty system.

use serde::{Deserialize, Serialize};

pub type OrderId = u64;
pub type MenuId = String;

/// Amounts of money in cents (MXN).
pub type MoneyCents = i64;

/// Seconds of preparation work.
pub type Seconds = u64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimestampMs(pub u64);

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub mod menu;
pub mod order;
