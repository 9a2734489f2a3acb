mod config;
mod engine;
mod history;
mod orders;
pub mod strategy;

pub use config::{EngineConfig, FairValueModel, InstrumentConfig};
pub use engine::Engine;
pub use history::{PriceHistory, PricePoint};

use std::collections::BTreeMap;

use arrayvec::ArrayString;
use rustc_hash::FxHashMap;

pub type InstId = ArrayString<28>;

/// Unix-like tick stamp handed in by the harness, monotonically increasing.
pub type Timestamp = i64;

/// One order emitted for the current tick. Positive size buys, negative sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub instrument_id: InstId,
    pub price: i64,
    pub size: i64,
}

/// Resting liquidity for one instrument at one tick.
///
/// Bid sizes are positive; ask sizes are negative with magnitude equal to the
/// available quantity. BTreeMap keys give price-sorted iteration for free.
#[derive(Debug, Clone, Default)]
pub struct OrderDepth {
    pub buy_orders: BTreeMap<i64, i64>,
    pub sell_orders: BTreeMap<i64, i64>,
}

impl OrderDepth {
    pub fn best_bid(&self) -> Option<i64> {
        self.buy_orders.keys().next_back().copied()
    }

    pub fn best_ask(&self) -> Option<i64> {
        self.sell_orders.keys().next().copied()
    }

    /// Average of best bid and best ask; `None` when either side is empty.
    pub fn mid_price(&self) -> Option<f64> {
        let bid = self.best_bid()?;
        let ask = self.best_ask()?;
        Some((bid + ask) as f64 / 2.)
    }

    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

/// Everything the harness hands over for one invocation.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub timestamp: Timestamp,
    pub order_depths: FxHashMap<InstId, OrderDepth>,
    /// Signed net position per instrument; absent entries are flat.
    pub positions: FxHashMap<InstId, i64>,
    /// Opaque state blob from the previous tick; empty on the first tick.
    pub trader_data: String,
}

/// Decision for one tick, handed back to the harness.
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub orders: FxHashMap<InstId, Vec<Order>>,
    /// Reserved for the harness; this engine never converts.
    pub conversions: i64,
    /// Updated state blob, to be returned verbatim on the next tick.
    pub trader_data: String,
}
