use rustc_hash::FxHashMap;

use crate::{EngineConfig, InstId, Order, TickInput, TickOutput, history::PriceHistory, orders};

/// Per-tick decision engine. Holds only the instrument table; all market
/// memory travels through the trader-data blob, so one engine value can serve
/// any number of independent simulations.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    max_history: usize,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let max_history = config.max_history();
        Self {
            config,
            max_history,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// One invocation of the decision function. Always returns a well-formed
    /// output; malformed input state degrades to an empty history.
    pub fn on_tick(&self, input: &TickInput) -> TickOutput {
        let mut history = PriceHistory::from_blob(&input.trader_data);
        let mut result: FxHashMap<InstId, Vec<Order>> = FxHashMap::default();

        for (&instrument_id, depth) in &input.order_depths {
            // Unconfigured instruments contribute nothing, by design.
            let Some(inst_config) = self.config.instruments.get(&instrument_id) else {
                continue;
            };

            if let Some(mid) = depth.mid_price() {
                history.record(instrument_id, input.timestamp, mid, self.max_history);
            }

            // No resting orders at all: nothing to estimate against.
            if depth.is_empty() {
                continue;
            }

            let samples = history.samples(&instrument_id);
            let Some(fair_value) = inst_config.model.fair_value(depth, samples) else {
                tracing::debug!(%instrument_id, "no fair value yet, skipping");
                continue;
            };

            let position = input.positions.get(&instrument_id).copied().unwrap_or(0);
            let orders = orders::generate_orders(
                instrument_id,
                depth,
                fair_value,
                position,
                inst_config.position_limit,
            );
            tracing::debug!(
                %instrument_id,
                fair_value,
                position,
                n_orders = orders.len(),
                "tick decision"
            );
            if !orders.is_empty() {
                result.insert(instrument_id, orders);
            }
        }

        TickOutput {
            orders: result,
            conversions: 0,
            trader_data: history.to_blob(),
        }
    }
}
