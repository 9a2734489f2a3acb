use std::path::Path;

use engine_core::{Engine, EngineConfig, InstId, OrderDepth, TickInput};
use rustc_hash::FxHashMap;

/// Replay a deterministic synthetic market through the engine, assuming every
/// emitted order fills in full. Useful for eyeballing decisions in the logs
/// before wiring the engine to a real harness.
fn main() {
    let _guard = utils::init_tracing();

    let config = match EngineConfig::from_toml_file(Path::new("engine.toml")) {
        Ok(config) => config,
        Err(err) => {
            tracing::info!("no engine.toml ({err:#}), using the default universe");
            EngineConfig::default_universe()
        }
    };
    let engine = Engine::new(config);

    let kelp = InstId::from("KELP").unwrap();
    let squid = InstId::from("SQUID_INK").unwrap();
    let resin = InstId::from("RAINFOREST_RESIN").unwrap();

    let mut positions: FxHashMap<InstId, i64> = FxHashMap::default();
    let mut trader_data = String::new();

    for step in 0..200_i64 {
        let t = step as f64;
        // Slow drift for the trender, a fast oscillation for the reverter.
        let kelp_mid = 2_000 + (t / 10.).round() as i64;
        let squid_mid = 1_950 + (30. * (t / 7.).sin()).round() as i64;

        let mut order_depths = FxHashMap::default();
        order_depths.insert(kelp, synthetic_depth(kelp_mid));
        order_depths.insert(squid, synthetic_depth(squid_mid));
        order_depths.insert(resin, synthetic_depth(10_000 + (step % 5) - 2));

        let input = TickInput {
            timestamp: step * 100,
            order_depths,
            positions: positions.clone(),
            trader_data,
        };
        let output = engine.on_tick(&input);
        trader_data = output.trader_data;

        for (instrument_id, orders) in &output.orders {
            for order in orders {
                *positions.entry(*instrument_id).or_default() += order.size;
                tracing::info!(
                    ts = input.timestamp,
                    %instrument_id,
                    price = order.price,
                    size = order.size,
                    "fill"
                );
            }
        }
    }

    for (instrument_id, position) in &positions {
        tracing::info!(%instrument_id, position, "final position");
    }
}

fn synthetic_depth(mid: i64) -> OrderDepth {
    let mut depth = OrderDepth::default();
    depth.buy_orders.insert(mid - 2, 8);
    depth.buy_orders.insert(mid - 3, 15);
    depth.sell_orders.insert(mid + 2, -8);
    depth.sell_orders.insert(mid + 3, -15);
    depth
}
