use crate::{InstId, Order, OrderDepth};

/// Sweep resting liquidity priced favorably against `fair_value`, capped so
/// the post-trade position stays inside `[-limit, +limit]`.
///
/// Every book entry is scanned and non-qualifying prices are skipped rather
/// than breaking out of the price-sorted walk.
pub fn generate_orders(
    instrument_id: InstId,
    depth: &OrderDepth,
    fair_value: f64,
    position: i64,
    limit: i64,
) -> Vec<Order> {
    let mut orders = Vec::new();
    let mut buy_capacity = limit - position;
    let mut sell_capacity = limit + position;

    // Lift asks below fair value, cheapest first.
    for (&price, &size) in &depth.sell_orders {
        if (price as f64) < fair_value && buy_capacity > 0 {
            let take = (-size).min(buy_capacity);
            if take > 0 {
                orders.push(Order {
                    instrument_id,
                    price,
                    size: take,
                });
                buy_capacity -= take;
            }
        }
    }

    // Hit bids above fair value, highest first.
    for (&price, &size) in depth.buy_orders.iter().rev() {
        if (price as f64) > fair_value && sell_capacity > 0 {
            let take = size.min(sell_capacity);
            if take > 0 {
                orders.push(Order {
                    instrument_id,
                    price,
                    size: -take,
                });
                sell_capacity -= take;
            }
        }
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst() -> InstId {
        InstId::from("RAINFOREST_RESIN").unwrap()
    }

    fn depth(bids: &[(i64, i64)], asks: &[(i64, i64)]) -> OrderDepth {
        let mut depth = OrderDepth::default();
        depth.buy_orders.extend(bids.iter().copied());
        depth.sell_orders.extend(asks.iter().copied());
        depth
    }

    #[test]
    fn takes_both_sides_around_fair_value() {
        let depth = depth(&[(10_002, 3)], &[(9_998, -5)]);
        let orders = generate_orders(inst(), &depth, 10_000., 0, 50);
        assert_eq!(
            orders,
            vec![
                Order {
                    instrument_id: inst(),
                    price: 9_998,
                    size: 5
                },
                Order {
                    instrument_id: inst(),
                    price: 10_002,
                    size: -3
                },
            ]
        );
    }

    #[test]
    fn sweeps_asks_cheapest_first_until_capacity_spent() {
        let depth = depth(&[], &[(9_996, -4), (9_997, -4), (9_999, -4)]);
        let orders = generate_orders(inst(), &depth, 10_000., 40, 50);
        // Buy capacity is 10: full fill at 9996 and 9997, partial at 9999.
        assert_eq!(orders.len(), 3);
        assert_eq!((orders[0].price, orders[0].size), (9_996, 4));
        assert_eq!((orders[1].price, orders[1].size), (9_997, 4));
        assert_eq!((orders[2].price, orders[2].size), (9_999, 2));
    }

    #[test]
    fn never_breaches_position_limit() {
        let depth = depth(&[(10_005, 80)], &[(9_995, -80)]);
        let orders = generate_orders(inst(), &depth, 10_000., 30, 50);
        let bought: i64 = orders.iter().filter(|o| o.size > 0).map(|o| o.size).sum();
        let sold: i64 = orders.iter().filter(|o| o.size < 0).map(|o| -o.size).sum();
        assert_eq!(bought, 20);
        assert_eq!(sold, 80);
        assert!(30 + bought <= 50);
        assert!(30 - sold >= -50);
    }

    #[test]
    fn fair_priced_levels_are_left_alone() {
        // Strict inequality on both sides: nothing trades at fair value.
        let depth = depth(&[(10_000, 5)], &[(10_000, -5)]);
        let orders = generate_orders(inst(), &depth, 10_000., 0, 50);
        assert!(orders.is_empty());
    }

    #[test]
    fn exhausted_capacity_emits_nothing() {
        let long_at_limit = depth(&[], &[(9_995, -10)]);
        let orders = generate_orders(inst(), &long_at_limit, 10_000., 50, 50);
        assert!(orders.is_empty());

        let short_at_limit = depth(&[(10_005, 10)], &[]);
        let orders = generate_orders(inst(), &short_at_limit, 10_000., -50, 50);
        assert!(orders.is_empty());
    }

    #[test]
    fn skips_non_qualifying_levels_without_stopping_the_scan() {
        // A crossed-looking book: the 10_001 ask does not qualify but the
        // walk still reaches it before stopping, by construction.
        let depth = depth(&[], &[(9_998, -2), (10_001, -2)]);
        let orders = generate_orders(inst(), &depth, 10_000., 0, 50);
        assert_eq!(orders.len(), 1);
        assert_eq!((orders[0].price, orders[0].size), (9_998, 2));
    }
}
