use contracts::shared::shipping::{CartItem, ShippingQuote, ShippingResult};

use super::tariff::COURIER_TARIFFS;
use super::zone::Zone;
use crate::shared::format::format_weight_kg;

/// Industry-standard volumetric divisor, cm³ per kg.
pub const VOLUMETRIC_DIVISOR: f64 = 6000.0;

/// Clamp a numeric field to a finite non-negative value. Damaged cart data
/// contributes zero weight instead of poisoning the total with NaN.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Larger of actual and volumetric weight for one cart line.
fn item_chargeable(item: &CartItem) -> f64 {
    let qty = item.qty as f64;
    let actual = sanitize(item.weight_kg) * qty;
    let volume =
        sanitize(item.length_cm) * sanitize(item.width_cm) * sanitize(item.height_cm);
    let volumetric = volume / VOLUMETRIC_DIVISOR * qty;
    actual.max(volumetric)
}

/// Total chargeable weight: the per-item max of actual vs volumetric,
/// summed across items. Each line contributes its own larger value.
pub fn chargeable_weight(cart: &[CartItem]) -> f64 {
    cart.iter().map(item_chargeable).sum()
}

/// Quote every courier for the given destination and cart.
///
/// Pure and infallible: no I/O, no shared state, safe to call on every
/// keystroke of the postcode field. Pricing uses the chargeable weight
/// rounded up to whole kilograms; the displayed weight stays unrounded.
pub fn calculate(postcode: &str, cart: &[CartItem]) -> ShippingResult {
    let zone = Zone::from_postcode(postcode);

    let total_weight = chargeable_weight(cart);
    let billed_weight = if total_weight > 0.0 {
        total_weight.ceil()
    } else {
        0.0
    };
    // The base fare covers the first kilogram.
    let extra_kg = (billed_weight - 1.0).max(0.0);

    let mut quotes: Vec<ShippingQuote> = COURIER_TARIFFS
        .iter()
        .map(|tariff| ShippingQuote {
            name: tariff.name.to_string(),
            eta_label: tariff.eta_label.to_string(),
            total_cost: tariff.base_for(zone) + extra_kg * tariff.per_kg_for(zone),
        })
        .collect();

    // Vec::sort_by is stable: equal totals keep tariff-table order.
    quotes.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));

    ShippingResult {
        chargeable_weight_kg: format_weight_kg(total_weight),
        quotes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(weight_kg: f64, l: f64, w: f64, h: f64, qty: u32) -> CartItem {
        CartItem {
            weight_kg,
            length_cm: l,
            width_cm: w,
            height_cm: h,
            qty,
        }
    }

    fn cost_of(result: &ShippingResult, name: &str) -> f64 {
        result
            .quotes
            .iter()
            .find(|q| q.name == name)
            .unwrap()
            .total_cost
    }

    fn assert_sorted(result: &ShippingResult) {
        for pair in result.quotes.windows(2) {
            assert!(pair[0].total_cost <= pair[1].total_cost);
        }
    }

    #[test]
    fn test_local_postcode_base_fares_only() {
        // One 1 kg item within the first kilogram: every courier quotes
        // its base fare, with the Kajang override for City-Link.
        let result = calculate("43000", &[item(1.0, 10.0, 10.0, 10.0, 1)]);

        assert_eq!(result.chargeable_weight_kg, "1.00");
        assert_eq!(result.quotes.len(), 4);
        assert_eq!(cost_of(&result, "City-Link Express"), 7.00);
        assert_eq!(cost_of(&result, "J&T Express"), 8.00);
        assert_eq!(cost_of(&result, "Pos Laju"), 9.00);
        assert_eq!(cost_of(&result, "GDEX"), 10.00);

        // Cheapest first: the local partner wins at base fare.
        assert_eq!(result.quotes[0].name, "City-Link Express");
        assert_sorted(&result);
    }

    #[test]
    fn test_east_postcode_rates() {
        // 2.5 kg chargeable -> billed 3 kg -> 2 extra kg at East rates.
        let result = calculate("93000", &[item(2.5, 10.0, 10.0, 10.0, 1)]);

        assert_eq!(result.chargeable_weight_kg, "2.50");
        assert_eq!(cost_of(&result, "J&T Express"), 13.00 + 2.0 * 9.00);
        assert_eq!(cost_of(&result, "Pos Laju"), 14.00 + 2.0 * 10.00);
        assert_eq!(cost_of(&result, "City-Link Express"), 15.00 + 2.0 * 11.00);
        assert_eq!(cost_of(&result, "GDEX"), 16.00 + 2.0 * 12.00);
        assert_sorted(&result);
    }

    #[test]
    fn test_empty_cart_quotes_base_fares() {
        let result = calculate("50000", &[]);

        assert_eq!(result.chargeable_weight_kg, "0.00");
        assert_eq!(result.quotes.len(), 4);
        assert_eq!(cost_of(&result, "J&T Express"), 8.00);
        assert_eq!(cost_of(&result, "Pos Laju"), 9.00);
        assert_eq!(cost_of(&result, "City-Link Express"), 8.50);
        assert_eq!(cost_of(&result, "GDEX"), 10.00);
        assert_sorted(&result);
    }

    #[test]
    fn test_unmatched_state_prefix_still_quotes() {
        // 19999 has no state mapping but the zone rule is independent:
        // first char 1 -> West, not local.
        let result = calculate("19999", &[item(1.0, 10.0, 10.0, 10.0, 1)]);

        assert_eq!(cost_of(&result, "City-Link Express"), 8.50);
        assert_eq!(result.quotes.len(), 4);
        assert_sorted(&result);
    }

    #[test]
    fn test_volumetric_weight_dominates_bulky_items() {
        // Coil spring box: light but bulky. 40x40x30/6000 = 8 kg.
        let result = calculate("50000", &[item(0.5, 40.0, 40.0, 30.0, 1)]);

        assert_eq!(result.chargeable_weight_kg, "8.00");
        // billed 8 kg -> 7 extra kg
        assert_eq!(cost_of(&result, "J&T Express"), 8.00 + 7.0 * 1.50);
    }

    #[test]
    fn test_per_item_max_then_sum() {
        // Dense item (actual wins) plus bulky item (volumetric wins):
        // each contributes its own larger value.
        let cart = [
            item(5.0, 10.0, 10.0, 10.0, 1),  // actual 5.0, volumetric ~0.17
            item(0.5, 40.0, 40.0, 30.0, 1),  // actual 0.5, volumetric 8.0
        ];
        assert_eq!(chargeable_weight(&cart), 13.0);
    }

    #[test]
    fn test_qty_multiplies_both_weights() {
        let cart = [item(1.2, 10.0, 10.0, 10.0, 3)];
        let weight = chargeable_weight(&cart);
        assert!((weight - 3.6).abs() < 1e-9);

        let result = calculate("50000", &cart);
        // 3.6 -> billed 4 -> 3 extra kg; display stays unrounded.
        assert_eq!(result.chargeable_weight_kg, "3.60");
        assert_eq!(cost_of(&result, "J&T Express"), 8.00 + 3.0 * 1.50);
    }

    #[test]
    fn test_whole_kilogram_is_not_rounded_up() {
        let result = calculate("50000", &[item(2.0, 1.0, 1.0, 1.0, 1)]);
        // Exactly 2.0 kg bills as 2 kg, one extra kilogram.
        assert_eq!(cost_of(&result, "J&T Express"), 8.00 + 1.0 * 1.50);

        let result = calculate("50000", &[item(2.001, 1.0, 1.0, 1.0, 1)]);
        assert_eq!(cost_of(&result, "J&T Express"), 8.00 + 2.0 * 1.50);
    }

    #[test]
    fn test_malformed_numbers_contribute_nothing() {
        let cart = [
            item(f64::NAN, f64::INFINITY, -3.0, 10.0, 2),
            item(1.0, 10.0, 10.0, 10.0, 1),
        ];
        assert_eq!(chargeable_weight(&cart), 1.0);

        let result = calculate("50000", &cart);
        assert_eq!(result.chargeable_weight_kg, "1.00");
    }

    #[test]
    fn test_zero_qty_contributes_nothing() {
        assert_eq!(chargeable_weight(&[item(5.0, 20.0, 20.0, 20.0, 0)]), 0.0);
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let cart = [item(2.5, 30.0, 20.0, 15.0, 2)];
        assert_eq!(calculate("88000", &cart), calculate("88000", &cart));
    }

    #[test]
    fn test_weight_monotone_in_qty() {
        let mut previous = 0.0;
        for qty in 1..=5 {
            let weight = chargeable_weight(&[item(0.8, 25.0, 15.0, 10.0, qty)]);
            assert!(weight >= previous);
            previous = weight;
        }
    }

    #[test]
    fn test_weight_monotone_in_item_weight() {
        // Other items fixed: a heavier line never lowers the total.
        let bulky = item(0.5, 40.0, 40.0, 30.0, 1);
        let mut previous = 0.0;
        for tenths in 1..=30 {
            let weight_kg = tenths as f64 * 0.5;
            let weight =
                chargeable_weight(&[item(weight_kg, 10.0, 10.0, 10.0, 1), bulky.clone()]);
            assert!(weight >= previous, "weight_kg={}", weight_kg);
            previous = weight;
        }
    }

    #[test]
    fn test_weight_monotone_in_volume() {
        // Growing any dimension never lowers the total, including across
        // the point where volumetric overtakes actual weight.
        let mut previous = 0.0;
        for height in 1..=60 {
            let weight = chargeable_weight(&[item(2.0, 30.0, 30.0, height as f64, 1)]);
            assert!(weight >= previous, "height_cm={}", height);
            previous = weight;
        }
    }

    #[test]
    fn test_every_quote_at_least_zone_base() {
        for (postcode, zone) in [("50000", Zone::West), ("43000", Zone::Local), ("93000", Zone::East)] {
            let result = calculate(postcode, &[item(4.3, 35.0, 25.0, 20.0, 2)]);
            for quote in &result.quotes {
                let tariff = COURIER_TARIFFS
                    .iter()
                    .find(|t| t.name == quote.name)
                    .unwrap();
                assert!(quote.total_cost >= tariff.base_for(zone));
            }
        }
    }
}
