use serde::{Deserialize, Deserializer, Serialize};

/// One physical line of the cart, as the checkout page submits it.
///
/// Numeric fields are deserialized leniently: a JSON number, a numeric
/// string, or garbage are all accepted, with anything unparseable coerced
/// to zero. A damaged cart line degrades to contributing nothing instead
/// of failing the whole quote request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CartItem {
    #[serde(rename = "weightKg", default, deserialize_with = "f64_or_zero")]
    pub weight_kg: f64,

    #[serde(rename = "lengthCm", default, deserialize_with = "f64_or_zero")]
    pub length_cm: f64,

    #[serde(rename = "widthCm", default, deserialize_with = "f64_or_zero")]
    pub width_cm: f64,

    #[serde(rename = "heightCm", default, deserialize_with = "f64_or_zero")]
    pub height_cm: f64,

    #[serde(rename = "qty", default, deserialize_with = "u32_or_zero")]
    pub qty: u32,
}

/// Price quote for a single courier, in RM.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShippingQuote {
    pub name: String,

    #[serde(rename = "etaLabel")]
    pub eta_label: String,

    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}

/// Outcome of a shipping calculation for one postcode + cart.
///
/// `chargeable_weight_kg` is the unrounded total formatted to two decimals;
/// the whole-kilogram billed weight used for pricing is internal to the
/// calculator and not returned.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShippingResult {
    #[serde(rename = "chargeableWeightKg")]
    pub chargeable_weight_kg: String,

    /// Ascending by `total_cost`; ties keep tariff-table order.
    pub quotes: Vec<ShippingQuote>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct QuoteRequest {
    pub postcode: String,

    #[serde(default)]
    pub cart: Vec<CartItem>,
}

fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    })
}

fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().map(|v| v.min(u32::MAX as u64) as u32).unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    })
}
