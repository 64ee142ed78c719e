use axum::Json;
use contracts::shared::shipping::{QuoteRequest, ShippingResult};

use crate::shared::logistics::calculator;

/// POST /api/shipping/quote
///
/// Quotes every courier for the destination postcode and cart. Malformed
/// numeric fields in cart lines have already been coerced to zero during
/// deserialization, so this never rejects a well-formed JSON body.
pub async fn quote(Json(request): Json<QuoteRequest>) -> Json<ShippingResult> {
    let result = calculator::calculate(&request.postcode, &request.cart);

    tracing::debug!(
        "shipping quote: postcode={} items={} weight={}kg couriers={}",
        request.postcode,
        request.cart.len(),
        result.chargeable_weight_kg,
        result.quotes.len()
    );

    Json(result)
}
