use serde::{Deserialize, Serialize};

/// Response for the postcode-to-state lookup.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StateResponse {
    pub postcode: String,
    pub state: String,
}

/// Response for the town auto-suggestion lookup.
///
/// `towns` keeps table order; the first entry is the caller's default
/// pre-selected town. Empty for unknown postcodes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TownsResponse {
    pub postcode: String,
    pub towns: Vec<String>,
}
