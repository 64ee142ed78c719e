/// Postcode-to-state resolution and town auto-suggestion.
///
/// Both lookups are plain static tables so boundary values can be
/// enumerated in tests. Unknown input never fails: unmatched prefixes
/// resolve to [`UNKNOWN_STATE`], unknown postcodes suggest no towns.

/// Sentinel for prefixes outside every defined range.
pub const UNKNOWN_STATE: &str = "Other";

/// Inclusive two-digit-prefix ranges in priority order. Non-overlapping by
/// construction (asserted in tests). The gaps (19, 29, 37-39, 61, 64-67,
/// 69, 74, 92, 99) resolve to "Other" on purpose; they mirror the tariff
/// source and must not be filled in without a product decision.
static STATE_RANGES: &[(u32, u32, &str)] = &[
    (0, 1, "Perlis"),
    (2, 9, "Kedah"),
    (10, 14, "Pulau Pinang"),
    (15, 18, "Kelantan"),
    (20, 24, "Terengganu"),
    (25, 28, "Pahang"),
    (30, 36, "Perak"),
    (40, 48, "Selangor"),
    (50, 60, "Kuala Lumpur"),
    (62, 62, "Putrajaya"),
    (63, 63, "Selangor"),
    (68, 68, "Selangor"),
    (70, 73, "Negeri Sembilan"),
    (75, 78, "Melaka"),
    (79, 86, "Johor"),
    (87, 87, "Labuan"),
    (88, 91, "Sabah"),
    (93, 98, "Sarawak"),
];

/// Known postcodes to common town names, insertion order preserved.
/// Callers pre-select the first entry.
static TOWN_SUGGESTIONS: &[(&str, &[&str])] = &[
    ("43000", &["Kajang", "Sungai Chua", "Bangi"]),
    ("43300", &["Seri Kembangan"]),
    ("43650", &["Bandar Baru Bangi"]),
    ("40000", &["Shah Alam"]),
    ("47500", &["Subang Jaya"]),
    ("50000", &["Kuala Lumpur"]),
    ("68000", &["Ampang"]),
    ("81300", &["Skudai"]),
    ("88000", &["Kota Kinabalu"]),
    ("93000", &["Kuching"]),
];

/// Map a postcode to its state name for display.
///
/// Only the first two characters are interpreted, as a base-10 integer.
/// Malformed or short input is a no-match, never an error.
pub fn resolve_state(postcode: &str) -> &'static str {
    let prefix = match postcode.get(..2).and_then(|p| p.parse::<u32>().ok()) {
        Some(p) => p,
        None => return UNKNOWN_STATE,
    };

    STATE_RANGES
        .iter()
        .find(|(from, to, _)| (*from..=*to).contains(&prefix))
        .map(|(_, _, state)| *state)
        .unwrap_or(UNKNOWN_STATE)
}

/// Exact 5-character postcode lookup. Empty for unknown postcodes.
pub fn suggest_towns(postcode: &str) -> Vec<&'static str> {
    TOWN_SUGGESTIONS
        .iter()
        .find(|(code, _)| *code == postcode)
        .map(|(_, towns)| towns.to_vec())
        .unwrap_or_default()
}
