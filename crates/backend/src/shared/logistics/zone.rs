/// Courier tariff zone, derived from the raw postcode string.
///
/// This classification is intentionally separate from the state lookup in
/// [`super::postcode`]: the state table drives what the customer sees, the
/// zone drives which tariff column applies. The two disagree at some
/// boundaries (prefix 89 is Sabah by state but West by zone, 92/99 are
/// "Other" by state but East by zone) and callers rely on that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Peninsular Malaysia.
    West,
    /// Around the Kajang warehouse (postcode prefix 43). Refines West:
    /// only couriers with a local base override price it differently.
    Local,
    /// Sabah, Sarawak, Labuan.
    East,
}

impl Zone {
    pub fn from_postcode(postcode: &str) -> Self {
        if postcode.starts_with("87")
            || postcode.starts_with("88")
            || postcode.starts_with('9')
        {
            Zone::East
        } else if postcode.starts_with("43") {
            Zone::Local
        } else {
            Zone::West
        }
    }

    pub fn is_east(self) -> bool {
        self == Zone::East
    }
}
