use super::zone::Zone;

/// Static per-courier tariff: a flat base covering the first chargeable
/// kilogram plus an incremental rate per kilogram beyond it, split by zone.
#[derive(Debug, Clone)]
pub struct CourierTariff {
    pub name: &'static str,
    pub base_west: f64,
    pub base_east: f64,
    pub per_kg_west: f64,
    pub per_kg_east: f64,
    /// Cheaper base for deliveries around the Kajang warehouse.
    /// Only the local partner courier defines one; everyone else charges
    /// the plain West base regardless of locality.
    pub local_base_west: Option<f64>,
    pub eta_label: &'static str,
}

impl CourierTariff {
    pub fn base_for(&self, zone: Zone) -> f64 {
        match zone {
            Zone::East => self.base_east,
            Zone::Local => self.local_base_west.unwrap_or(self.base_west),
            Zone::West => self.base_west,
        }
    }

    pub fn per_kg_for(&self, zone: Zone) -> f64 {
        if zone.is_east() {
            self.per_kg_east
        } else {
            self.per_kg_west
        }
    }
}

/// Immutable at runtime. Order matters: it is the tie-break order when two
/// couriers quote the same total.
pub static COURIER_TARIFFS: &[CourierTariff] = &[
    CourierTariff {
        name: "J&T Express",
        base_west: 8.00,
        base_east: 13.00,
        per_kg_west: 1.50,
        per_kg_east: 9.00,
        local_base_west: None,
        eta_label: "2-4 hari bekerja",
    },
    CourierTariff {
        name: "Pos Laju",
        base_west: 9.00,
        base_east: 14.00,
        per_kg_west: 2.00,
        per_kg_east: 10.00,
        local_base_west: None,
        eta_label: "2-5 hari bekerja",
    },
    CourierTariff {
        name: "City-Link Express",
        base_west: 8.50,
        base_east: 15.00,
        per_kg_west: 2.00,
        per_kg_east: 11.00,
        local_base_west: Some(7.00),
        eta_label: "1-3 hari bekerja",
    },
    CourierTariff {
        name: "GDEX",
        base_west: 10.00,
        base_east: 16.00,
        per_kg_west: 2.50,
        per_kg_east: 12.00,
        local_base_west: None,
        eta_label: "3-5 hari bekerja",
    },
];
