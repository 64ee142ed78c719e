pub mod postcode;
pub mod shipping;
