pub mod calculator;
pub mod postcode;
pub mod tariff;
pub mod zone;
