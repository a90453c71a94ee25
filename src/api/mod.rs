pub mod openmeteo;

pub use openmeteo::{AirQuality, AqiLevel, fetch_air_quality};
