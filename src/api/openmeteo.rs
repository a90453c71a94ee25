use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::geometry::LngLat;

const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const USER_AGENT: &str = "ecopatrol/0.1.0 (https://github.com/ecopatrol/ecopatrol-core)";

/// European AQI bands as defined by the EEA scale Open-Meteo reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    ExtremelyPoor,
}

impl AqiLevel {
    pub fn from_european_aqi(aqi: f64) -> Self {
        if aqi <= 20.0 {
            AqiLevel::Good
        } else if aqi <= 40.0 {
            AqiLevel::Fair
        } else if aqi <= 60.0 {
            AqiLevel::Moderate
        } else if aqi <= 80.0 {
            AqiLevel::Poor
        } else if aqi <= 100.0 {
            AqiLevel::VeryPoor
        } else {
            AqiLevel::ExtremelyPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "good",
            AqiLevel::Fair => "fair",
            AqiLevel::Moderate => "moderate",
            AqiLevel::Poor => "poor",
            AqiLevel::VeryPoor => "very poor",
            AqiLevel::ExtremelyPoor => "extremely poor",
        }
    }
}

/// Current air quality at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQuality {
    pub european_aqi: f64,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
}

impl AirQuality {
    pub fn level(&self) -> AqiLevel {
        AqiLevel::from_european_aqi(self.european_aqi)
    }
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    european_aqi: Option<f64>,
    #[serde(default)]
    pm2_5: Option<f64>,
    #[serde(default)]
    pm10: Option<f64>,
}

/// Fetch current air quality from the Open-Meteo air-quality API.
///
/// Blocking call; callers refresh on their own schedule. Superseded
/// in-flight requests are not cancelled, so a stale response may land after
/// a fresh one.
///
/// # Arguments
/// * `point` - Location to query
///
/// # Returns
/// * `Ok(AirQuality)` - Current readings with the European AQI
/// * `Err` - Network failure, non-success status, or AQI missing upstream
pub fn fetch_air_quality(point: LngLat) -> Result<AirQuality> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(AIR_QUALITY_URL)
        .query(&[
            ("latitude", point.lat.to_string()),
            ("longitude", point.lng.to_string()),
            ("current", "european_aqi,pm2_5,pm10".to_string()),
        ])
        .send()
        .context("Failed to send request to Open-Meteo API")?;

    if !response.status().is_success() {
        bail!("Open-Meteo API returned error status: {}", response.status());
    }

    let parsed: AirQualityResponse = response
        .json()
        .context("Failed to parse Open-Meteo JSON response")?;

    let european_aqi = parsed
        .current
        .european_aqi
        .ok_or_else(|| anyhow::anyhow!("Open-Meteo response has no european_aqi reading"))?;

    Ok(AirQuality {
        european_aqi,
        pm2_5: parsed.current.pm2_5,
        pm10: parsed.current.pm10,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_air_quality_response() {
        // Trimmed sample response from Open-Meteo
        let json = r#"{
            "latitude": 41.3,
            "longitude": 69.25,
            "current": { "time": "2024-05-01T10:00", "european_aqi": 38.0, "pm2_5": 14.2, "pm10": 27.9 }
        }"#;
        let parsed: AirQualityResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.current.european_aqi, Some(38.0));
        assert_eq!(parsed.current.pm2_5, Some(14.2));
        assert_eq!(parsed.current.pm10, Some(27.9));
    }

    #[test]
    fn test_parse_response_without_particulates() {
        let json = r#"{ "current": { "european_aqi": 12.5 } }"#;
        let parsed: AirQualityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.current.european_aqi, Some(12.5));
        assert_eq!(parsed.current.pm2_5, None);
    }

    #[test]
    fn test_aqi_bands() {
        assert_eq!(AqiLevel::from_european_aqi(0.0), AqiLevel::Good);
        assert_eq!(AqiLevel::from_european_aqi(20.0), AqiLevel::Good);
        assert_eq!(AqiLevel::from_european_aqi(20.1), AqiLevel::Fair);
        assert_eq!(AqiLevel::from_european_aqi(40.0), AqiLevel::Fair);
        assert_eq!(AqiLevel::from_european_aqi(55.0), AqiLevel::Moderate);
        assert_eq!(AqiLevel::from_european_aqi(75.0), AqiLevel::Poor);
        assert_eq!(AqiLevel::from_european_aqi(100.0), AqiLevel::VeryPoor);
        assert_eq!(AqiLevel::from_european_aqi(140.0), AqiLevel::ExtremelyPoor);
    }

    #[test]
    fn test_level_label() {
        let reading = AirQuality {
            european_aqi: 85.0,
            pm2_5: None,
            pm10: None,
        };
        assert_eq!(reading.level(), AqiLevel::VeryPoor);
        assert_eq!(reading.level().label(), "very poor");
    }
}
