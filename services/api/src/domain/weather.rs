use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_CITY: &str = "San Francisco";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub current: i32,
    pub feels_like: i32,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub day: &'static str,
    pub high: i32,
    pub low: i32,
    pub condition: &'static str,
}

/// Canned weather report. Only `city` and `timestamp` vary between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub country: &'static str,
    pub temperature: Temperature,
    pub condition: &'static str,
    pub humidity: u32,
    pub wind_speed: u32,
    pub pressure: u32,
    pub visibility: u32,
    pub uv_index: u32,
    #[serde(serialize_with = "playground_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    pub fn mock(city: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            city: city.into(),
            country: "USA",
            temperature: Temperature {
                current: 65,
                feels_like: 63,
                unit: "fahrenheit",
            },
            condition: "Partly Cloudy",
            humidity: 72,
            wind_speed: 8,
            pressure: 1013,
            visibility: 10,
            uv_index: 3,
            timestamp,
            forecast: vec![
                ForecastDay {
                    day: "Today",
                    high: 68,
                    low: 58,
                    condition: "Partly Cloudy",
                },
                ForecastDay {
                    day: "Tomorrow",
                    high: 70,
                    low: 60,
                    condition: "Sunny",
                },
                ForecastDay {
                    day: "Sunday",
                    high: 67,
                    low: 57,
                    condition: "Cloudy",
                },
            ],
        }
    }
}
