use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Raw document as returned by the Open-Meteo forecast endpoint
///
#[derive(Deserialize)]
pub struct FullDocument {
    #[serde(default)]
    pub latitude: Value,
    #[serde(default)]
    pub longitude: Value,
    #[serde(default)]
    pub daily: Option<Daily>,
    #[serde(default)]
    pub hourly: Option<Hourly>,
}

#[derive(Deserialize, Default)]
pub struct Daily {
    #[serde(default)]
    pub time: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub weather_code: Option<Vec<Value>>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sunshine_duration: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize, Default)]
pub struct Hourly {
    #[serde(default)]
    pub pressure_msl: Option<Vec<Option<f64>>>,
}

/// Normalized weather for one day at one location
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub date: Option<NaiveDate>,
    pub weather_codes: Vec<i32>,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub sunshine_duration: Option<f64>,
    pub pressure: Vec<f64>,
}
