use chrono::NaiveDate;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use crate::manager_open_meteo::models::DailyRecord;
use crate::rounding::round_two_decimals;

const PANEL_POWER_KW: f64 = 2.5;
const PANEL_EFFICIENCY: f64 = 0.2;
const SECONDS_IN_AN_HOUR: f64 = 3600.0;

/// One day of the forecast as presented to clients
///
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub date: Option<NaiveDate>,
    pub weather_codes: Vec<i32>,
    pub max_temp_c: Option<f64>,
    pub min_temp_c: Option<f64>,
    #[serde(rename = "estimatedEnergyKWh")]
    pub estimated_energy_kwh: f64,
}

/// Projects a daily record into a forecast entry
///
/// # Arguments
///
/// * 'record' - the day to project
pub fn project(record: &DailyRecord) -> ForecastEntry {
    ForecastEntry {
        date: record.date,
        weather_codes: record.weather_codes.clone(),
        max_temp_c: record.max_temp,
        min_temp_c: record.min_temp,
        estimated_energy_kwh: round_two_decimals(estimated_energy(record.sunshine_duration)),
    }
}

/// Estimated energy in kWh produced by the solar installation, unrounded.
/// No sunshine, or a non-positive duration, gives no energy.
///
/// # Arguments
///
/// * 'sunshine_duration' - sunshine duration in seconds
pub fn estimated_energy(sunshine_duration: Option<f64>) -> f64 {
    match sunshine_duration {
        Some(s) if s > 0.0 => PANEL_POWER_KW * (s / SECONDS_IN_AN_HOUR) * PANEL_EFFICIENCY,
        _ => 0.0,
    }
}
