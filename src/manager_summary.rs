use serde::Serialize;
use crate::manager_open_meteo::models::DailyRecord;
use crate::rounding::round_two_decimals;
use crate::weather_category::WeatherCategory;

/// Forecast summary used when there are no weather codes to count
const NO_CATEGORY: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    #[serde(rename = "avgPressureHPa")]
    pub avg_pressure_hpa: f64,
    #[serde(rename = "avgSunshineDurationSeconds")]
    pub avg_sunshine_duration_seconds: f64,
    #[serde(rename = "lowestTemperatureCelsius")]
    pub lowest_temperature_celsius: f64,
    #[serde(rename = "highestTemperatureCelsius")]
    pub highest_temperature_celsius: f64,
    #[serde(rename = "forecastSummary")]
    pub forecast_summary: String,
}

/// Reduces a range of daily records into summary statistics
///
/// * average pressure is the mean over every hourly sample of every day
/// * average sunshine counts a day without sunshine data as zero seconds
/// * days without temperature data are left out of lowest/highest, zero if no day has any
/// * the forecast summary is the most frequent weather category
///
/// # Arguments
///
/// * 'records' - the days to summarize, in date order
pub fn summarize(records: &[DailyRecord]) -> SummaryStatistics {
    let avg_pressure = mean(records.iter().flat_map(|r| r.pressure.iter().copied()));
    let avg_sunshine = mean(records.iter().map(|r| r.sunshine_duration.unwrap_or(0.0)));

    let lowest = records.iter()
        .filter_map(|r| r.min_temp)
        .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.min(t))))
        .unwrap_or(0.0);
    let highest = records.iter()
        .filter_map(|r| r.max_temp)
        .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.max(t))))
        .unwrap_or(0.0);

    SummaryStatistics {
        avg_pressure_hpa: round_two_decimals(avg_pressure),
        avg_sunshine_duration_seconds: round_two_decimals(avg_sunshine),
        lowest_temperature_celsius: lowest,
        highest_temperature_celsius: highest,
        forecast_summary: most_frequent_category(records),
    }
}

/// Arithmetic mean, zero for no values
///
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Description of the most frequent category over all weather codes.
/// On a tie the category seen first wins.
///
/// # Arguments
///
/// * 'records' - the days to count weather codes in
fn most_frequent_category(records: &[DailyRecord]) -> String {
    let mut counts: Vec<(WeatherCategory, usize)> = Vec::new();

    for code in records.iter().flat_map(|r| r.weather_codes.iter()) {
        let category = WeatherCategory::from_code(*code);
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut best: Option<(WeatherCategory, usize)> = None;
    for (category, n) in counts {
        if best.map_or(true, |(_, b)| n > b) {
            best = Some((category, n));
        }
    }

    match best {
        Some((category, _)) => category.description().to_string(),
        None => NO_CATEGORY.to_string(),
    }
}
