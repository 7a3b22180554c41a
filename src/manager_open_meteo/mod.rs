pub mod errors;
pub mod models;
pub mod parser;
#[cfg(test)]
pub mod test_support;

use std::sync::Arc;
use std::time::Duration;
use chrono::NaiveDate;
use log::{debug, error};
use reqwest::Client;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use crate::manager_open_meteo::errors::OpenMeteoError;
use crate::manager_open_meteo::models::DailyRecord;
use crate::manager_open_meteo::parser::parse_day;

const HOURLY_PARAMETERS: &str = "pressure_msl";
const DAILY_PARAMETERS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunshine_duration";

/// Struct for fetching daily weather from Open-Meteo
#[derive(Clone)]
pub struct OpenMeteo {
    client: Client,
    base_url: String,
    max_concurrent_requests: usize,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching weather data
    ///
    /// # Arguments
    ///
    /// * 'base_url' - url to the Open-Meteo forecast endpoint
    /// * 'timeout_secs' - timeout for each request
    /// * 'max_concurrent_requests' - max number of days fetched at the same time, at least one
    pub fn new(base_url: &str, timeout_secs: u64, max_concurrent_requests: usize) -> Result<OpenMeteo, OpenMeteoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_concurrent_requests: max_concurrent_requests.max(1),
        })
    }

    /// Retrieves and parses the weather for one day at the given location
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    /// * 'date' - the day to fetch
    pub async fn fetch_day(&self, lat: f64, long: f64, date: NaiveDate) -> Result<DailyRecord, OpenMeteoError> {
        let day = date.format("%Y-%m-%d").to_string();

        let req = self.client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", long.to_string()),
                ("hourly", HOURLY_PARAMETERS.to_string()),
                ("daily", DAILY_PARAMETERS.to_string()),
                ("timezone", "auto".to_string()),
                ("start_date", day.clone()),
                ("end_date", day),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OpenMeteoError::Status(status.as_u16()));
        }

        let json = req.text().await?;
        let record = parse_day(&json)?;
        debug!("got weather for {} at {}, {}", date, record.latitude, record.longitude);

        Ok(record)
    }

    /// Retrieves the weather for every day from start to end, both inclusive.
    ///
    /// Days are fetched concurrently but returned in ascending date order. A day that can't be
    /// fetched or parsed is logged and left out of the result, so the result may hold fewer
    /// records than there are days in the range. An empty vector is returned if start is after end.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    /// * 'start' - first day
    /// * 'end' - last day
    pub async fn fetch_range(&self, lat: f64, long: f64, start: NaiveDate, end: NaiveDate) -> Vec<DailyRecord> {
        if start > end {
            return Vec::new();
        }

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_requests));
        let mut set: JoinSet<(NaiveDate, Result<DailyRecord, OpenMeteoError>)> = JoinSet::new();

        for date in start.iter_days().take_while(|d| *d <= end) {
            let open_meteo = self.clone();
            let semaphore = semaphore.clone();
            set.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                (date, open_meteo.fetch_day(lat, long, date).await)
            });
        }

        let mut result = set.join_all().await;
        result.sort_by_key(|(date, _)| *date);

        let mut records: Vec<DailyRecord> = Vec::new();
        for (date, day) in result {
            match day {
                Ok(record) => records.push(record),
                Err(e) => error!("failed to get weather for latitude: {}, longitude: {}, date: {}: {}",
                                 lat, long, date, e),
            }
        }
        debug!("fetched {} of {} days", records.len(), (end - start).num_days() + 1);

        records
    }
}
