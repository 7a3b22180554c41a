use chrono::NaiveDate;
use serde_json::Value;
use crate::manager_open_meteo::errors::OpenMeteoError;
use crate::manager_open_meteo::models::{DailyRecord, FullDocument};

/// Parses a single-day Open-Meteo document into a normalized record.
///
/// Missing sections and lists are tolerated and just leave the corresponding fields empty,
/// while a document that isn't a JSON object, holds wrongly typed lists or covers more than
/// one day fails as a whole.
///
/// # Arguments
///
/// * 'json' - the response body from Open-Meteo
pub fn parse_day(json: &str) -> Result<DailyRecord, OpenMeteoError> {
    let root: Value = serde_json::from_str(json)?;
    if !root.is_object() {
        return Err(OpenMeteoError::Document("top level element is not an object".to_string()));
    }
    let doc: FullDocument = serde_json::from_value(root)?;

    let daily = doc.daily.unwrap_or_default();
    let hourly = doc.hourly.unwrap_or_default();

    let days = [
        ("time", daily.time.as_ref().map_or(0, Vec::len)),
        ("weather_code", daily.weather_code.as_ref().map_or(0, Vec::len)),
        ("temperature_2m_max", daily.temperature_2m_max.as_ref().map_or(0, Vec::len)),
        ("temperature_2m_min", daily.temperature_2m_min.as_ref().map_or(0, Vec::len)),
        ("sunshine_duration", daily.sunshine_duration.as_ref().map_or(0, Vec::len)),
    ];
    if let Some((name, len)) = days.iter().find(|(_, len)| *len > 1) {
        return Err(OpenMeteoError::Document(
            format!("expected a single day, daily.{} has {} entries", name, len)));
    }

    let dates = daily.time.unwrap_or_default();
    let date = match dates.into_iter().next().flatten() {
        Some(d) => Some(NaiveDate::parse_from_str(&d, "%Y-%m-%d")?),
        None => None,
    };

    Ok(DailyRecord {
        latitude: lenient_f64(&doc.latitude),
        longitude: lenient_f64(&doc.longitude),
        date,
        weather_codes: weather_codes(daily.weather_code.unwrap_or_default())?,
        max_temp: first(daily.temperature_2m_max),
        min_temp: first(daily.temperature_2m_min),
        sunshine_duration: first(daily.sunshine_duration),
        pressure: hourly.pressure_msl.unwrap_or_default().into_iter().flatten().collect(),
    })
}

/// Returns the first element of an optional list, if any
///
fn first(list: Option<Vec<Option<f64>>>) -> Option<f64> {
    list.and_then(|l| l.into_iter().next().flatten())
}

/// Reads weather codes, accepting integral numbers in any JSON number form and skipping nulls
///
/// # Arguments
///
/// * 'codes' - raw daily.weather_code list
fn weather_codes(codes: Vec<Value>) -> Result<Vec<i32>, OpenMeteoError> {
    let mut result: Vec<i32> = Vec::new();
    for code in codes {
        match code {
            Value::Null => continue,
            Value::Number(ref n) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => result.push(f as i32),
                _ => return Err(OpenMeteoError::Document(format!("weather code {} is not an integer", n))),
            },
            other => return Err(OpenMeteoError::Document(format!("weather code {} is not a number", other))),
        }
    }

    Ok(result)
}

/// Reads a JSON value as a number, defaulting to 0 for anything non-numeric
///
/// # Arguments
///
/// * 'value' - value to coerce
fn lenient_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::Bool(b) => if *b { 1.0 } else { 0.0 },
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DAY: &str = r#"{
        "latitude": 50.06,
        "longitude": 19.94,
        "daily": {
            "time": ["2025-03-01"],
            "weather_code": [61],
            "temperature_2m_max": [8.4],
            "temperature_2m_min": [-1.2],
            "sunshine_duration": [21600.0]
        },
        "hourly": {
            "pressure_msl": [1012.0, 1013.5, 1014.0]
        }
    }"#;

    #[test]
    fn parses_full_document() {
        let record = parse_day(FULL_DAY).unwrap();

        assert_eq!(record.latitude, 50.06);
        assert_eq!(record.longitude, 19.94);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(record.weather_codes, vec![61]);
        assert_eq!(record.max_temp, Some(8.4));
        assert_eq!(record.min_temp, Some(-1.2));
        assert_eq!(record.sunshine_duration, Some(21600.0));
        assert_eq!(record.pressure, vec![1012.0, 1013.5, 1014.0]);
    }

    #[test]
    fn missing_sections_leave_fields_empty() {
        let record = parse_day(r#"{"latitude": 10.5}"#).unwrap();

        assert_eq!(record.latitude, 10.5);
        assert_eq!(record.longitude, 0.0);
        assert_eq!(record.date, None);
        assert!(record.weather_codes.is_empty());
        assert_eq!(record.max_temp, None);
        assert_eq!(record.min_temp, None);
        assert_eq!(record.sunshine_duration, None);
        assert!(record.pressure.is_empty());
    }

    #[test]
    fn empty_and_null_lists_are_absent() {
        let json = r#"{
            "daily": {"time": [], "temperature_2m_max": [null], "sunshine_duration": null},
            "hourly": {"pressure_msl": [1000.0, null, 1002.0]}
        }"#;
        let record = parse_day(json).unwrap();

        assert_eq!(record.date, None);
        assert_eq!(record.max_temp, None);
        assert_eq!(record.sunshine_duration, None);
        assert_eq!(record.pressure, vec![1000.0, 1002.0]);
    }

    #[test]
    fn coordinates_are_coerced() {
        let record = parse_day(r#"{"latitude": "45.5", "longitude": "east"}"#).unwrap();

        assert_eq!(record.latitude, 45.5);
        assert_eq!(record.longitude, 0.0);
    }

    #[test]
    fn invalid_json_fails() {
        assert!(matches!(parse_day("not json"), Err(OpenMeteoError::Document(_))));
        assert!(matches!(parse_day("[]"), Err(OpenMeteoError::Document(_))));
        assert!(matches!(parse_day(""), Err(OpenMeteoError::Document(_))));
    }

    #[test]
    fn wrongly_typed_list_fails() {
        let json = r#"{"daily": {"temperature_2m_max": "warm"}}"#;
        assert!(matches!(parse_day(json), Err(OpenMeteoError::Document(_))));
    }

    #[test]
    fn multi_day_document_is_rejected() {
        let json = r#"{"daily": {"time": ["2025-03-01", "2025-03-02"], "temperature_2m_max": [1.0, 2.0]}}"#;
        assert!(matches!(parse_day(json), Err(OpenMeteoError::Document(_))));
    }

    #[test]
    fn multi_day_document_without_time_is_rejected() {
        let json = r#"{"daily":{"temperature_2m_max":[1.0,30.0],"sunshine_duration":[0.0,36000.0]}}"#;
        match parse_day(json) {
            Err(OpenMeteoError::Document(m)) => assert!(m.contains("daily.temperature_2m_max")),
            other => panic!("expected document error, got {:?}", other),
        }

        let json = r#"{"daily":{"time":["2025-03-01"],"weather_code":[61,3]}}"#;
        assert!(matches!(parse_day(json), Err(OpenMeteoError::Document(_))));
    }

    #[test]
    fn weather_codes_in_float_form() {
        let json = r#"{"daily":{"time":["2025-03-01"],"weather_code":[61.0]}}"#;
        assert_eq!(parse_day(json).unwrap().weather_codes, vec![61]);

        let json = r#"{"daily":{"weather_code":[null]}}"#;
        assert!(parse_day(json).unwrap().weather_codes.is_empty());
    }

    #[test]
    fn non_integral_weather_code_fails() {
        assert!(matches!(parse_day(r#"{"daily":{"weather_code":[61.5]}}"#), Err(OpenMeteoError::Document(_))));
        assert!(matches!(parse_day(r#"{"daily":{"weather_code":["rain"]}}"#), Err(OpenMeteoError::Document(_))));
    }

    #[test]
    fn bad_date_fails() {
        let json = r#"{"daily": {"time": ["03/01/2025"]}}"#;
        assert!(matches!(parse_day(json), Err(OpenMeteoError::Document(_))));
    }
}
