use serde_json::{json, Value};
use wiremock::{Request, Respond, ResponseTemplate};

/// Single-day Open-Meteo document for the given date
///
pub fn day_document(date: &str) -> Value {
    json!({
        "latitude": 50.06,
        "longitude": 19.94,
        "daily": {
            "time": [date],
            "weather_code": [61],
            "temperature_2m_max": [12.5],
            "temperature_2m_min": [3.5],
            "sunshine_duration": [3600.0]
        },
        "hourly": {
            "pressure_msl": [1012.0, 1014.0]
        }
    })
}

/// Answers every request with a document for the requested start date
pub struct EchoDay;

impl Respond for EchoDay {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let date = request.url.query_pairs()
            .find(|(k, _)| k == "start_date")
            .map(|(_, v)| v.to_string());

        match date {
            Some(d) => ResponseTemplate::new(200).set_body_json(day_document(&d)),
            None => ResponseTemplate::new(400),
        }
    }
}
