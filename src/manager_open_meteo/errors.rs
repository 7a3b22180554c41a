use std::fmt;

/// Failures while getting one day of weather from Open-Meteo
///
#[derive(Debug)]
pub enum OpenMeteoError {
    /// The request never got a response, e.g. connection refused or timed out
    Request(String),
    /// Open-Meteo answered with a non-success HTTP status
    Status(u16),
    /// The body could not be read as a single-day forecast document
    Document(String),
}

impl fmt::Display for OpenMeteoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpenMeteoError::Request(e) => write!(f, "request to Open-Meteo failed: {}", e),
            OpenMeteoError::Status(s) => write!(f, "Open-Meteo responded with status {}", s),
            OpenMeteoError::Document(e) => write!(f, "unexpected Open-Meteo forecast document: {}", e),
        }
    }
}
impl From<reqwest::Error> for OpenMeteoError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => OpenMeteoError::Status(status.as_u16()),
            None => OpenMeteoError::Request(e.to_string()),
        }
    }
}
impl From<serde_json::Error> for OpenMeteoError {
    fn from(e: serde_json::Error) -> Self {
        OpenMeteoError::Document(e.to_string())
    }
}
impl From<chrono::format::ParseError> for OpenMeteoError {
    fn from(e: chrono::format::ParseError) -> Self {
        OpenMeteoError::Document(format!("bad date in daily.time: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(OpenMeteoError::Status(503).to_string(), "Open-Meteo responded with status 503");
        assert_eq!(OpenMeteoError::Request("timed out".to_string()).to_string(),
                   "request to Open-Meteo failed: timed out");
        assert_eq!(OpenMeteoError::Document("no daily section".to_string()).to_string(),
                   "unexpected Open-Meteo forecast document: no daily section");
    }

    #[test]
    fn bad_date_is_a_document_error() {
        let e = chrono::NaiveDate::parse_from_str("03/01/2025", "%Y-%m-%d").unwrap_err();
        match OpenMeteoError::from(e) {
            OpenMeteoError::Document(m) => assert!(m.starts_with("bad date in daily.time")),
            other => panic!("expected document error, got {:?}", other),
        }
    }
}
