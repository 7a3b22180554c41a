use std::fmt;
use std::fmt::Formatter;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::Local;
use log4rs::config::runtime::ConfigErrors;
use log::{ParseLevelError, SetLoggerError};
use serde::Serialize;
use crate::manager_open_meteo::errors::OpenMeteoError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<OpenMeteoError> for UnrecoverableError {
    fn from(e: OpenMeteoError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ParseLevelError> for ConfigError {
    fn from(e: ParseLevelError) -> Self { ConfigError(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors returned to API clients, each holding a message and the request description
///
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String, String),
    NotFound(String, String),
    MethodNotAllowed(String, String),
    Internal(String, String),
}

impl ApiError {
    fn parts(&self) -> (&str, &str) {
        match self {
            ApiError::BadRequest(m, d) => (m.as_str(), d.as_str()),
            ApiError::NotFound(m, d) => (m.as_str(), d.as_str()),
            ApiError::MethodNotAllowed(m, d) => (m.as_str(), d.as_str()),
            ApiError::Internal(m, d) => (m.as_str(), d.as_str()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(m, _) => write!(f, "ApiError::BadRequest: {}", m),
            ApiError::NotFound(m, _) => write!(f, "ApiError::NotFound: {}", m),
            ApiError::MethodNotAllowed(m, _) => write!(f, "ApiError::MethodNotAllowed: {}", m),
            ApiError::Internal(m, _) => write!(f, "ApiError::Internal: {}", m),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_, _) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_, _) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_, _) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (message, description) = self.parts();
        let status = self.status_code();

        HttpResponse::build(status).json(ErrorDetails {
            status: status.as_u16(),
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            message: message.to_string(),
            description: description.to_string(),
        })
    }
}

/// Body of every error response
///
#[derive(Serialize)]
pub struct ErrorDetails {
    pub status: u16,
    pub timestamp: String,
    pub message: String,
    pub description: String,
}
