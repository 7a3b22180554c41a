use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Days, Local, NaiveDate};
use log::{error, info};
use serde::Deserialize;
use crate::AppState;
use crate::errors::ApiError;
use crate::manager_forecast::{project, ForecastEntry};
use crate::manager_summary::summarize;

const FORECAST_DAYS: u64 = 7;
const MIN_LATITUDE: f64 = -90.0;
const MAX_LATITUDE: f64 = 90.0;
const MIN_LONGITUDE: f64 = -180.0;
const MAX_LONGITUDE: f64 = 180.0;

#[derive(Deserialize, Debug)]
pub struct QueryParams {
    latitude: Option<String>,
    longitude: Option<String>,
}

/// Registers the weather endpoints, answering 405 for anything but GET on them
///
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default()
        .error_handler(|e, req| ApiError::BadRequest(e.to_string(), description(req)).into()))
        .service(web::resource("/weather/forecast")
            .route(web::get().to(forecast))
            .default_service(web::to(method_not_allowed)))
        .service(web::resource("/weather/summary")
            .route(web::get().to(summary))
            .default_service(web::to(method_not_allowed)));
}

async fn forecast(req: HttpRequest, params: web::Query<QueryParams>, data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    info!("{:?}", params);

    let (lat, long) = validate(&params, &description(&req))?;
    let (start, end) = week(&description(&req))?;

    let records = data.open_meteo.fetch_range(lat, long, start, end).await;
    let forecast: Vec<ForecastEntry> = records.iter().map(project).collect();

    Ok(HttpResponse::Ok().json(forecast))
}

async fn summary(req: HttpRequest, params: web::Query<QueryParams>, data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    info!("{:?}", params);

    let (lat, long) = validate(&params, &description(&req))?;
    let (start, end) = week(&description(&req))?;

    let records = data.open_meteo.fetch_range(lat, long, start, end).await;

    Ok(HttpResponse::Ok().json(summarize(&records)))
}

/// Fallback for any route not served
///
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(
        format!("No endpoint {} {}", req.method(), req.path()), description(&req)))
}

/// Fallback for unsupported methods on a served route
///
async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(
        format!("Method '{}' is not supported. Supported methods are: [GET]", req.method()), description(&req)))
}

fn description(req: &HttpRequest) -> String {
    format!("uri={}", req.path())
}

/// Returns today and the last day of the forecast week
///
/// # Arguments
///
/// * 'description' - request description used in errors
fn week(description: &str) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let today = Local::now().date_naive();
    match today.checked_add_days(Days::new(FORECAST_DAYS - 1)) {
        Some(end) => Ok((today, end)),
        None => {
            error!("date range overflow from {}", today);
            Err(ApiError::Internal(format!("Cannot compute forecast range from {}", today), description.to_string()))
        }
    }
}

/// Validates and converts latitude and longitude.
///
/// A missing or non-numeric parameter is reported on its own, while range violations for both
/// parameters are reported together.
///
/// # Arguments
///
/// * 'params' - raw query parameters
/// * 'description' - request description used in errors
fn validate(params: &QueryParams, description: &str) -> Result<(f64, f64), ApiError> {
    let bad_request = |message: String| ApiError::BadRequest(message, description.to_string());

    let lat = required("latitude", &params.latitude).map_err(bad_request)?;
    let long = required("longitude", &params.longitude).map_err(bad_request)?;

    let mut violations: Vec<String> = Vec::new();
    if lat < MIN_LATITUDE {
        violations.push(format!("Latitude must be >= {}", MIN_LATITUDE));
    } else if lat > MAX_LATITUDE {
        violations.push(format!("Latitude must be <= {}", MAX_LATITUDE));
    }
    if long < MIN_LONGITUDE {
        violations.push(format!("Longitude must be >= {}", MIN_LONGITUDE));
    } else if long > MAX_LONGITUDE {
        violations.push(format!("Longitude must be <= {}", MAX_LONGITUDE));
    }

    if violations.is_empty() {
        Ok((lat, long))
    } else {
        Err(bad_request(violations.join(".; ")))
    }
}

/// Returns the parameter as a finite number or a message telling what is wrong with it
///
/// # Arguments
///
/// * 'name' - parameter name
/// * 'value' - raw value, if given
fn required(name: &str, value: &Option<String>) -> Result<f64, String> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Err(format!("Missing required parameter: {}", name)),
        Some(v) => v.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| format!("Failed to convert '{}' with value: '{}'", name, v)),
    }
}
