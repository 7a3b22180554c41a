mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_forecast;
mod manager_open_meteo;
mod manager_summary;
mod rounding;
mod weather_category;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_open_meteo::OpenMeteo;

pub struct AppState {
    pub open_meteo: OpenMeteo,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let open_meteo = OpenMeteo::new(
        &config.open_meteo.base_url,
        config.open_meteo.timeout_secs,
        config.open_meteo.max_concurrent_requests,
    )?;

    info!("starting web server on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { open_meteo: open_meteo.clone() }))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
