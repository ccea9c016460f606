mod config;
mod errors;
mod extractors;
mod routes;
mod setup;
mod state;
mod telemetry;

#[cfg(test)]
mod test_helpers;

use std::io;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use config::Config;
use setup::set_up_db;
use state::{AppState, Clock};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    telemetry::init(config.log_format);

    let db = set_up_db(&config).await.map_err(|e| {
        tracing::error!(error = %e, "failed to connect to the database");
        io::Error::other(e)
    })?;

    let state = AppState::new(db, config.token.clone(), config.time_zone, Clock::System);

    tracing::info!(
        host = %config.host,
        port = config.port,
        time_zone = %config.time_zone,
        "starting blogicum"
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
