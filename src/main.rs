//! Booking backend for tennis courts: guests book one hour schedules
//! on a court, and can cancel or reschedule them for a (partial) refund.
#![warn(rust_2018_idioms)]

#[macro_use]
extern crate diesel;

#[macro_use]
extern crate diesel_migrations;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;

use anyhow::{anyhow, Error};
use dotenv::dotenv;

#[macro_use]
mod macros;

mod config;
mod db;
mod errors;
mod guests;
mod reservations;
mod schedules;
mod schema;
mod server;
mod tennis_courts;
mod validator;

#[cfg(test)]
mod testing;

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<(), Error> {
    init().await?;

    Ok(())
}

async fn init() -> anyhow::Result<(), Error> {
    dotenv().ok();

    let (tracer, _uninstall) = opentelemetry_jaeger::new_pipeline()
        .with_service_name("tenniscourts")
        .with_agent_endpoint(Config::opentelemetry_endpoint())
        .install()
        .map_err(|e| anyhow!("unable to connect to opentelemetry agent: {}", e))?;

    // Create a tracing layer with the configured tracer
    let opentelemetry = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(opentelemetry)
        .try_init()
        .map_err(|e| anyhow!("unable to initialize the tracer: {}", e))?;

    debug!("running database migrations");
    db::migrate(Config::database_url()).map_err(|e| anyhow!("migrations failed: {}", e))?;

    let pool = db::build_connection_pool(Config::database_url(), Config::database_pool_size())
        .map_err(|e| anyhow!("unable to build the connection pool: {}", e))?;

    let store = Arc::new(db::PgStore::new(pool));
    let state = server::State::new(store, Config::reservation_deposit());

    debug!("launching the actix webserver");
    server::launch(state).await?;

    Ok(())
}
