use std::sync::Arc;

use actix_web::web::Data;
use actix_web::{get, middleware, web, App, HttpRequest, HttpResponse, HttpServer};

use crate::config::Config;
use crate::errors::ServiceError;
use crate::guests::{self, GuestService, GuestStore};
use crate::reservations::{self, ReservationService, ReservationStore};
use crate::schedules::{self, ScheduleService, ScheduleStore};
use crate::tennis_courts::{self, TennisCourtService, TennisCourtStore};

pub type Response = Result<HttpResponse, ServiceError>;

/// The services every handler can reach through `Data<State>`
pub struct State {
    pub guests: GuestService,
    pub tennis_courts: TennisCourtService,
    pub schedules: ScheduleService,
    pub reservations: ReservationService,
}

impl State {
    pub fn new<S>(store: Arc<S>, deposit: i64) -> State
    where
        S: GuestStore + TennisCourtStore + ScheduleStore + ReservationStore + 'static,
    {
        State {
            guests: GuestService::new(store.clone()),
            tennis_courts: TennisCourtService::new(store.clone(), store.clone()),
            schedules: ScheduleService::new(store.clone(), store.clone()),
            reservations: ReservationService::new(store.clone(), store.clone(), store, deposit),
        }
    }
}

#[get("/health")]
async fn health(_: HttpRequest) -> &'static str {
    "ok"
}

/// Registers the state, the extractor configs and every route
pub fn configure(cfg: &mut web::ServiceConfig, state: Data<State>) {
    cfg.app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(262_144)
                .error_handler(|err, _| ServiceError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _| ServiceError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::PathConfig::default()
                .error_handler(|err, _| ServiceError::BadRequest(err.to_string()).into()),
        )
        .service(health)
        .service(
            web::scope("/api/v1")
                .configure(guests::routes::register)
                .configure(tennis_courts::routes::register)
                .configure(schedules::routes::register)
                .configure(reservations::routes::register),
        );
}

pub async fn launch(state: State) -> std::io::Result<()> {
    let state = Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::DefaultHeaders::new().header("X-Version", env!("CARGO_PKG_VERSION")))
            .wrap(middleware::Logger::default())
            .configure(|cfg| configure(cfg, state.clone()))
    })
    .bind(format!("{}:{}", Config::api_host(), Config::api_port()))?
    .run()
    .await
}
