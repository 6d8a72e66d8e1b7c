use actix_web::web;
use actix_web::web::{Data, Json, Path};
use actix_web::{get, post, HttpRequest};

use crate::server::{Response, State};
use crate::tennis_courts::TennisCourtRequest;
use crate::validator::Validator;

#[post("/courts")]
async fn create(
    request: HttpRequest,
    court: Json<Validator<TennisCourtRequest>>,
    state: Data<State>,
) -> Response {
    let court = court.into_inner().validate()?;

    let court = web::block(move || state.tennis_courts.add_tennis_court(court)).await?;

    http_created_json!(request, court.id, court);
}

#[get("/courts/{id}")]
async fn find(court_id: Path<i64>, state: Data<State>) -> Response {
    let court_id = court_id.into_inner();

    let court = web::block(move || state.tennis_courts.find_tennis_court_by_id(court_id)).await?;

    http_ok_json!(court);
}

#[get("/courts/{id}/schedules")]
async fn find_with_schedules(court_id: Path<i64>, state: Data<State>) -> Response {
    let court_id = court_id.into_inner();

    let court = web::block(move || {
        state
            .tennis_courts
            .find_tennis_court_with_schedules_by_id(court_id)
    })
    .await?;

    http_ok_json!(court);
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
    cfg.service(find);
    cfg.service(find_with_schedules);
}
