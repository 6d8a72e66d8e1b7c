use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::web::{Data, HttpResponse, Json, Path, Query};
use actix_web::{delete, get, post, put, HttpRequest};

use crate::guests::models::{GuestFilter, GuestRequest};
use crate::server::{Response, State};
use crate::validator::Validator;

#[get("/guests")]
async fn find_all(filter: Query<GuestFilter>, state: Data<State>) -> Response {
    let filter = filter.into_inner();

    let guests = web::block(move || match filter.name {
        Some(name) => state.guests.get_guests_by_name(&name),
        None => state.guests.get_all_guests(),
    })
    .await?;

    http_list_json!(guests);
}

#[get("/guests/{id}")]
async fn find(guest_id: Path<i64>, state: Data<State>) -> Response {
    let guest_id = guest_id.into_inner();

    let guest = web::block(move || state.guests.get_guest_by_id(guest_id)).await?;

    http_ok_json!(guest);
}

#[post("/guests")]
async fn create(
    request: HttpRequest,
    guest: Json<Validator<GuestRequest>>,
    state: Data<State>,
) -> Response {
    let guest = guest.into_inner().validate()?;

    let guest = web::block(move || state.guests.create_guest(guest)).await?;

    http_created_json!(request, guest.id, guest);
}

#[put("/guests/{id}")]
async fn update(
    guest_id: Path<i64>,
    guest: Json<Validator<GuestRequest>>,
    state: Data<State>,
) -> Response {
    let guest_id = guest_id.into_inner();
    let guest = guest.into_inner().validate()?;

    let guest = web::block(move || state.guests.update_guest(guest_id, guest)).await?;

    http_ok_json!(guest);
}

#[delete("/guests/{id}")]
async fn delete(guest_id: Path<i64>, state: Data<State>) -> Response {
    let guest_id = guest_id.into_inner();

    web::block(move || state.guests.delete_guest(guest_id)).await?;

    Ok(HttpResponse::new(StatusCode::OK))
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all);
    cfg.service(find);
    cfg.service(create);
    cfg.service(update);
    cfg.service(delete);
}
