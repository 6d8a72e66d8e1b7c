use actix_web::web;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, put, HttpRequest};

use crate::reservations::models::RescheduleQuery;
use crate::reservations::CreateReservationRequest;
use crate::server::{Response, State};
use crate::validator::Validator;

#[post("/reservations")]
async fn book(
    request: HttpRequest,
    reservation: Json<Validator<CreateReservationRequest>>,
    state: Data<State>,
) -> Response {
    let reservation = reservation.into_inner().validate()?;

    let reservation =
        web::block(move || state.reservations.book_reservation(reservation)).await?;

    http_created_json!(request, reservation.id, reservation);
}

#[get("/reservations/{id}")]
async fn find(reservation_id: Path<i64>, state: Data<State>) -> Response {
    let reservation_id = reservation_id.into_inner();

    let reservation =
        web::block(move || state.reservations.find_reservation(reservation_id)).await?;

    http_ok_json!(reservation);
}

#[put("/reservations/{id}/cancel")]
async fn cancel(reservation_id: Path<i64>, state: Data<State>) -> Response {
    let reservation_id = reservation_id.into_inner();

    let reservation =
        web::block(move || state.reservations.cancel_reservation(reservation_id)).await?;

    http_ok_json!(reservation);
}

#[put("/reservations/{id}/reschedule")]
async fn reschedule(
    reservation_id: Path<i64>,
    query: Query<RescheduleQuery>,
    state: Data<State>,
) -> Response {
    let reservation_id = reservation_id.into_inner();
    let schedule_id = query.into_inner().schedule;

    let reservation = web::block(move || {
        state
            .reservations
            .reschedule_reservation(reservation_id, schedule_id)
    })
    .await?;

    http_ok_json!(reservation);
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(book);
    cfg.service(find);
    cfg.service(cancel);
    cfg.service(reschedule);
}
