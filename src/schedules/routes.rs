use actix_web::web;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, HttpRequest};

use crate::schedules::models::ScheduleFilter;
use crate::schedules::CreateScheduleRequest;
use crate::server::{Response, State};
use crate::validator::Validator;

#[post("/schedules")]
async fn create(
    request: HttpRequest,
    schedule: Json<Validator<CreateScheduleRequest>>,
    state: Data<State>,
) -> Response {
    let schedule = schedule.into_inner().validate()?;

    let schedule = web::block(move || {
        state
            .schedules
            .add_schedule(schedule.tennis_court_id, schedule)
    })
    .await?;

    http_created_json!(request, schedule.id, schedule);
}

/// **GET /api/v1/schedules?startDate=2024-01-01&endDate=2024-01-31**
///
/// lists every schedule that overlaps the given days,
/// `tennisCourtId` can be used instead to list the schedules of a single court
#[get("/schedules")]
async fn find_all(filter: Query<ScheduleFilter>, state: Data<State>) -> Response {
    let filter = filter.into_inner();

    let schedules = match filter.tennis_court_id {
        Some(court_id) => {
            web::block(move || state.schedules.find_schedules_by_tennis_court_id(court_id))
                .await?
        }
        None => {
            let (start, end) = filter.date_range()?;
            web::block(move || state.schedules.find_schedules_by_dates(start, end)).await?
        }
    };

    http_list_json!(schedules);
}

#[get("/schedules/{id}")]
async fn find(schedule_id: Path<i64>, state: Data<State>) -> Response {
    let schedule_id = schedule_id.into_inner();

    let schedule = web::block(move || state.schedules.find_schedule(schedule_id)).await?;

    http_ok_json!(schedule);
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
    cfg.service(find_all);
    cfg.service(find);
}

#[cfg(test)]
mod tests {
    use actix_web::http::header;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::schedules::ScheduleDto;
    use crate::server;
    use crate::testing::{self, at, MemoryStore};

    #[actix_rt::test]
    async fn create_schedule() {
        let store = MemoryStore::new();
        let court = testing::add_court(&store, "Court 1");
        let mut app = test::init_service(
            App::new().configure(|cfg| server::configure(cfg, testing::state_with(store))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(&json!({ "tennisCourtId": court.id, "start": "2030-01-01T10:00" }))
            .to_request();
        let resp = test::call_service(&mut app, req).await;

        assert_eq!(resp.status(), 201);
        let location = resp.headers().get(header::LOCATION).unwrap().clone();
        let created: ScheduleDto = test::read_body_json(resp).await;
        assert_eq!(
            location.to_str().unwrap(),
            format!("/api/v1/schedules/{}", created.id)
        );
        assert_eq!(created.start_date_time, at(2030, 1, 1, 10));
        assert_eq!(created.end_date_time, at(2030, 1, 1, 11));
    }

    #[actix_rt::test]
    async fn create_schedule_for_unknown_court() {
        let mut app =
            test::init_service(App::new().configure(|cfg| server::configure(cfg, testing::state())))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(&json!({ "tennisCourtId": 12, "startDateTime": "2030-01-01T10:00:00" }))
            .to_request();

        assert_eq!(test::call_service(&mut app, req).await.status(), 404);
    }

    #[actix_rt::test]
    async fn list_schedules_between_dates() {
        let store = MemoryStore::new();
        let court = testing::add_court(&store, "Court 1");
        let inside = testing::add_schedule(&store, court.id, at(2030, 6, 1, 10));
        testing::add_schedule(&store, court.id, at(2030, 6, 5, 10));
        let mut app = test::init_service(
            App::new().configure(|cfg| server::configure(cfg, testing::state_with(store))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/schedules?startDate=2030-06-01&endDate=2030-06-02")
            .to_request();
        let found: Vec<ScheduleDto> = test::read_response_json(&mut app, req).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, inside.id);

        let req = test::TestRequest::get()
            .uri("/api/v1/schedules?startDate=2031-06-01&endDate=2031-06-02")
            .to_request();
        assert_eq!(test::call_service(&mut app, req).await.status(), 204);

        let req = test::TestRequest::get()
            .uri("/api/v1/schedules?startDate=2030-06-02&endDate=2030-06-01")
            .to_request();
        assert_eq!(test::call_service(&mut app, req).await.status(), 400);

        let req = test::TestRequest::get()
            .uri("/api/v1/schedules?startDate=yesterday&endDate=2030-06-01")
            .to_request();
        assert_eq!(test::call_service(&mut app, req).await.status(), 400);
    }

    #[actix_rt::test]
    async fn list_schedules_of_a_court() {
        let store = MemoryStore::new();
        let court = testing::add_court(&store, "Court 1");
        testing::add_schedule(&store, court.id, at(2030, 6, 1, 10));
        testing::add_schedule(&store, court.id, at(2030, 6, 1, 8));
        let mut app = test::init_service(
            App::new().configure(|cfg| server::configure(cfg, testing::state_with(store))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/schedules?tennisCourtId={}", court.id))
            .to_request();
        let found: Vec<ScheduleDto> = test::read_response_json(&mut app, req).await;

        assert_eq!(found.len(), 2);
        assert!(found[0].start_date_time < found[1].start_date_time);
    }

    #[actix_rt::test]
    async fn unknown_schedule_is_404() {
        let mut app =
            test::init_service(App::new().configure(|cfg| server::configure(cfg, testing::state())))
                .await;

        let req = test::TestRequest::get().uri("/api/v1/schedules/8").to_request();

        assert_eq!(test::call_service(&mut app, req).await.status(), 404);
    }
}
