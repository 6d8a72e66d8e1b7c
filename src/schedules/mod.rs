pub mod models;
pub mod routes;
pub mod service;
pub mod store;

pub use models::{CreateScheduleRequest, NewSchedule, Schedule, ScheduleDto};
pub use service::ScheduleService;
pub use store::ScheduleStore;
