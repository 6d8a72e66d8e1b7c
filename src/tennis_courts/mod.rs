pub mod models;
pub mod routes;
pub mod service;
pub mod store;

pub use models::{NewTennisCourt, TennisCourt, TennisCourtDto, TennisCourtRequest};
pub use service::TennisCourtService;
pub use store::TennisCourtStore;
