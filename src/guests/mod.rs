pub mod models;
pub mod routes;
pub mod service;
pub mod store;

pub use models::{Guest, GuestDto, GuestRequest, NewGuest};
pub use service::GuestService;
pub use store::GuestStore;
