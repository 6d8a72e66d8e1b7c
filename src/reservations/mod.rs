pub mod models;
pub mod refund;
pub mod routes;
pub mod service;
pub mod store;

pub use models::{
    Cancellation, CreateReservationRequest, NewReservation, Reservation, ReservationDto,
};
pub use service::ReservationService;
pub use store::ReservationStore;
