use diesel::prelude::*;

use crate::db::{self, PgStore};
use crate::errors::ServiceError;
use crate::reservations::models::already_booked;
use crate::reservations::{Cancellation, NewReservation, Reservation};
use crate::schedules::Schedule;

/// Persistence operations for reservations.
///
/// `book` and `reschedule` check the availability of the schedule again
/// in the same unit of work that stores the reservation.
pub trait ReservationStore: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, ServiceError>;

    fn find_active_by_schedule(&self, schedule_id: i64)
        -> Result<Option<Reservation>, ServiceError>;

    fn book(&self, reservation: &NewReservation) -> Result<Reservation, ServiceError>;

    /// fails when the reservation is no longer ready to play
    fn cancel(&self, cancellation: &Cancellation) -> Result<Reservation, ServiceError>;

    /// cancels the original reservation and books the new one, all or nothing
    fn reschedule(
        &self,
        cancellation: &Cancellation,
        reservation: &NewReservation,
    ) -> Result<Reservation, ServiceError>;
}

pub fn not_ready_to_play() -> ServiceError {
    ServiceError::BadRequest(
        "Cannot cancel/reschedule because it's not in ready to play status.".to_string(),
    )
}

/// locks the schedule row and inserts the reservation if nobody holds it yet
fn book_locked(reservation: &NewReservation, conn: &db::Conn) -> Result<Reservation, ServiceError> {
    if Schedule::lock(reservation.schedule_id, conn)?.is_none() {
        bad_request!(format!(
            "Schedule with id {} not found.",
            reservation.schedule_id
        ));
    }

    if Reservation::find_active_by_schedule(reservation.schedule_id, conn)?.is_some() {
        return Err(already_booked(reservation.schedule_id));
    }

    Reservation::create(reservation, conn)
}

impl ReservationStore for PgStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, ServiceError> {
        Reservation::find_by_id(id, &*self.connection()?)
    }

    fn find_active_by_schedule(
        &self,
        schedule_id: i64,
    ) -> Result<Option<Reservation>, ServiceError> {
        Reservation::find_active_by_schedule(schedule_id, &*self.connection()?)
    }

    fn book(&self, reservation: &NewReservation) -> Result<Reservation, ServiceError> {
        let conn = self.connection()?;

        conn.transaction::<_, ServiceError, _>(|| book_locked(reservation, &conn))
    }

    fn cancel(&self, cancellation: &Cancellation) -> Result<Reservation, ServiceError> {
        Reservation::cancel(cancellation, &*self.connection()?)?.ok_or_else(not_ready_to_play)
    }

    fn reschedule(
        &self,
        cancellation: &Cancellation,
        reservation: &NewReservation,
    ) -> Result<Reservation, ServiceError> {
        let conn = self.connection()?;

        conn.transaction::<_, ServiceError, _>(|| {
            Reservation::cancel(cancellation, &conn)?.ok_or_else(not_ready_to_play)?;
            book_locked(reservation, &conn)
        })
    }
}
