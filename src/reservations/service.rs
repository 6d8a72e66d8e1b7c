use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use crate::errors::ServiceError;
use crate::guests::GuestStore;
use crate::reservations::models::already_booked;
use crate::reservations::{
    Cancellation, CreateReservationRequest, NewReservation, Reservation, ReservationDto,
    ReservationStore,
};
use crate::schedules::{Schedule, ScheduleStore};

fn utc_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Books, cancels and reschedules reservations.
///
/// Every reservation is paid with the same deposit,
/// cancellations refund part of it depending on how close the schedule is.
pub struct ReservationService {
    reservations: Arc<dyn ReservationStore>,
    schedules: Arc<dyn ScheduleStore>,
    guests: Arc<dyn GuestStore>,
    deposit: i64,
    clock: fn() -> NaiveDateTime,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationStore>,
        schedules: Arc<dyn ScheduleStore>,
        guests: Arc<dyn GuestStore>,
        deposit: i64,
    ) -> Self {
        ReservationService::with_clock(reservations, schedules, guests, deposit, utc_now)
    }

    pub fn with_clock(
        reservations: Arc<dyn ReservationStore>,
        schedules: Arc<dyn ScheduleStore>,
        guests: Arc<dyn GuestStore>,
        deposit: i64,
        clock: fn() -> NaiveDateTime,
    ) -> Self {
        ReservationService {
            reservations,
            schedules,
            guests,
            deposit,
            clock,
        }
    }

    #[tracing::instrument(name = "ReservationService::book_reservation", skip(self))]
    pub fn book_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ReservationDto, ServiceError> {
        let schedule = match self.schedules.find_by_id(request.schedule_id)? {
            Some(schedule) => schedule,
            None => bad_request!(format!(
                "Schedule with id {} not found.",
                request.schedule_id
            )),
        };

        if let Some(guest_id) = request.guest_id {
            if self.guests.find_by_id(guest_id)?.is_none() {
                bad_request!(format!("Guest with id {} not found.", guest_id));
            }
        }

        self.ensure_bookable(&schedule)?;

        let reservation = self.reservations.book(&NewReservation::ready_to_play(
            request.guest_id,
            schedule.id,
            self.deposit,
            None,
        ))?;
        info!(
            "booked schedule {} with reservation {}",
            schedule.id, reservation.id
        );

        Ok(ReservationDto::new(reservation, &schedule))
    }

    #[tracing::instrument(name = "ReservationService::find_reservation", skip(self))]
    pub fn find_reservation(&self, id: i64) -> Result<ReservationDto, ServiceError> {
        let reservation = self.find(id)?;
        let schedule = self.find_schedule(reservation.schedule_id)?;

        Ok(ReservationDto::new(reservation, &schedule))
    }

    #[tracing::instrument(name = "ReservationService::cancel_reservation", skip(self))]
    pub fn cancel_reservation(&self, id: i64) -> Result<ReservationDto, ServiceError> {
        let reservation = self.find(id)?;
        let schedule = self.find_schedule(reservation.schedule_id)?;

        let cancellation = Cancellation::of(&reservation, &schedule, (self.clock)())?;
        let cancelled = self.reservations.cancel(&cancellation)?;
        info!(
            "cancelled reservation {}, refunded {}",
            cancelled.id, cancelled.refund_value
        );

        Ok(ReservationDto::new(cancelled, &schedule))
    }

    /// Cancels the reservation and books the same guest on another schedule.
    /// The new reservation points back to the cancelled one.
    #[tracing::instrument(name = "ReservationService::reschedule_reservation", skip(self))]
    pub fn reschedule_reservation(
        &self,
        id: i64,
        schedule_id: i64,
    ) -> Result<ReservationDto, ServiceError> {
        let reservation = self.find(id)?;
        let schedule = self.find_schedule(schedule_id)?;

        if reservation.schedule_id == schedule.id {
            bad_request!("Cannot reschedule to the same slot.");
        }

        let current = self.find_schedule(reservation.schedule_id)?;
        let cancellation = Cancellation::of(&reservation, &current, (self.clock)())?;

        self.ensure_bookable(&schedule)?;

        let rescheduled = self.reservations.reschedule(
            &cancellation,
            &NewReservation::ready_to_play(
                reservation.guest_id,
                schedule.id,
                self.deposit,
                Some(reservation.id),
            ),
        )?;
        info!(
            "rescheduled reservation {} to {} on schedule {}",
            reservation.id, rescheduled.id, schedule.id
        );

        Ok(ReservationDto::new(rescheduled, &schedule))
    }

    fn find(&self, id: i64) -> Result<Reservation, ServiceError> {
        match self.reservations.find_by_id(id)? {
            Some(reservation) => Ok(reservation),
            None => not_found!(format!("Reservation with id {} not found.", id)),
        }
    }

    fn find_schedule(&self, id: i64) -> Result<Schedule, ServiceError> {
        match self.schedules.find_by_id(id)? {
            Some(schedule) => Ok(schedule),
            None => not_found!(format!("Schedule with id {} not found.", id)),
        }
    }

    /// the schedule is still ahead and nobody holds it
    fn ensure_bookable(&self, schedule: &Schedule) -> Result<(), ServiceError> {
        if schedule.has_started((self.clock)()) {
            bad_request!(format!(
                "Schedule with id {} has already started.",
                schedule.id
            ));
        }

        if self
            .reservations
            .find_active_by_schedule(schedule.id)?
            .is_some()
        {
            return Err(already_booked(schedule.id));
        }

        Ok(())
    }
}
