use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::reservations::refund;
use crate::schedules::{Schedule, ScheduleDto};
use crate::schema::reservations;
use crate::validator::validate_id;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReservationStatus {
    ReadyToPlay,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::ReadyToPlay => "READY_TO_PLAY",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[table_name = "reservations"]
pub struct Reservation {
    pub id: i64,
    pub guest_id: Option<i64>,
    pub schedule_id: i64,
    pub value: i64,
    pub reservation_status: String,
    pub refund_value: i64,
    pub previous_reservation_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "reservations"]
pub struct NewReservation {
    pub guest_id: Option<i64>,
    pub schedule_id: i64,
    pub value: i64,
    pub reservation_status: String,
    pub refund_value: i64,
    pub previous_reservation_id: Option<i64>,
}

/// The outcome of cancelling a reservation, computed before it is stored
#[derive(Debug, Clone, PartialEq)]
pub struct Cancellation {
    pub reservation_id: i64,
    pub refund_value: i64,
}

/// Book a schedule, the guest is optional
///
/// **POST /api/v1/reservations**
///
/// ``` shell
/// curl --location --request POST 'http://localhost:8080/api/v1/reservations' \
/// --header 'Content-Type: application/json' \
/// --data-raw '{ "scheduleId": 1, "guestId": 1 }'
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub schedule_id: i64,
    #[serde(default)]
    pub guest_id: Option<i64>,
}

/// **PUT /api/v1/reservations/{id}/reschedule?schedule=2**
#[derive(Debug, Deserialize)]
pub struct RescheduleQuery {
    pub schedule: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i64,
    pub guest_id: Option<i64>,
    pub schedule_id: i64,
    pub schedule: ScheduleDto,
    pub value: i64,
    pub reservation_status: String,
    pub refund_value: i64,
    pub previous_reservation_id: Option<i64>,
}

pub fn already_booked(schedule_id: i64) -> ServiceError {
    ServiceError::BadRequest(format!(
        "Schedule with id {} is already booked.",
        schedule_id
    ))
}

impl Reservation {
    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<Option<Reservation>, ServiceError> {
        let reservation = reservations::table
            .find(id)
            .first::<Reservation>(conn)
            .optional()?;

        Ok(reservation)
    }

    /// the reservation that currently holds the schedule, if any
    pub fn find_active_by_schedule(
        schedule_id: i64,
        conn: &db::Conn,
    ) -> Result<Option<Reservation>, ServiceError> {
        let reservation = reservations::table
            .filter(reservations::schedule_id.eq(schedule_id))
            .filter(reservations::reservation_status.eq(ReservationStatus::ReadyToPlay.as_str()))
            .first::<Reservation>(conn)
            .optional()?;

        Ok(reservation)
    }

    pub fn create(
        reservation: &NewReservation,
        conn: &db::Conn,
    ) -> Result<Reservation, ServiceError> {
        let reservation = diesel::insert_into(reservations::table)
            .values(reservation)
            .get_result::<Reservation>(conn)?;

        Ok(reservation)
    }

    /// Cancels the reservation only while it is still ready to play,
    /// `None` means nothing was updated
    pub fn cancel(
        cancellation: &Cancellation,
        conn: &db::Conn,
    ) -> Result<Option<Reservation>, ServiceError> {
        let target = reservations::table
            .filter(reservations::id.eq(cancellation.reservation_id))
            .filter(reservations::reservation_status.eq(ReservationStatus::ReadyToPlay.as_str()));

        let reservation = diesel::update(target)
            .set((
                reservations::reservation_status.eq(ReservationStatus::Cancelled.as_str()),
                reservations::refund_value.eq(cancellation.refund_value),
                reservations::updated_at.eq(Some(Utc::now())),
            ))
            .get_result::<Reservation>(conn)
            .optional()?;

        Ok(reservation)
    }

    pub fn is_active(&self) -> bool {
        self.reservation_status == ReservationStatus::ReadyToPlay.as_str()
    }
}

impl NewReservation {
    pub fn ready_to_play(
        guest_id: Option<i64>,
        schedule_id: i64,
        value: i64,
        previous_reservation_id: Option<i64>,
    ) -> NewReservation {
        NewReservation {
            guest_id,
            schedule_id,
            value,
            reservation_status: ReservationStatus::ReadyToPlay.as_str().to_string(),
            refund_value: 0,
            previous_reservation_id,
        }
    }
}

impl Cancellation {
    /// Checks that the reservation can still be cancelled at `now`
    /// and works out how much of its value is refunded
    pub fn of(
        reservation: &Reservation,
        schedule: &Schedule,
        now: NaiveDateTime,
    ) -> Result<Cancellation, ServiceError> {
        if !reservation.is_active() {
            bad_request!("Cannot cancel/reschedule because it's not in ready to play status.");
        }

        let refund_value = refund::refund_value(reservation.value, schedule.start_date_time, now)?;

        Ok(Cancellation {
            reservation_id: reservation.id,
            refund_value,
        })
    }
}

impl ReservationDto {
    pub fn new(reservation: Reservation, schedule: &Schedule) -> ReservationDto {
        ReservationDto {
            id: reservation.id,
            guest_id: reservation.guest_id,
            schedule_id: reservation.schedule_id,
            schedule: schedule.into(),
            value: reservation.value,
            reservation_status: reservation.reservation_status,
            refund_value: reservation.refund_value,
            previous_reservation_id: reservation.previous_reservation_id,
        }
    }
}

impl crate::validator::Validate<CreateReservationRequest> for CreateReservationRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_id("scheduleId", self.schedule_id)?;
        if let Some(guest_id) = self.guest_id {
            validate_id("guestId", guest_id)?;
        }

        Ok(())
    }
}
