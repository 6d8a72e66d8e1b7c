//! In memory stores and fixtures for the unit and route tests

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use actix_web::web::Data;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

use crate::db::PgStore;
use crate::errors::ServiceError;
use crate::guests::{Guest, GuestStore, NewGuest};
use crate::reservations::models::{already_booked, ReservationStatus};
use crate::reservations::store::not_ready_to_play;
use crate::reservations::{Cancellation, NewReservation, Reservation, ReservationStore};
use crate::schedules::{NewSchedule, Schedule, ScheduleStore};
use crate::server::State;
use crate::tennis_courts::{NewTennisCourt, TennisCourt, TennisCourtStore};

#[derive(Default)]
struct Tables {
    sequence: i64,
    guests: Vec<Guest>,
    tennis_courts: Vec<TennisCourt>,
    schedules: Vec<Schedule>,
    reservations: Vec<Reservation>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    fn active_reservation(&self, schedule_id: i64) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.schedule_id == schedule_id && reservation.is_active())
    }

    fn book(&mut self, new: &NewReservation) -> Result<Reservation, ServiceError> {
        if !self.schedules.iter().any(|s| s.id == new.schedule_id) {
            bad_request!(format!("Schedule with id {} not found.", new.schedule_id));
        }
        if self.active_reservation(new.schedule_id).is_some() {
            return Err(already_booked(new.schedule_id));
        }

        let reservation = Reservation {
            id: self.next_id(),
            guest_id: new.guest_id,
            schedule_id: new.schedule_id,
            value: new.value,
            reservation_status: new.reservation_status.clone(),
            refund_value: new.refund_value,
            previous_reservation_id: new.previous_reservation_id,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.reservations.push(reservation.clone());

        Ok(reservation)
    }

    fn cancel(&mut self, cancellation: &Cancellation) -> Result<Reservation, ServiceError> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == cancellation.reservation_id && r.is_active())
            .ok_or_else(not_ready_to_play)?;

        reservation.reservation_status = ReservationStatus::Cancelled.as_str().to_string();
        reservation.refund_value = cancellation.refund_value;
        reservation.updated_at = Some(Utc::now());

        Ok(reservation.clone())
    }
}

/// MemoryStore keeps every table in a vector behind a single lock,
/// holding the lock makes book and reschedule atomic
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::default())
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

impl GuestStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<Guest>, ServiceError> {
        Ok(self.tables().guests.clone())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Guest>, ServiceError> {
        Ok(self.tables().guests.iter().find(|g| g.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Guest>, ServiceError> {
        Ok(self
            .tables()
            .guests
            .iter()
            .filter(|g| g.name == name)
            .cloned()
            .collect())
    }

    fn insert(&self, guest: &NewGuest) -> Result<Guest, ServiceError> {
        let mut tables = self.tables();
        let guest = Guest {
            id: tables.next_id(),
            name: guest.name.clone(),
            created_at: Some(Utc::now()),
        };
        tables.guests.push(guest.clone());

        Ok(guest)
    }

    fn update(&self, guest: &Guest) -> Result<Guest, ServiceError> {
        let mut tables = self.tables();
        match tables.guests.iter_mut().find(|g| g.id == guest.id) {
            Some(stored) => {
                *stored = guest.clone();
                Ok(guest.clone())
            }
            None => not_found!("Not Found"),
        }
    }

    fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut tables = self.tables();
        tables.guests.retain(|g| g.id != id);
        for reservation in tables.reservations.iter_mut() {
            if reservation.guest_id == Some(id) {
                reservation.guest_id = None;
            }
        }

        Ok(())
    }
}

impl TennisCourtStore for MemoryStore {
    fn find_by_id(&self, id: i64) -> Result<Option<TennisCourt>, ServiceError> {
        Ok(self
            .tables()
            .tennis_courts
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn insert(&self, court: &NewTennisCourt) -> Result<TennisCourt, ServiceError> {
        let mut tables = self.tables();
        let court = TennisCourt {
            id: tables.next_id(),
            name: court.name.clone(),
            created_at: Some(Utc::now()),
        };
        tables.tennis_courts.push(court.clone());

        Ok(court)
    }
}

impl ScheduleStore for MemoryStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Schedule>, ServiceError> {
        Ok(self.tables().schedules.iter().find(|s| s.id == id).cloned())
    }

    fn find_by_dates(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Schedule>, ServiceError> {
        let mut schedules: Vec<Schedule> = self
            .tables()
            .schedules
            .iter()
            .filter(|s| s.overlaps(start, end))
            .cloned()
            .collect();
        schedules.sort_by_key(|s| (s.start_date_time, s.id));

        Ok(schedules)
    }

    fn find_by_tennis_court(&self, tennis_court_id: i64) -> Result<Vec<Schedule>, ServiceError> {
        let mut schedules: Vec<Schedule> = self
            .tables()
            .schedules
            .iter()
            .filter(|s| s.tennis_court_id == tennis_court_id)
            .cloned()
            .collect();
        schedules.sort_by_key(|s| (s.start_date_time, s.id));

        Ok(schedules)
    }

    fn insert(&self, schedule: &NewSchedule) -> Result<Schedule, ServiceError> {
        let mut tables = self.tables();
        let schedule = Schedule {
            id: tables.next_id(),
            tennis_court_id: schedule.tennis_court_id,
            start_date_time: schedule.start_date_time,
            end_date_time: schedule.end_date_time,
            created_at: Some(Utc::now()),
        };
        tables.schedules.push(schedule.clone());

        Ok(schedule)
    }
}

impl ReservationStore for MemoryStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, ServiceError> {
        Ok(self
            .tables()
            .reservations
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    fn find_active_by_schedule(
        &self,
        schedule_id: i64,
    ) -> Result<Option<Reservation>, ServiceError> {
        Ok(self.tables().active_reservation(schedule_id).cloned())
    }

    fn book(&self, reservation: &NewReservation) -> Result<Reservation, ServiceError> {
        self.tables().book(reservation)
    }

    fn cancel(&self, cancellation: &Cancellation) -> Result<Reservation, ServiceError> {
        self.tables().cancel(cancellation)
    }

    fn reschedule(
        &self,
        cancellation: &Cancellation,
        reservation: &NewReservation,
    ) -> Result<Reservation, ServiceError> {
        let mut tables = self.tables();
        let rollback = tables.reservations.clone();

        let rescheduled = tables
            .cancel(cancellation)
            .and_then(|_| tables.book(reservation));
        if rescheduled.is_err() {
            tables.reservations = rollback;
        }

        rescheduled
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap()
}

pub fn add_guest(store: &Arc<MemoryStore>, name: &str) -> Guest {
    GuestStore::insert(
        store.as_ref(),
        &NewGuest {
            name: name.to_string(),
        },
    )
    .unwrap()
}

pub fn add_court(store: &Arc<MemoryStore>, name: &str) -> TennisCourt {
    TennisCourtStore::insert(
        store.as_ref(),
        &NewTennisCourt {
            name: name.to_string(),
        },
    )
    .unwrap()
}

pub fn add_schedule(store: &Arc<MemoryStore>, tennis_court_id: i64, start: NaiveDateTime) -> Schedule {
    ScheduleStore::insert(store.as_ref(), &NewSchedule::starting_at(tennis_court_id, start))
        .unwrap()
}

pub fn state() -> Data<State> {
    state_with(MemoryStore::new())
}

pub fn state_with(store: Arc<MemoryStore>) -> Data<State> {
    Data::new(State::new(store, 1000))
}

/// A postgres store whose pool can never hand out a connection
pub fn unreachable_pg_store() -> PgStore {
    let manager =
        ConnectionManager::<PgConnection>::new("postgres://tenniscourts@127.0.0.1:1/none");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_millis(200))
        .build_unchecked(manager);

    PgStore::new(pool)
}
