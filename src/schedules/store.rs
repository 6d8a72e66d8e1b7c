use chrono::NaiveDateTime;

use crate::db::PgStore;
use crate::errors::ServiceError;
use crate::schedules::{NewSchedule, Schedule};

/// Persistence operations for schedules
pub trait ScheduleStore: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<Schedule>, ServiceError>;

    /// schedules whose window overlaps `[start, end]`, ordered by start time
    fn find_by_dates(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Schedule>, ServiceError>;

    /// schedules of a single court, ordered by start time
    fn find_by_tennis_court(&self, tennis_court_id: i64) -> Result<Vec<Schedule>, ServiceError>;

    fn insert(&self, schedule: &NewSchedule) -> Result<Schedule, ServiceError>;
}

impl ScheduleStore for PgStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Schedule>, ServiceError> {
        Schedule::find_by_id(id, &*self.connection()?)
    }

    fn find_by_dates(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Schedule>, ServiceError> {
        Schedule::find_by_dates(start, end, &*self.connection()?)
    }

    fn find_by_tennis_court(&self, tennis_court_id: i64) -> Result<Vec<Schedule>, ServiceError> {
        Schedule::find_by_tennis_court(tennis_court_id, &*self.connection()?)
    }

    fn insert(&self, schedule: &NewSchedule) -> Result<Schedule, ServiceError> {
        Schedule::create(schedule, &*self.connection()?)
    }
}
