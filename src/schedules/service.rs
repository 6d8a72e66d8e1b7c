use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::errors::ServiceError;
use crate::schedules::{CreateScheduleRequest, NewSchedule, ScheduleDto, ScheduleStore};
use crate::tennis_courts::TennisCourtStore;

/// Schedules are always bound to a tennis court, which is looked up
/// directly in the court store.
pub struct ScheduleService {
    schedules: Arc<dyn ScheduleStore>,
    tennis_courts: Arc<dyn TennisCourtStore>,
}

impl ScheduleService {
    pub fn new(
        schedules: Arc<dyn ScheduleStore>,
        tennis_courts: Arc<dyn TennisCourtStore>,
    ) -> Self {
        ScheduleService {
            schedules,
            tennis_courts,
        }
    }

    #[tracing::instrument(name = "ScheduleService::add_schedule", skip(self))]
    pub fn add_schedule(
        &self,
        tennis_court_id: i64,
        request: CreateScheduleRequest,
    ) -> Result<ScheduleDto, ServiceError> {
        self.ensure_tennis_court_exists(tennis_court_id)?;

        let schedule = self.schedules.insert(&NewSchedule::starting_at(
            tennis_court_id,
            request.start_date_time,
        ))?;
        info!(
            "added schedule {} at {} on tennis court {}",
            schedule.id, schedule.start_date_time, tennis_court_id
        );

        Ok(schedule.into())
    }

    #[tracing::instrument(name = "ScheduleService::find_schedules_by_dates", skip(self))]
    pub fn find_schedules_by_dates(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<ScheduleDto>, ServiceError> {
        let schedules = self.schedules.find_by_dates(start, end)?;

        Ok(schedules.into_iter().map(ScheduleDto::from).collect())
    }

    #[tracing::instrument(name = "ScheduleService::find_schedule", skip(self))]
    pub fn find_schedule(&self, id: i64) -> Result<ScheduleDto, ServiceError> {
        match self.schedules.find_by_id(id)? {
            Some(schedule) => Ok(schedule.into()),
            None => not_found!(format!("Schedule with id {} not found.", id)),
        }
    }

    #[tracing::instrument(name = "ScheduleService::find_schedules_by_tennis_court_id", skip(self))]
    pub fn find_schedules_by_tennis_court_id(
        &self,
        tennis_court_id: i64,
    ) -> Result<Vec<ScheduleDto>, ServiceError> {
        self.ensure_tennis_court_exists(tennis_court_id)?;

        let schedules = self.schedules.find_by_tennis_court(tennis_court_id)?;

        Ok(schedules.into_iter().map(ScheduleDto::from).collect())
    }

    fn ensure_tennis_court_exists(&self, tennis_court_id: i64) -> Result<(), ServiceError> {
        if self.tennis_courts.find_by_id(tennis_court_id)?.is_none() {
            not_found!(format!(
                "Tennis Court with id {} not found.",
                tennis_court_id
            ));
        }

        Ok(())
    }
}
