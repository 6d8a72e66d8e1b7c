use std::sync::Arc;

use crate::errors::ServiceError;
use crate::schedules::{ScheduleDto, ScheduleStore};
use crate::tennis_courts::{
    NewTennisCourt, TennisCourt, TennisCourtDto, TennisCourtRequest, TennisCourtStore,
};

pub struct TennisCourtService {
    tennis_courts: Arc<dyn TennisCourtStore>,
    schedules: Arc<dyn ScheduleStore>,
}

impl TennisCourtService {
    pub fn new(
        tennis_courts: Arc<dyn TennisCourtStore>,
        schedules: Arc<dyn ScheduleStore>,
    ) -> Self {
        TennisCourtService {
            tennis_courts,
            schedules,
        }
    }

    #[tracing::instrument(name = "TennisCourtService::add_tennis_court", skip(self))]
    pub fn add_tennis_court(
        &self,
        request: TennisCourtRequest,
    ) -> Result<TennisCourtDto, ServiceError> {
        let court = self.tennis_courts.insert(&NewTennisCourt::from(request))?;
        info!("added tennis court {} ({})", court.id, court.name);

        Ok(court.into())
    }

    #[tracing::instrument(name = "TennisCourtService::find_tennis_court_by_id", skip(self))]
    pub fn find_tennis_court_by_id(&self, id: i64) -> Result<TennisCourtDto, ServiceError> {
        Ok(self.find_tennis_court(id)?.into())
    }

    /// same as `find_tennis_court_by_id`, with the schedules of the court ordered by start time
    #[tracing::instrument(
        name = "TennisCourtService::find_tennis_court_with_schedules_by_id",
        skip(self)
    )]
    pub fn find_tennis_court_with_schedules_by_id(
        &self,
        id: i64,
    ) -> Result<TennisCourtDto, ServiceError> {
        let court = self.find_tennis_court(id)?;
        let schedules = self
            .schedules
            .find_by_tennis_court(court.id)?
            .into_iter()
            .map(ScheduleDto::from)
            .collect();

        Ok(TennisCourtDto::with_schedules(court, schedules))
    }

    fn find_tennis_court(&self, id: i64) -> Result<TennisCourt, ServiceError> {
        match self.tennis_courts.find_by_id(id)? {
            Some(court) => Ok(court),
            None => not_found!(format!("Tennis Court with id {} not found.", id)),
        }
    }
}
