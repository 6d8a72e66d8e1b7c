use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Deserializer};

use crate::db;
use crate::errors::ServiceError;
use crate::schema::schedules;
use crate::validator::validate_id;

/// every schedule is a one hour slot
pub const SCHEDULE_DURATION_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[table_name = "schedules"]
pub struct Schedule {
    pub id: i64,
    pub tennis_court_id: i64,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[table_name = "schedules"]
pub struct NewSchedule {
    pub tennis_court_id: i64,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
}

/// Create a bookable slot on an existing tennis court
///
/// **POST /api/v1/schedules**
///
/// ``` shell
/// curl --location --request POST 'http://localhost:8080/api/v1/schedules' \
/// --header 'Content-Type: application/json' \
/// --data-raw '{ "tennisCourtId": 1, "startDateTime": "2024-01-01T10:00" }'
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub tennis_court_id: i64,
    #[serde(alias = "start", deserialize_with = "deserialize_date_time")]
    pub start_date_time: NaiveDateTime,
}

/// ScheduleFilter lists the schedules between two days, or the schedules of a court
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tennis_court_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: i64,
    pub tennis_court_id: i64,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
}

impl Schedule {
    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<Option<Schedule>, ServiceError> {
        let schedule = schedules::table
            .find(id)
            .first::<Schedule>(conn)
            .optional()?;

        Ok(schedule)
    }

    /// Load a schedule and lock its row until the surrounding transaction ends
    pub fn lock(id: i64, conn: &db::Conn) -> Result<Option<Schedule>, ServiceError> {
        let schedule = schedules::table
            .find(id)
            .for_update()
            .get_result::<Schedule>(conn)
            .optional()?;

        Ok(schedule)
    }

    /// schedules overlapping the inclusive range
    pub fn find_by_dates(
        start: NaiveDateTime,
        end: NaiveDateTime,
        conn: &db::Conn,
    ) -> Result<Vec<Schedule>, ServiceError> {
        let schedules = schedules::table
            .filter(schedules::start_date_time.le(end))
            .filter(schedules::end_date_time.ge(start))
            .order((schedules::start_date_time, schedules::id))
            .load::<Schedule>(conn)?;

        Ok(schedules)
    }

    pub fn find_by_tennis_court(
        tennis_court_id: i64,
        conn: &db::Conn,
    ) -> Result<Vec<Schedule>, ServiceError> {
        let schedules = schedules::table
            .filter(schedules::tennis_court_id.eq(tennis_court_id))
            .order((schedules::start_date_time, schedules::id))
            .load::<Schedule>(conn)?;

        Ok(schedules)
    }

    pub fn create(schedule: &NewSchedule, conn: &db::Conn) -> Result<Schedule, ServiceError> {
        let schedule = diesel::insert_into(schedules::table)
            .values(schedule)
            .get_result::<Schedule>(conn)?;

        Ok(schedule)
    }

    /// true when the window of this schedule touches the inclusive range
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_date_time <= end && self.end_date_time >= start
    }

    pub fn has_started(&self, now: NaiveDateTime) -> bool {
        self.start_date_time <= now
    }
}

impl NewSchedule {
    pub fn starting_at(tennis_court_id: i64, start_date_time: NaiveDateTime) -> NewSchedule {
        NewSchedule {
            tennis_court_id,
            start_date_time,
            end_date_time: start_date_time + Duration::minutes(SCHEDULE_DURATION_MINUTES),
        }
    }
}

impl ScheduleFilter {
    /// Turns the requested days into a range from the start of the first day
    /// until the end of the last day
    pub fn date_range(&self) -> Result<(NaiveDateTime, NaiveDateTime), ServiceError> {
        let (start_date, end_date) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => bad_request!("startDate and endDate are required"),
        };

        if start_date > end_date {
            bad_request!("startDate can't be after endDate");
        }

        match (
            start_date.and_hms_opt(0, 0, 0),
            end_date.and_hms_opt(23, 59, 59),
        ) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => bad_request!("invalid date range"),
        }
    }
}

impl From<Schedule> for ScheduleDto {
    fn from(schedule: Schedule) -> ScheduleDto {
        ScheduleDto {
            id: schedule.id,
            tennis_court_id: schedule.tennis_court_id,
            start_date_time: schedule.start_date_time,
            end_date_time: schedule.end_date_time,
        }
    }
}

impl From<&Schedule> for ScheduleDto {
    fn from(schedule: &Schedule) -> ScheduleDto {
        schedule.clone().into()
    }
}

impl crate::validator::Validate<CreateScheduleRequest> for CreateScheduleRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_id("tennisCourtId", self.tennis_court_id)
    }
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// accepts timestamps with or without seconds, `2024-01-01T10:00` is a valid start
fn deserialize_date_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&value, format).ok())
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid date time '{}', expected YYYY-MM-DDTHH:MM[:SS]",
                value
            ))
        })
}
