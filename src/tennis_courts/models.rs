use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::schedules::ScheduleDto;
use crate::schema::tennis_courts;
use crate::validator::validate_name;

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[table_name = "tennis_courts"]
pub struct TennisCourt {
    pub id: i64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[table_name = "tennis_courts"]
pub struct NewTennisCourt {
    pub name: String,
}

/// **POST /api/v1/courts**
///
/// ``` shell
/// curl --location --request POST 'http://localhost:8080/api/v1/courts' \
/// --header 'Content-Type: application/json' \
/// --data-raw '{ "name": "Court 1" }'
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TennisCourtRequest {
    pub name: String,
}

/// A tennis court, optionally with every schedule that can be booked on it
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisCourtDto {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tennis_court_schedules: Option<Vec<ScheduleDto>>,
}

impl TennisCourt {
    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<Option<TennisCourt>, ServiceError> {
        let court = tennis_courts::table
            .find(id)
            .first::<TennisCourt>(conn)
            .optional()?;

        Ok(court)
    }

    pub fn create(court: &NewTennisCourt, conn: &db::Conn) -> Result<TennisCourt, ServiceError> {
        let court = diesel::insert_into(tennis_courts::table)
            .values(court)
            .get_result::<TennisCourt>(conn)?;

        Ok(court)
    }
}

impl From<TennisCourtRequest> for NewTennisCourt {
    fn from(request: TennisCourtRequest) -> NewTennisCourt {
        NewTennisCourt {
            name: request.name.trim().to_string(),
        }
    }
}

impl TennisCourtDto {
    pub fn with_schedules(court: TennisCourt, schedules: Vec<ScheduleDto>) -> TennisCourtDto {
        TennisCourtDto {
            tennis_court_schedules: Some(schedules),
            ..court.into()
        }
    }
}

impl From<TennisCourt> for TennisCourtDto {
    fn from(court: TennisCourt) -> TennisCourtDto {
        TennisCourtDto {
            id: court.id,
            name: court.name,
            tennis_court_schedules: None,
        }
    }
}

impl crate::validator::Validate<TennisCourtRequest> for TennisCourtRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_name("name", &self.name)
    }
}
