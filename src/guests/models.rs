use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::schema::guests;
use crate::validator::validate_name;

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, AsChangeset)]
#[table_name = "guests"]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[table_name = "guests"]
pub struct NewGuest {
    pub name: String,
}

/// GuestRequest is what the client sends to create or rename a guest
///
/// **POST /api/v1/guests**
///
/// ``` shell
/// curl --location --request POST 'http://localhost:8080/api/v1/guests' \
/// --header 'Content-Type: application/json' \
/// --data-raw '{ "name": "Roger Federer" }'
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GuestRequest {
    pub name: String,
}

/// GuestFilter can be used to look up guests by their exact name
#[derive(Debug, Deserialize)]
pub struct GuestFilter {
    pub name: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub id: i64,
    pub name: String,
}

impl Guest {
    pub fn find_all(conn: &db::Conn) -> Result<Vec<Guest>, ServiceError> {
        let guests = guests::table.order(guests::id).load::<Guest>(conn)?;

        Ok(guests)
    }

    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<Option<Guest>, ServiceError> {
        let guest = guests::table.find(id).first::<Guest>(conn).optional()?;

        Ok(guest)
    }

    pub fn find_by_name(name: &str, conn: &db::Conn) -> Result<Vec<Guest>, ServiceError> {
        let guests = guests::table
            .filter(guests::name.eq(name))
            .order(guests::id)
            .load::<Guest>(conn)?;

        Ok(guests)
    }

    pub fn create(guest: &NewGuest, conn: &db::Conn) -> Result<Guest, ServiceError> {
        let guest = diesel::insert_into(guests::table)
            .values(guest)
            .get_result::<Guest>(conn)?;

        Ok(guest)
    }

    pub fn update(&self, conn: &db::Conn) -> Result<Guest, ServiceError> {
        let guest = diesel::update(self).set(self).get_result::<Guest>(conn)?;

        Ok(guest)
    }

    pub fn delete_by_id(id: i64, conn: &db::Conn) -> Result<(), ServiceError> {
        diesel::delete(guests::table.find(id)).execute(conn)?;

        Ok(())
    }
}

impl From<GuestRequest> for NewGuest {
    fn from(request: GuestRequest) -> NewGuest {
        NewGuest {
            name: request.name.trim().to_string(),
        }
    }
}

impl From<Guest> for GuestDto {
    fn from(guest: Guest) -> GuestDto {
        GuestDto {
            id: guest.id,
            name: guest.name,
        }
    }
}

impl crate::validator::Validate<GuestRequest> for GuestRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_name("name", &self.name)
    }
}
