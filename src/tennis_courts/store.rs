use crate::db::PgStore;
use crate::errors::ServiceError;
use crate::tennis_courts::{NewTennisCourt, TennisCourt};

/// Persistence operations for tennis courts
pub trait TennisCourtStore: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<TennisCourt>, ServiceError>;

    fn insert(&self, court: &NewTennisCourt) -> Result<TennisCourt, ServiceError>;
}

impl TennisCourtStore for PgStore {
    fn find_by_id(&self, id: i64) -> Result<Option<TennisCourt>, ServiceError> {
        TennisCourt::find_by_id(id, &*self.connection()?)
    }

    fn insert(&self, court: &NewTennisCourt) -> Result<TennisCourt, ServiceError> {
        TennisCourt::create(court, &*self.connection()?)
    }
}
