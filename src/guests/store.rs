use crate::db::PgStore;
use crate::errors::ServiceError;
use crate::guests::{Guest, NewGuest};

/// Persistence operations for guests
pub trait GuestStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<Guest>, ServiceError>;

    fn find_by_id(&self, id: i64) -> Result<Option<Guest>, ServiceError>;

    /// exact match on the guest name
    fn find_by_name(&self, name: &str) -> Result<Vec<Guest>, ServiceError>;

    fn insert(&self, guest: &NewGuest) -> Result<Guest, ServiceError>;

    fn update(&self, guest: &Guest) -> Result<Guest, ServiceError>;

    fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

impl GuestStore for PgStore {
    fn find_all(&self) -> Result<Vec<Guest>, ServiceError> {
        Guest::find_all(&*self.connection()?)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Guest>, ServiceError> {
        Guest::find_by_id(id, &*self.connection()?)
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Guest>, ServiceError> {
        Guest::find_by_name(name, &*self.connection()?)
    }

    fn insert(&self, guest: &NewGuest) -> Result<Guest, ServiceError> {
        Guest::create(guest, &*self.connection()?)
    }

    fn update(&self, guest: &Guest) -> Result<Guest, ServiceError> {
        guest.update(&*self.connection()?)
    }

    fn delete(&self, id: i64) -> Result<(), ServiceError> {
        Guest::delete_by_id(id, &*self.connection()?)
    }
}
