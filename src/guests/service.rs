use std::sync::Arc;

use crate::errors::ServiceError;
use crate::guests::{Guest, GuestDto, GuestRequest, GuestStore, NewGuest};

pub struct GuestService {
    guests: Arc<dyn GuestStore>,
}

impl GuestService {
    pub fn new(guests: Arc<dyn GuestStore>) -> Self {
        GuestService { guests }
    }

    #[tracing::instrument(name = "GuestService::get_all_guests", skip(self))]
    pub fn get_all_guests(&self) -> Result<Vec<GuestDto>, ServiceError> {
        let guests = self.guests.find_all()?;

        Ok(guests.into_iter().map(GuestDto::from).collect())
    }

    #[tracing::instrument(name = "GuestService::get_guest_by_id", skip(self))]
    pub fn get_guest_by_id(&self, id: i64) -> Result<GuestDto, ServiceError> {
        Ok(self.find_guest(id)?.into())
    }

    #[tracing::instrument(name = "GuestService::get_guests_by_name", skip(self))]
    pub fn get_guests_by_name(&self, name: &str) -> Result<Vec<GuestDto>, ServiceError> {
        let guests = self.guests.find_by_name(name)?;

        Ok(guests.into_iter().map(GuestDto::from).collect())
    }

    #[tracing::instrument(name = "GuestService::create_guest", skip(self))]
    pub fn create_guest(&self, request: GuestRequest) -> Result<GuestDto, ServiceError> {
        let guest = self.guests.insert(&NewGuest::from(request))?;
        debug!("created guest {}", guest.id);

        Ok(guest.into())
    }

    #[tracing::instrument(name = "GuestService::update_guest", skip(self))]
    pub fn update_guest(&self, id: i64, request: GuestRequest) -> Result<GuestDto, ServiceError> {
        let mut guest = self.find_guest(id)?;
        guest.name = NewGuest::from(request).name;

        Ok(self.guests.update(&guest)?.into())
    }

    #[tracing::instrument(name = "GuestService::delete_guest", skip(self))]
    pub fn delete_guest(&self, id: i64) -> Result<(), ServiceError> {
        self.find_guest(id)?;
        self.guests.delete(id)?;
        debug!("deleted guest {}", id);

        Ok(())
    }

    fn find_guest(&self, id: i64) -> Result<Guest, ServiceError> {
        match self.guests.find_by_id(id)? {
            Some(guest) => Ok(guest),
            None => not_found!(format!("Guest with id {} not found.", id)),
        }
    }
}
