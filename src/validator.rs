use crate::errors::ServiceError;
use serde::de::DeserializeOwned;

/// maximum length of a guest or tennis court name, matches the VARCHAR columns
pub const MAX_NAME_LENGTH: usize = 255;

/// Wraps a request body so it can only be unwrapped after it was validated
///
/// ``` ignore
/// let request: Json<Validator<GuestRequest>> = ...;
/// let guest = request.into_inner().validate()?;
/// ```
#[derive(Deserialize)]
#[serde(transparent)]
pub struct Validator<T>(T);

pub trait Validate<T> {
    fn validate(&self) -> Result<(), ServiceError>;
}

impl<T> Validator<T> {
    #[allow(dead_code)]
    pub fn new(i: T) -> Validator<T> {
        Validator::<T>(i)
    }
}

impl<T> Validator<T>
where
    T: Validate<T>,
    T: DeserializeOwned,
{
    pub fn validate(self) -> Result<T, ServiceError> {
        self.0.validate()?;
        Ok(self.0)
    }
}

/// a name is required, can't be blank and should fit in the database
pub fn validate_name(field: &str, name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        bad_request!(format!("{} is required", field));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        bad_request!(format!(
            "{} is too long, maximum {} characters",
            field, MAX_NAME_LENGTH
        ));
    }

    Ok(())
}

/// store assigned ids always start at 1
pub fn validate_id(field: &str, id: i64) -> Result<(), ServiceError> {
    if id <= 0 {
        bad_request!(format!("{} should be a positive number", field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    impl Validate<Named> for Named {
        fn validate(&self) -> Result<(), ServiceError> {
            validate_name("name", &self.name)
        }
    }

    #[test]
    fn invalid_value() {
        let invalid = Validator::new(Named {
            name: String::from("   "),
        });

        assert!(invalid.validate().is_err());
    }

    #[test]
    fn valid_value() {
        let valid = Validator::new(Named {
            name: String::from("Court 1"),
        });

        assert_eq!(valid.validate().unwrap().name, "Court 1");
    }

    #[test]
    fn deserializes_transparently() {
        let wrapped: Validator<Named> = serde_json::from_str(r#"{"name":"Roger"}"#).unwrap();

        assert!(wrapped.validate().is_ok());
    }

    #[test]
    fn name_too_long() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);

        assert!(validate_name("name", &name).is_err());
        assert!(validate_name("name", &name[1..]).is_ok());
    }

    #[test]
    fn ids_are_positive() {
        assert!(validate_id("scheduleId", 0).is_err());
        assert!(validate_id("scheduleId", -4).is_err());
        assert!(validate_id("scheduleId", 1).is_ok());
    }
}
