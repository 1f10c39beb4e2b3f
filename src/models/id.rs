use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const ID_LEN: usize = 24;

/// Identifiers are 24 hexadecimal characters.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_id");
        err.message = Some(format!("expected {ID_LEN} hexadecimal characters").into());
        Err(err)
    }
}

/// `{id}` path segment of the detail endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct IdPath {
    #[validate(custom(function = "validate_id"))]
    pub id: String,
}

impl IdPath {
    /// Stored ids are lowercase; hex digits compare case-insensitively.
    pub fn normalized(&self) -> String {
        self.id.to_ascii_lowercase()
    }
}
