// src/handlers/mod.rs

pub mod artifacts;
pub mod chat;
pub mod courses;
pub mod discovery;
pub mod health;
pub mod notes;
pub mod quiz;
pub mod results;
pub mod users;

use crate::{error::AppError, models::quiz_result::IDENTIFIER_REGEX};

/// Rejects path identifiers that could not have been stored.
pub(crate) fn check_identifier(kind: &str, value: &str) -> Result<(), AppError> {
    if IDENTIFIER_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("Invalid {}: '{}'", kind, value)))
    }
}
