//! Request validation
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. path identifier present and not blank
//! 2. request body present and not blank
//! 3. body parses into a [`UserPayload`]
//! 4. name
//! 5. email
//! 6. role
//!
//! Step 1 is run by the handlers against the path parameter; this module
//! composes steps 2 to 6.

pub mod validators;

use crate::core::error::ValidationError;
use crate::core::model::{User, UserPayload};
pub use validators::{is_valid_email, is_valid_role, require_body, require_id};

/// Run steps 4 to 6 and stamp `id` onto the result
///
/// Any identifier carried in the payload is ignored.
pub fn validate_user(id: &str, payload: &UserPayload) -> Result<User, ValidationError> {
    let name = validators::require_name(payload.name.as_deref())?;
    let email = validators::require_email(payload.email.as_deref())?;
    let role = validators::require_role(payload.role.as_deref())?;

    Ok(User::new(id, name, email, role))
}

/// Run steps 2 to 6 against a raw request body
pub fn user_from_body(id: &str, body: &[u8]) -> Result<User, ValidationError> {
    let text = validators::require_body(body)?;
    let payload = validators::parse_user_payload(text)?;
    validate_user(id, &payload)
}
