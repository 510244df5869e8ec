//! Reusable field validators
//!
//! Each validator is a pure function returning the checked value or the
//! [`ValidationError`] for that step. Blank means empty after trimming.

use crate::core::error::ValidationError;
use crate::core::model::{Role, UserPayload};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validator: path identifier is present and not blank
pub fn require_id<'a>(
    entity: &'static str,
    id: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match id {
        Some(id) if !is_blank(id) => Ok(id),
        _ => Err(ValidationError::MissingId { entity }),
    }
}

/// Validator: request body is present and not blank
pub fn require_body(body: &[u8]) -> Result<&str, ValidationError> {
    // A body that is not UTF-8 cannot be JSON either
    let text = std::str::from_utf8(body).map_err(|_| ValidationError::InvalidPayload)?;
    if is_blank(text) {
        Err(ValidationError::MissingBody)
    } else {
        Ok(text)
    }
}

/// Validator: body parses into a user payload (a literal `null` does not)
pub fn parse_user_payload(body: &str) -> Result<UserPayload, ValidationError> {
    serde_json::from_str::<Option<UserPayload>>(body)
        .ok()
        .flatten()
        .ok_or(ValidationError::InvalidPayload)
}

/// Validator: name is present and not blank
pub fn require_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name {
        Some(name) if !is_blank(name) => Ok(name),
        _ => Err(ValidationError::MissingName),
    }
}

/// Validator: email is present, not blank, and looks like an email
pub fn require_email(email: Option<&str>) -> Result<&str, ValidationError> {
    match email {
        Some(email) if !is_blank(email) => {
            if is_valid_email(email) {
                Ok(email)
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        _ => Err(ValidationError::MissingEmail),
    }
}

/// Validator: role is present, not blank, and one of the allowed roles
pub fn require_role(role: Option<&str>) -> Result<Role, ValidationError> {
    match role {
        Some(role) if !is_blank(role) => role.parse().map_err(|_| ValidationError::InvalidRole),
        _ => Err(ValidationError::MissingRole),
    }
}

/// Substring check only: the address must contain both `@` and `.`
pub fn is_valid_email(email: &str) -> bool {
    !is_blank(email) && email.contains('@') && email.contains('.')
}

/// Exact, case-sensitive membership in the role set
pub fn is_valid_role(role: &str) -> bool {
    role.parse::<Role>().is_ok()
}
