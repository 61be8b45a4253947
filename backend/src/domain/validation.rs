//! Submitted user payloads and the required-field check.
//!
//! The same check guards create and update; update additionally needs the
//! referenced identifier to exist, which the HTTP adapter verifies through
//! the user service.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{UserDetails, UserId, UserValidationError};

/// User payload as submitted by clients.
///
/// Every field is optional on the wire. `id` is ignored on create and must
/// reference an existing record on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    /// Advisory identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text profession.
    #[serde(default)]
    pub profession: Option<String>,
}

impl UserInput {
    /// Build a payload with all three required fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        profession: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
            profession: Some(profession.into()),
        }
    }

    /// Set the advisory identifier.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Identifier referenced by the payload, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.id.map(UserId::new)
    }

    /// Convert into validated details, reporting the first missing field.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{UserInput, UserValidationError};
    ///
    /// let input = UserInput::new("Ann", "ann@x.com", "Engineer");
    /// assert!(input.to_details().is_ok());
    ///
    /// let blank = UserInput { profession: None, ..input };
    /// assert_eq!(blank.to_details(), Err(UserValidationError::EmptyProfession));
    /// ```
    pub fn to_details(&self) -> Result<UserDetails, UserValidationError> {
        UserDetails::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.profession.clone().unwrap_or_default(),
        )
    }
}

/// Check `input` and return its details when `name`, `email`, and
/// `profession` are all non-empty after trimming.
///
/// The outcome is logged once, with the rejection reason when there is one.
///
/// # Examples
/// ```
/// use user_service::domain::{UserInput, validated_details};
///
/// let details = validated_details(Some(&UserInput::new("Ann", "ann@x.com", "Engineer")));
/// assert_eq!(details.map(|d| d.name().to_owned()).as_deref(), Some("Ann"));
/// assert!(validated_details(None).is_none());
/// ```
pub fn validated_details(input: Option<&UserInput>) -> Option<UserDetails> {
    match input.map(UserInput::to_details) {
        Some(Ok(details)) => {
            debug!(is_valid = true, "user input validated");
            Some(details)
        }
        Some(Err(reason)) => {
            debug!(is_valid = false, %reason, "user input validated");
            None
        }
        None => {
            debug!(is_valid = false, "user input missing");
            None
        }
    }
}

/// Return `true` when `input` is present and `name`, `email`, and
/// `profession` are all non-empty after trimming.
///
/// # Examples
/// ```
/// use user_service::domain::{UserInput, validate};
///
/// assert!(validate(Some(&UserInput::new("Ann", "ann@x.com", "Engineer"))));
/// assert!(!validate(Some(&UserInput::new("", "a@x.com", "Eng"))));
/// assert!(!validate(None));
/// ```
#[must_use]
pub fn validate(input: Option<&UserInput>) -> bool {
    validated_details(input).is_some()
}
