//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned when building [`UserDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// `name` is absent or blank.
    #[error("name must not be empty")]
    EmptyName,
    /// `email` is absent or blank.
    #[error("email must not be empty")]
    EmptyEmail,
    /// `profession` is absent or blank.
    #[error("profession must not be empty")]
    EmptyProfession,
}

/// Server-assigned user identifier.
///
/// Identifiers are issued by an [`IdGenerator`](super::ports::IdGenerator)
/// and never change once a record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three required descriptive fields of a user.
///
/// ## Invariants
/// - `name`, `email`, and `profession` are non-empty once trimmed.
/// - Values are stored exactly as submitted; no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    name: String,
    email: String,
    profession: String,
}

fn require(value: String, error: UserValidationError) -> Result<String, UserValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(value)
    }
}

impl UserDetails {
    /// Validate and construct user details.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{UserDetails, UserValidationError};
    ///
    /// let details = UserDetails::new("Ann", "ann@x.com", "Engineer").expect("valid");
    /// assert_eq!(details.name(), "Ann");
    ///
    /// let err = UserDetails::new("Ann", "   ", "Engineer").unwrap_err();
    /// assert_eq!(err, UserValidationError::EmptyEmail);
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        profession: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: require(name.into(), UserValidationError::EmptyName)?,
            email: require(email.into(), UserValidationError::EmptyEmail)?,
            profession: require(profession.into(), UserValidationError::EmptyProfession)?,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address. Format is not checked.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Free-text profession.
    #[must_use]
    pub fn profession(&self) -> &str {
        self.profession.as_str()
    }
}

/// Persisted user record.
///
/// Serialises as `{"id":0,"name":"…","email":"…","profession":"…"}`.
///
/// ## Invariants
/// - Every `User` carries an identifier.
/// - Details always satisfy the [`UserDetails`] invariants, including when
///   deserialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    details: UserDetails,
}

impl User {
    /// Build a user from an identifier and validated details.
    #[must_use]
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    /// Fallible constructor from raw parts, used by persistence adapters.
    pub fn try_from_parts(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        profession: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let details = UserDetails::new(name, email, profession)?;
        Ok(Self::new(UserId::new(id), details))
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Validated descriptive fields.
    #[must_use]
    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.details.email()
    }

    /// Free-text profession.
    #[must_use]
    pub fn profession(&self) -> &str {
        self.details.profession()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User{{id: {}, name: {}, email: {}, profession: {}}}",
            self.id,
            self.name(),
            self.email(),
            self.profession()
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    email: String,
    profession: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, details } = value;
        let UserDetails {
            name,
            email,
            profession,
        } = details;
        Self {
            id: id.get(),
            name,
            email,
            profession,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.name, value.email, value.profession)
    }
}

#[cfg(test)]
mod tests;
