//! Domain-level error types.
//!
//! Failures fall into two tiers. Domain errors are raised on purpose by the
//! request pipeline and carry a stable dotted code plus a client-facing
//! message. Every other failure (persistence, malformed payloads, identifier
//! exhaustion) collapses into [`ErrorCode::MalformedRequest`], whose message
//! is kept for logs only; adapters replace it with a fixed generic text.
//!
//! These errors are transport agnostic. The HTTP adapter decides status codes
//! and body shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Message returned when a submitted user payload fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Input data not valid..";
/// Message returned when a delete targets an unknown user.
pub const INVALID_USER_ID_MESSAGE: &str = "User to delete doesn't exist";
/// Message returned when a lookup targets an unknown user.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
/// Fixed client-facing message for every unexpected failure.
pub const MALFORMED_REQUEST_MESSAGE: &str =
    "The request could not be understood by the server due to malformed syntax.";

/// Stable machine-readable error code.
///
/// Serialises to the wire token clients match on, e.g. `INPUT.DATA.INVALID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The submitted user payload is incomplete, or an update names an
    /// identifier that does not exist.
    #[serde(rename = "INPUT.DATA.INVALID")]
    InvalidInput,
    /// A delete names an identifier that does not resolve to a user.
    #[serde(rename = "USER.ID.INVALID")]
    InvalidUserId,
    /// A lookup names an identifier that does not resolve to a user.
    #[serde(rename = "USER.NOT.FOUND")]
    UserNotFound,
    /// Anything not raised deliberately by the pipeline.
    #[serde(rename = "400")]
    MalformedRequest,
}

impl ErrorCode {
    /// Wire token for this code.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::InvalidUserId.as_str(), "USER.ID.INVALID");
    /// assert_eq!(ErrorCode::MalformedRequest.as_str(), "400");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INPUT.DATA.INVALID",
            Self::InvalidUserId => "USER.ID.INVALID",
            Self::UserNotFound => "USER.NOT.FOUND",
            Self::MalformedRequest => "400",
        }
    }

    /// Whether the code belongs to the deliberately raised domain tier.
    #[must_use]
    pub const fn is_domain(self) -> bool {
        !matches!(self, Self::MalformedRequest)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by the domain and translated by inbound adapters.
///
/// Construction captures the current [`TraceId`] when one is in scope.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_input();
/// assert_eq!(err.code(), ErrorCode::InvalidInput);
/// assert_eq!(err.message(), "Input data not valid..");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with an explicit code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// The submitted payload failed validation or referenced a missing user.
    #[must_use]
    pub fn invalid_input() -> Self {
        Self::new(ErrorCode::InvalidInput, INVALID_INPUT_MESSAGE)
    }

    /// A delete targeted an identifier with no stored user.
    #[must_use]
    pub fn invalid_user_id() -> Self {
        Self::new(ErrorCode::InvalidUserId, INVALID_USER_ID_MESSAGE)
    }

    /// A lookup targeted an identifier with no stored user.
    #[must_use]
    pub fn user_not_found() -> Self {
        Self::new(ErrorCode::UserNotFound, USER_NOT_FOUND_MESSAGE)
    }

    /// Wrap an unexpected failure. `detail` is for logs and never reaches
    /// clients.
    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedRequest, detail)
    }

    /// Attach a trace identifier explicitly.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message supplied at construction.
    ///
    /// For [`ErrorCode::MalformedRequest`] this is the internal detail, not
    /// the text clients see.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction, if any.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Message safe to return to clients.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::Error;
    ///
    /// let err = Error::unexpected("connection reset by peer");
    /// assert!(!err.public_message().contains("connection"));
    /// ```
    #[must_use]
    pub fn public_message(&self) -> &str {
        if self.code.is_domain() {
            self.message()
        } else {
            MALFORMED_REQUEST_MESSAGE
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
