//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers turn
//! failures into the `{success:false, errorCode, message}` body. Domain codes
//! all answer 404, which existing clients depend on; every other failure
//! answers 400 with a fixed message.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Wire token such as `INPUT.DATA.INVALID`, or `"400"`.
    #[schema(example = "INPUT.DATA.INVALID")]
    pub error_code: String,
    /// Client-facing description.
    #[schema(example = "Input data not valid..")]
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            success: false,
            error_code: error.code().as_str().to_owned(),
            message: error.public_message().to_owned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    if code.is_domain() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Translate a failure into its HTTP response, logging it once.
pub fn error_response_for(error: &Error) -> HttpResponse {
    let status = status_for(error.code());
    if error.code().is_domain() {
        warn!(
            code = %error.code(),
            message = error.message(),
            trace_id = error.trace_id(),
            "request rejected"
        );
    } else {
        error!(
            detail = error.message(),
            trace_id = error.trace_id(),
            "request failed"
        );
    }

    let mut builder = HttpResponse::build(status);
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    builder.json(ErrorResponse::from(error))
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        error_response_for(self)
    }
}

/// JSON extractor configuration routing body errors to the generic tier.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        Error::unexpected(format!("invalid JSON body: {err}")).into()
    })
}

/// Path extractor configuration routing unparsable segments to the generic
/// tier.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        Error::unexpected(format!("invalid path parameter: {err}")).into()
    })
}
