//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their JSON shape and register under the domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier.
    #[schema(example = 0)]
    id: i64,
    /// Display name.
    #[schema(example = "Ann")]
    name: String,
    /// Contact address.
    #[schema(example = "ann@x.com")]
    email: String,
    /// Free-text profession.
    #[schema(example = "Engineer")]
    profession: String,
}

/// OpenAPI schema for [`crate::domain::UserInput`].
///
/// Every field is optional on the wire; handlers reject payloads missing any
/// of `name`, `email`, or `profession`.
#[derive(ToSchema)]
#[schema(as = UserInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserInputSchema {
    /// Ignored on create; must reference an existing user on update.
    #[schema(example = 0)]
    id: Option<i64>,
    /// Display name; required.
    #[schema(example = "Ann")]
    name: Option<String>,
    /// Contact address; required.
    #[schema(example = "ann@x.com")]
    email: Option<String>,
    /// Free-text profession; required.
    #[schema(example = "Engineer")]
    profession: Option<String>,
}
