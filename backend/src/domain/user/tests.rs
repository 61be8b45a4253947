//! Tests for the user data model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn ann() -> User {
    User::try_from_parts(0, "Ann", "ann@x.com", "Engineer").expect("valid user")
}

#[rstest]
#[case("", "ann@x.com", "Engineer", UserValidationError::EmptyName)]
#[case("Ann", "", "Engineer", UserValidationError::EmptyEmail)]
#[case("Ann", "ann@x.com", "", UserValidationError::EmptyProfession)]
#[case("  \t", "ann@x.com", "Engineer", UserValidationError::EmptyName)]
#[case("Ann", "ann@x.com", "\n", UserValidationError::EmptyProfession)]
fn details_reject_blank_fields(
    #[case] name: &str,
    #[case] email: &str,
    #[case] profession: &str,
    #[case] expected: UserValidationError,
) {
    let err = UserDetails::new(name, email, profession).expect_err("blank field");
    assert_eq!(err, expected);
}

#[rstest]
fn details_keep_values_verbatim() {
    let details = UserDetails::new(" Ann ", "not-an-email", "Engineer").expect("valid");
    assert_eq!(details.name(), " Ann ");
    assert_eq!(details.email(), "not-an-email");
}

#[rstest]
fn serialises_with_flat_fields(ann: User) {
    let value = serde_json::to_value(&ann).expect("serialise user");
    assert_eq!(
        value,
        json!({"id": 0, "name": "Ann", "email": "ann@x.com", "profession": "Engineer"})
    );
}

#[rstest]
fn deserialisation_enforces_invariants() {
    let payload = json!({"id": 3, "name": "Bo", "email": " ", "profession": "Chef"});
    let result: Result<User, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialises_valid_payload(ann: User) {
    let payload: Value =
        json!({"id": 0, "name": "Ann", "email": "ann@x.com", "profession": "Engineer"});
    let user: User = serde_json::from_value(payload).expect("valid payload");
    assert_eq!(user, ann);
}

#[rstest]
fn display_lists_every_field(ann: User) {
    assert_eq!(
        ann.to_string(),
        "User{id: 0, name: Ann, email: ann@x.com, profession: Engineer}"
    );
}

#[rstest]
fn user_ids_order_numerically() {
    assert!(UserId::new(2) < UserId::new(10));
    assert_eq!(UserId::from(7).get(), 7);
}
