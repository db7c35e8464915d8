//! Tests for the domain user model.

use super::*;
use crate::domain::PlainPassword;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn ada() -> User {
    User::new(UserParts {
        id: UserId::new(VALID_ID).expect("valid id"),
        username: Username::new("ada").expect("valid username"),
        password_hash: PasswordHash::from_password(&PlainPassword::new("pw")).expect("hash"),
        image_url: Some("https://example.com/ada.png".to_owned()),
        bio: None,
    })
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_serialises_as_string() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(serde_json::to_value(id).expect("serialise"), json!(VALID_ID));
}

#[rstest]
#[case("", UserValidationError::EmptyUsername)]
#[case("   ", UserValidationError::EmptyUsername)]
fn username_rejects_blank(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_enforces_column_width() {
    let at_limit = "a".repeat(USERNAME_MAX);
    assert!(Username::new(&at_limit).is_ok());
    let over = "a".repeat(USERNAME_MAX + 1);
    assert_eq!(
        Username::new(over),
        Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX })
    );
}

#[rstest]
fn profile_field_enforces_column_width() {
    let over = "b".repeat(PROFILE_FIELD_MAX + 1);
    assert!(matches!(
        profile_field("bio", Some(over)),
        Err(UserValidationError::ProfileFieldTooLong { field: "bio", .. })
    ));
    assert_eq!(profile_field("bio", None), Ok(None));
}

#[rstest]
fn profile_exposes_public_fields_only(ada: User) {
    let value: Value = serde_json::to_value(ada.profile()).expect("serialise profile");
    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "username": "ada",
            "image_url": "https://example.com/ada.png",
            "bio": null,
        })
    );
}
