//! Tests for the account service.

use std::sync::{Arc, Mutex};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserRepository;
use crate::domain::{Username, UserParts};
use rstest::rstest;

fn make_service(repo: MockUserRepository) -> UserAccountService<MockUserRepository> {
    UserAccountService::new(Arc::new(repo))
}

fn stored_user(username: &str, password: &str) -> User {
    User::new(UserParts {
        id: UserId::random(),
        username: Username::new(username).expect("valid username"),
        password_hash: PasswordHash::from_password(&PlainPassword::new(password))
            .expect("hash password"),
        image_url: None,
        bio: Some("Bakes bread.".to_owned()),
    })
}

#[tokio::test]
async fn sign_up_hashes_password_before_insert() {
    let captured: Arc<Mutex<Option<User>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);
    let mut repo = MockUserRepository::new();
    repo.expect_insert().times(1).returning(move |user| {
        *sink.lock().expect("capture lock") = Some(user.clone());
        Ok(())
    });

    let registration =
        Registration::try_from_parts(" ada ", "s3cret", None, None).expect("registration");
    let user = make_service(repo)
        .sign_up(registration)
        .await
        .expect("signup succeeds");

    assert_eq!(user.username().as_ref(), "ada");
    assert!(user.password_hash().as_phc_str().starts_with("$argon2id$"));
    assert!(
        user.password_hash()
            .verify(&PlainPassword::new("s3cret"))
            .expect("verify")
    );
    let inserted = captured.lock().expect("capture lock").clone();
    assert_eq!(inserted, Some(user));
}

#[tokio::test]
async fn sign_up_maps_duplicate_username_to_conflict() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::duplicate_username("ada")));

    let registration =
        Registration::try_from_parts("ada", "pw", None, None).expect("registration");
    let err = make_service(repo)
        .sign_up(registration)
        .await
        .expect_err("duplicate must fail");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), DUPLICATE_USERNAME_MESSAGE);
}

#[rstest]
#[case("hunter2", true)]
#[case("hunter3", false)]
#[tokio::test]
async fn authenticate_verifies_password(#[case] attempt: &str, #[case] should_succeed: bool) {
    let user = stored_user("ada", "hunter2");
    let expected_id = *user.id();
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .withf(|name| name == "ada")
        .times(1)
        .return_once(move |_| Ok(Some(user)));

    let creds = LoginCredentials::try_from_parts("ada", attempt).expect("credentials");
    let result = make_service(repo).authenticate(&creds).await;

    match (should_succeed, result) {
        (true, Ok(found)) => assert_eq!(found.id(), &expected_id),
        (false, Err(err)) => {
            assert_eq!(err.code(), ErrorCode::Unauthorized);
            assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
        }
        (true, Err(err)) => panic!("expected success, got error: {err:?}"),
        (false, Ok(user)) => panic!("expected failure, got user {}", user.id()),
    }
}

#[tokio::test]
async fn authenticate_rejects_unknown_user_with_same_message() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));

    let creds = LoginCredentials::try_from_parts("ghost", "pw").expect("credentials");
    let err = make_service(repo)
        .authenticate(&creds)
        .await
        .expect_err("unknown user must fail");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn authenticate_treats_malformed_hash_as_internal() {
    let user = User::new(UserParts {
        id: UserId::random(),
        username: Username::new("ada").expect("valid username"),
        password_hash: PasswordHash::from_phc_string("garbage"),
        image_url: None,
        bio: None,
    });
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .times(1)
        .return_once(move |_| Ok(Some(user)));

    let creds = LoginCredentials::try_from_parts("ada", "pw").expect("credentials");
    let err = make_service(repo)
        .authenticate(&creds)
        .await
        .expect_err("malformed hash must fail");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("bad sql"), ErrorCode::InternalError)]
#[tokio::test]
async fn find_user_maps_repository_errors(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Err(failure));

    let err = make_service(repo)
        .find_user(&UserId::random())
        .await
        .expect_err("repository failure must surface");

    assert_eq!(err.code(), expected);
}
