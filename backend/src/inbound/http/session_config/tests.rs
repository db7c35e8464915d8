//! Unit tests for session configuration parsing.

use std::collections::HashMap;
use std::io::Write;

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp key file");
    file.write_all(&vec![b'k'; len]).expect("write key bytes");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn valid_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

fn release_vars(key_path: String) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key_path),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn release_error(vars: HashMap<&'static str, String>) -> SessionConfigError {
    match session_settings_from_env(&mock_env(vars), BuildMode::Release) {
        Ok(_) => panic!("release settings should have been rejected"),
        Err(err) => err,
    }
}

#[rstest]
fn release_valid_settings_succeed(valid_key: NamedTempFile) {
    let env = mock_env(release_vars(path_of(&valid_key)));

    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("valid release settings");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(valid_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(path_of(&valid_key));
    vars.remove(missing);

    let err = release_error(vars);

    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_invalid_values(
    valid_key: NamedTempFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(path_of(&valid_key));
    vars.insert(name, value.to_owned());

    let err = release_error(vars);

    assert!(matches!(err, SessionConfigError::InvalidEnv { name: got, .. } if got == name));
}

#[rstest]
fn release_rejects_ephemeral_keys(valid_key: NamedTempFile) {
    let mut vars = release_vars(path_of(&valid_key));
    vars.insert(ALLOW_EPHEMERAL_ENV, "1".to_owned());

    assert!(matches!(
        release_error(vars),
        SessionConfigError::EphemeralNotAllowed
    ));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = key_file(32);

    assert!(matches!(
        release_error(release_vars(path_of(&short))),
        SessionConfigError::KeyTooShort { length: 32, .. }
    ));
}

#[rstest]
fn release_rejects_missing_key_file() {
    let missing = std::env::temp_dir().join(format!("absent-key-{}", uuid::Uuid::new_v4()));

    assert!(matches!(
        release_error(release_vars(missing.to_string_lossy().into_owned())),
        SessionConfigError::KeyRead { .. }
    ));
}

#[rstest]
fn release_rejects_insecure_same_site_none(valid_key: NamedTempFile) {
    let mut vars = release_vars(path_of(&valid_key));
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    assert!(matches!(
        release_error(vars),
        SessionConfigError::InsecureSameSiteNone
    ));
}

#[rstest]
fn debug_defaults_fall_back_with_ephemeral_key() {
    let vars = HashMap::from([(
        KEY_FILE_ENV,
        std::env::temp_dir()
            .join(format!("absent-key-{}", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .into_owned(),
    )]);

    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Debug)
        .expect("debug defaults succeed");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_tolerates_short_key_and_bad_same_site() {
    let short = key_file(8);
    let mut vars = release_vars(path_of(&short));
    vars.insert(SAMESITE_ENV, "unexpected".to_owned());

    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug fallback");

    assert_eq!(settings.same_site, SameSite::Lax);
}
