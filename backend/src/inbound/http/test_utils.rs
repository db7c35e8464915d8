//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::web;

use crate::domain::ports::{MockAccountService, MockRecipeCatalogue};
use crate::domain::{PasswordHash, User, UserId, UserParts, Username};

use super::state::HttpState;

/// Build a session middleware configured for tests.
///
/// Generates a fresh key per invocation and disables the `Secure` flag so
/// plain HTTP test requests keep the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set on `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Wrap mocked driving ports in handler state.
pub fn mock_state(
    accounts: MockAccountService,
    recipes: MockRecipeCatalogue,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(accounts), Arc::new(recipes)))
}

/// A stored user whose hash is never verified by handler tests.
pub fn stored_user(username: &str) -> User {
    User::new(UserParts {
        id: UserId::random(),
        username: Username::new(username).expect("fixture username"),
        password_hash: PasswordHash::from_phc_string("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
        image_url: None,
        bio: Some("Writes recipes.".to_owned()),
    })
}
