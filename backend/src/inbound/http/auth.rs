//! Account HTTP handlers: signup, login, logout, and session checks.
//!
//! ```text
//! POST   /signup        {"username":"ada","password":"pw","image_url":null,"bio":null}
//! POST   /login         {"username":"ada","password":"pw"}
//! DELETE /logout
//! GET    /check_session
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    Error, ErrorPayload, LoginCredentials, LoginValidationError, Registration,
    RegistrationValidationError, UNAUTHORIZED_MESSAGE, UserProfile,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JSON_BODY_LIMIT, invalid_data, read_json_body};

/// Signup request body. Absent fields are treated as empty.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SignupRequest {
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl TryFrom<SignupRequest> for Registration {
    type Error = RegistrationValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.username.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
            value.image_url,
            value.bio,
        )
    }
}

/// Login request body. Absent fields are treated as empty.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.username.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

fn unauthorized() -> Error {
    Error::unauthorized(UNAUTHORIZED_MESSAGE)
}

/// Register an account and start a session for it.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserProfile,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 409, description = "Username already exists", body = ErrorPayload),
        (status = 422, description = "Invalid data", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(payload.into_inner()).map_err(invalid_data)?;
    let user = state.accounts.sign_up(registration).await?;
    session.persist_user(user.id())?;
    Ok(HttpResponse::Created().json(user.profile()))
}

/// Authenticate and start a session.
///
/// Any problem with the body or the credentials is a plain `401` to the
/// client.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserProfile,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Invalid credentials", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let request: LoginRequest = read_json_body(payload, JSON_BODY_LIMIT)
        .await
        .map_err(|err| {
            info!(reason = %err, "login body rejected");
            unauthorized()
        })?;
    let credentials = LoginCredentials::try_from(request).map_err(|err| {
        info!(reason = %err, "login rejected before lookup");
        unauthorized()
    })?;
    let user = state.accounts.authenticate(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(HttpResponse::Ok().json(user.profile()))
}

/// End the current session.
#[utoipa::path(
    delete,
    path = "/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 401, description = "No active session", body = ErrorPayload)
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[delete("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    session.purge();
    info!(%user_id, "session purged");
    Ok(HttpResponse::NoContent().finish())
}

/// Return the signed-in user.
#[utoipa::path(
    get,
    path = "/check_session",
    responses(
        (status = 200, description = "Active session", body = UserProfile),
        (status = 401, description = "No active session", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    tags = ["auth"],
    operation_id = "checkSession"
)]
#[get("/check_session")]
pub async fn check_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<UserProfile>> {
    let user_id = session.require_user_id()?;
    let user = state
        .accounts
        .find_user(&user_id)
        .await?
        .ok_or_else(unauthorized)?;
    Ok(web::Json(user.profile()))
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
