//! Domain primitives, ports, and services.
//!
//! Purpose: Define strongly typed entities used by the HTTP and persistence
//! layers, plus the services that implement the driving ports. Types keep
//! their invariants in their constructors.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a stable code.
//! - User / UserProfile: account and its public view.
//! - Recipe / RecipeDraft / RecipeView: recipe creation and listing.
//! - UserAccountService / RecipeService: driving port implementations.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod password;
pub mod ports;
pub mod recipe;
pub mod recipe_service;
pub mod trace_id;
pub mod user;

pub use self::account_service::{
    DUPLICATE_USERNAME_MESSAGE, UNAUTHORIZED_MESSAGE, UserAccountService,
};
pub use self::auth::{
    LoginCredentials, LoginValidationError, Registration, RegistrationValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorPayload, ErrorValidationError};
pub use self::password::{PasswordHash, PasswordHashError, PlainPassword};
pub use self::recipe::{
    INSTRUCTIONS_MIN_CHARS, Recipe, RecipeDraft, RecipeId, RecipeOwner, RecipeValidationError,
    RecipeView,
};
pub use self::recipe_service::RecipeService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    PROFILE_FIELD_MAX, USERNAME_MAX, User, UserId, UserParts, UserProfile, UserValidationError,
    Username,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Unauthorized"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
