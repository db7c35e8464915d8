//! HTTP inbound adapter exposing the REST endpoints.
//!
//! [`configure`] registers the account and recipe handlers together with the
//! JSON extractor configuration. Health probes are registered by the server.

pub mod auth;
pub mod error;
pub mod health;
pub mod recipes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the account and recipe routes.
///
/// Callers provide [`state::HttpState`] as app data and wrap the app in
/// session middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(auth::signup)
        .service(auth::login)
        .service(auth::logout)
        .service(auth::check_session)
        .service(recipes::list_recipes)
        .service(recipes::create_recipe);
}
