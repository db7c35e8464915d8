//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the request and response
//! schemas, and the session cookie security scheme. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` exports it for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{ErrorPayload, RecipeOwner, RecipeView, UserProfile};
use crate::inbound::http::auth::{LoginRequest, SignupRequest};
use crate::inbound::http::recipes::CreateRecipeRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /signup or POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Recipe book API",
        description = "Session-authenticated accounts and recipes, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::check_session,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        CreateRecipeRequest,
        UserProfile,
        RecipeView,
        RecipeOwner,
        ErrorPayload,
    )),
    tags(
        (name = "auth", description = "Signup, login, and session management"),
        (name = "recipes", description = "Recipe listing and creation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/signup")]
    #[case("/login")]
    #[case("/logout")]
    #[case("/check_session")]
    #[case("/recipes")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn profile_schema_omits_password_hash() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let profile = schemas.get("UserProfile").expect("UserProfile schema");

        assert_object_schema_has_field(profile, "username");
        match profile {
            RefOr::T(Schema::Object(obj)) => {
                assert!(!obj.properties.contains_key("password_hash"));
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_has_error_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("ErrorPayload").expect("ErrorPayload schema");

        assert_object_schema_has_field(error, "error");
    }
}
