//! Recipe HTTP handlers.
//!
//! Both endpoints require a session. `POST /recipes` checks the session
//! before reading the body, so an anonymous request is `401` whatever it
//! sends and its body is never buffered.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ErrorPayload, RecipeDraft, RecipeValidationError, RecipeView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JSON_BODY_LIMIT, invalid_data, read_json_body};

/// Body for `POST /recipes`. Absent text fields are treated as empty.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateRecipeRequest {
    #[schema(example = "Overnight oats")]
    pub title: Option<String>,
    #[schema(min_length = 50)]
    pub instructions: Option<String>,
    #[schema(example = 10)]
    pub minutes_to_complete: Option<i32>,
}

impl TryFrom<CreateRecipeRequest> for RecipeDraft {
    type Error = RecipeValidationError;

    fn try_from(value: CreateRecipeRequest) -> Result<Self, Self::Error> {
        Self::try_new(
            value.title.as_deref().unwrap_or_default(),
            value.instructions.as_deref().unwrap_or_default(),
            value.minutes_to_complete,
        )
    }
}

/// List every recipe with its owner.
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeView]),
        (status = 401, description = "No active session", body = ErrorPayload),
        (status = 503, description = "Storage unavailable", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<RecipeView>>> {
    session.require_user_id()?;
    let recipes = state.recipes.list_recipes().await?;
    Ok(web::Json(recipes))
}

/// Create a recipe owned by the signed-in user.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeView),
        (status = 401, description = "No active session", body = ErrorPayload),
        (status = 422, description = "Invalid data", body = ErrorPayload),
        (status = 503, description = "Storage unavailable", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user_id()?;
    let request: CreateRecipeRequest = read_json_body(payload, JSON_BODY_LIMIT)
        .await
        .map_err(invalid_data)?;
    let draft = RecipeDraft::try_from(request).map_err(invalid_data)?;
    let view = state.recipes.create_recipe(&owner, draft).await?;
    Ok(HttpResponse::Created().json(view))
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
