//! Driving port for listing and creating recipes.

use async_trait::async_trait;

use crate::domain::{Error, RecipeDraft, RecipeView, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalogue: Send + Sync {
    /// Every recipe with its owner summary.
    async fn list_recipes(&self) -> Result<Vec<RecipeView>, Error>;

    /// Create a recipe owned by `owner`.
    async fn create_recipe(&self, owner: &UserId, draft: RecipeDraft) -> Result<RecipeView, Error>;
}
