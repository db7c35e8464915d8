//! Port abstraction for recipe persistence adapters.
use async_trait::async_trait;

use crate::domain::{Recipe, RecipeView};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
        /// The owning user does not exist.
        MissingOwner { owner_id: String } => "recipe owner not found: {owner_id}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe.
    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError>;

    /// List every recipe joined with its owner summary, oldest first.
    async fn list_with_owners(&self) -> Result<Vec<RecipeView>, RecipePersistenceError>;
}
