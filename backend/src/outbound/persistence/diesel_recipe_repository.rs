//! PostgreSQL-backed `RecipeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::domain::{Recipe, RecipeDraft, RecipeId, RecipeOwner, RecipeView, UserId};

use super::diesel_error_mapping::{Violation, map_diesel_error, map_pool_error, violation};
use super::models::{NewRecipeRow, OwnerRow, RecipeRow};
use super::pool::DbPool;
use super::schema::{recipes, users};

/// Diesel-backed implementation of the [`RecipeRepository`] port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_to_recipe_error(error: diesel::result::Error) -> RecipePersistenceError {
    map_diesel_error(
        error,
        RecipePersistenceError::query,
        RecipePersistenceError::connection,
    )
}

fn rows_to_view(recipe: RecipeRow, owner: OwnerRow) -> Result<RecipeView, RecipePersistenceError> {
    let draft = RecipeDraft::try_new(
        &recipe.title,
        &recipe.instructions,
        recipe.minutes_to_complete,
    )
    .map_err(|err| {
        RecipePersistenceError::query(format!("stored recipe {} is invalid: {err}", recipe.id))
    })?;
    let owner_id = UserId::from_uuid(owner.id);
    Ok(
        Recipe::from_parts(RecipeId::from_uuid(recipe.id), owner_id, draft).into_view(
            RecipeOwner {
                id: owner_id,
                username: owner.username,
            },
        ),
    )
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecipePersistenceError::connection))?;

        let row = NewRecipeRow {
            id: *recipe.id().as_uuid(),
            user_id: *recipe.owner_id().as_uuid(),
            title: recipe.title(),
            instructions: recipe.instructions(),
            minutes_to_complete: recipe.minutes_to_complete(),
        };

        match diesel::insert_into(recipes::table)
            .values(&row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if violation(&err) == Some(Violation::ForeignKey) => Err(
                RecipePersistenceError::missing_owner(recipe.owner_id().to_string()),
            ),
            Err(err) => Err(diesel_to_recipe_error(err)),
        }
    }

    async fn list_with_owners(&self) -> Result<Vec<RecipeView>, RecipePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecipePersistenceError::connection))?;

        let rows: Vec<(RecipeRow, OwnerRow)> = recipes::table
            .inner_join(users::table)
            .order((recipes::created_at.asc(), recipes::id.asc()))
            .select((RecipeRow::as_select(), OwnerRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(diesel_to_recipe_error)?;

        rows.into_iter()
            .map(|(recipe, owner)| rows_to_view(recipe, owner))
            .collect()
    }
}
