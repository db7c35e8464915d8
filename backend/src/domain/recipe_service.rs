//! Recipe domain service implementing the [`RecipeCatalogue`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::account_service::{UNAUTHORIZED_MESSAGE, map_user_persistence_error};
use crate::domain::ports::{
    RecipeCatalogue, RecipePersistenceError, RecipeRepository, UserRepository,
};
use crate::domain::{Error, Recipe, RecipeDraft, RecipeOwner, RecipeView, UserId};

fn map_recipe_persistence_error(error: RecipePersistenceError) -> Error {
    match error {
        RecipePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipePersistenceError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
        RecipePersistenceError::MissingOwner { owner_id } => {
            warn!(%owner_id, "recipe rejected: owner no longer exists");
            Error::unauthorized(UNAUTHORIZED_MESSAGE)
        }
    }
}

/// Recipe service backed by recipe and user repositories.
#[derive(Clone)]
pub struct RecipeService<R, U> {
    recipes: Arc<R>,
    users: Arc<U>,
}

impl<R, U> RecipeService<R, U> {
    /// Create a new service with the given repositories.
    pub fn new(recipes: Arc<R>, users: Arc<U>) -> Self {
        Self { recipes, users }
    }
}

#[async_trait]
impl<R, U> RecipeCatalogue for RecipeService<R, U>
where
    R: RecipeRepository,
    U: UserRepository,
{
    async fn list_recipes(&self) -> Result<Vec<RecipeView>, Error> {
        self.recipes
            .list_with_owners()
            .await
            .map_err(map_recipe_persistence_error)
    }

    async fn create_recipe(&self, owner: &UserId, draft: RecipeDraft) -> Result<RecipeView, Error> {
        // A session can outlive its user, so resolve the owner first.
        let Some(user) = self
            .users
            .find_by_id(owner)
            .await
            .map_err(map_user_persistence_error)?
        else {
            warn!(user_id = %owner, "recipe rejected: session user not found");
            return Err(Error::unauthorized(UNAUTHORIZED_MESSAGE));
        };

        let recipe = Recipe::new(*user.id(), draft);
        self.recipes
            .insert(&recipe)
            .await
            .map_err(map_recipe_persistence_error)?;

        info!(recipe_id = %recipe.id(), user_id = %user.id(), "recipe created");
        Ok(recipe.into_view(RecipeOwner {
            id: *user.id(),
            username: user.username().to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockRecipeRepository, MockUserRepository};
    use crate::domain::{PasswordHash, User, UserParts, Username};
    use rstest::rstest;

    fn user(id: UserId) -> User {
        User::new(UserParts {
            id,
            username: Username::new("ada").expect("valid username"),
            password_hash: PasswordHash::from_phc_string("$argon2id$stub"),
            image_url: None,
            bio: None,
        })
    }

    fn draft() -> RecipeDraft {
        RecipeDraft::try_new("Bread", &"Knead the dough and let it rise. ".repeat(3), Some(90))
            .expect("valid draft")
    }

    fn make_service(
        recipes: MockRecipeRepository,
        users: MockUserRepository,
    ) -> RecipeService<MockRecipeRepository, MockUserRepository> {
        RecipeService::new(Arc::new(recipes), Arc::new(users))
    }

    #[tokio::test]
    async fn create_recipe_embeds_owner_summary() {
        let owner = UserId::random();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(move |id| Ok(Some(user(*id))));
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_insert()
            .withf(move |recipe| recipe.owner_id() == &owner && recipe.title() == "Bread")
            .times(1)
            .return_once(|_| Ok(()));

        let view = make_service(recipes, users)
            .create_recipe(&owner, draft())
            .await
            .expect("create succeeds");

        assert_eq!(view.user.id, owner);
        assert_eq!(view.user.username, "ada");
        assert_eq!(view.minutes_to_complete, Some(90));
    }

    #[tokio::test]
    async fn create_recipe_for_missing_user_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        let mut recipes = MockRecipeRepository::new();
        recipes.expect_insert().never();

        let err = make_service(recipes, users)
            .create_recipe(&UserId::random(), draft())
            .await
            .expect_err("missing owner must fail");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(RecipePersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(RecipePersistenceError::query("bad"), ErrorCode::InternalError)]
    #[case(RecipePersistenceError::missing_owner("x"), ErrorCode::Unauthorized)]
    #[tokio::test]
    async fn create_recipe_maps_insert_failures(
        #[case] failure: RecipePersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .return_once(move |id| Ok(Some(user(*id))));
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_insert()
            .times(1)
            .return_once(move |_| Err(failure));

        let err = make_service(recipes, users)
            .create_recipe(&UserId::random(), draft())
            .await
            .expect_err("insert failure must surface");

        assert_eq!(err.code(), expected);
    }

    #[tokio::test]
    async fn list_recipes_passes_through_repository_order() {
        let owner = UserId::random();
        let first = Recipe::new(owner, draft()).into_view(RecipeOwner {
            id: owner,
            username: "ada".to_owned(),
        });
        let second = Recipe::new(owner, draft()).into_view(RecipeOwner {
            id: owner,
            username: "ada".to_owned(),
        });
        let expected = vec![first.clone(), second.clone()];
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_list_with_owners()
            .times(1)
            .return_once(move || Ok(vec![first, second]));

        let listed = make_service(recipes, MockUserRepository::new())
            .list_recipes()
            .await
            .expect("list succeeds");

        assert_eq!(listed, expected);
    }
}
