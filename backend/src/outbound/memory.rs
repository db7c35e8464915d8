//! In-memory adapters for the user and recipe repositories.
//!
//! Used when no database URL is configured and by HTTP integration tests.
//! Both repositories share one [`InMemoryStore`] so the recipe adapter can
//! check owners and join usernames the way the SQL schema does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    RecipePersistenceError, RecipeRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Recipe, RecipeOwner, RecipeView, User, UserId};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    // Insertion order doubles as creation order.
    recipes: Vec<Recipe>,
}

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }

    /// Repository view over the users table.
    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            store: self.clone(),
        }
    }

    /// Repository view over the recipes table.
    pub fn recipes(&self) -> InMemoryRecipeRepository {
        InMemoryRecipeRepository {
            store: self.clone(),
        }
    }
}

/// In-memory [`UserRepository`] enforcing unique usernames.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self.store.lock().map_err(UserPersistenceError::query)?;
        if tables
            .users
            .values()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        tables.users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.store.lock().map_err(UserPersistenceError::query)?;
        Ok(tables.users.get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.store.lock().map_err(UserPersistenceError::query)?;
        Ok(tables
            .users
            .values()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }
}

/// In-memory [`RecipeRepository`] enforcing the owner reference.
#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    store: InMemoryStore,
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError> {
        let mut tables = self.store.lock().map_err(RecipePersistenceError::query)?;
        if !tables.users.contains_key(recipe.owner_id()) {
            return Err(RecipePersistenceError::missing_owner(
                recipe.owner_id().to_string(),
            ));
        }
        tables.recipes.push(recipe.clone());
        Ok(())
    }

    async fn list_with_owners(&self) -> Result<Vec<RecipeView>, RecipePersistenceError> {
        let tables = self.store.lock().map_err(RecipePersistenceError::query)?;
        tables
            .recipes
            .iter()
            .map(|recipe| {
                let owner = tables.users.get(recipe.owner_id()).ok_or_else(|| {
                    RecipePersistenceError::missing_owner(recipe.owner_id().to_string())
                })?;
                Ok(recipe.clone().into_view(RecipeOwner {
                    id: *owner.id(),
                    username: owner.username().to_string(),
                }))
            })
            .collect()
    }
}
