//! Builders wiring repositories into the driving-port services.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use backend::domain::ports::{RecipeRepository, UserRepository};
use backend::domain::{RecipeService, UserAccountService};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryStore;
use backend::outbound::persistence::{DbPool, DieselRecipeRepository, DieselUserRepository};

fn state_from_repositories<U, R>(users: Arc<U>, recipes: Arc<R>) -> HttpState
where
    U: UserRepository + 'static,
    R: RecipeRepository + 'static,
{
    HttpState::new(
        Arc::new(UserAccountService::new(users.clone())),
        Arc::new(RecipeService::new(recipes, users)),
    )
}

/// Build handler state backed by PostgreSQL when a pool is configured and by
/// process memory otherwise.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match db_pool {
        Some(pool) => state_from_repositories(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselRecipeRepository::new(pool.clone())),
        ),
        None => {
            info!("no database configured; using in-memory storage");
            let store = InMemoryStore::new();
            state_from_repositories(Arc::new(store.users()), Arc::new(store.recipes()))
        }
    };
    web::Data::new(state)
}
