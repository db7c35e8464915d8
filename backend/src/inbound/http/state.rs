//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports,
//! so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, RecipeCatalogue};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub recipes: Arc<dyn RecipeCatalogue>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{RecipeService, UserAccountService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::new();
    /// let users = Arc::new(store.users());
    /// let state = HttpState::new(
    ///     Arc::new(UserAccountService::new(users.clone())),
    ///     Arc::new(RecipeService::new(Arc::new(store.recipes()), users)),
    /// );
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn new(accounts: Arc<dyn AccountService>, recipes: Arc<dyn RecipeCatalogue>) -> Self {
        Self { accounts, recipes }
    }
}
