//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `RecipeRepository`) are implemented by
//! outbound adapters. Driving ports (`AccountService`, `RecipeCatalogue`) are
//! implemented by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod recipe_catalogue;
mod recipe_repository;
mod user_repository;

pub use account_service::AccountService;
#[cfg(test)]
pub use account_service::MockAccountService;
#[cfg(test)]
pub use recipe_catalogue::MockRecipeCatalogue;
pub use recipe_catalogue::RecipeCatalogue;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipePersistenceError, RecipeRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
