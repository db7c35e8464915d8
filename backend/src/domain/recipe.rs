//! Recipe data model and creation rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserId;

/// Minimum number of characters (Unicode scalar values) in `instructions`.
pub const INSTRUCTIONS_MIN_CHARS: usize = 50;

/// Validation errors for new recipes, reported in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("instructions must not be empty")]
    EmptyInstructions,
    #[error("instructions must be at least {min} characters, got {actual}")]
    InstructionsTooShort { min: usize, actual: usize },
}

/// Recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a fresh v4 identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for a new recipe.
///
/// ## Invariants
/// - `title` is non-empty.
/// - `instructions` holds at least [`INSTRUCTIONS_MIN_CHARS`] characters.
///
/// # Examples
/// ```
/// use backend::domain::{RecipeDraft, RecipeValidationError};
///
/// let short = RecipeDraft::try_new("Toast", "Toast the bread.", None);
/// assert!(matches!(short, Err(RecipeValidationError::InstructionsTooShort { .. })));
///
/// let ok = RecipeDraft::try_new("Toast", &"a".repeat(50), Some(5)).unwrap();
/// assert_eq!(ok.minutes_to_complete(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    title: String,
    instructions: String,
    minutes_to_complete: Option<i32>,
}

impl RecipeDraft {
    /// Validate a new recipe's fields, reporting the first that fails.
    pub fn try_new(
        title: &str,
        instructions: &str,
        minutes_to_complete: Option<i32>,
    ) -> Result<Self, RecipeValidationError> {
        if title.is_empty() {
            return Err(RecipeValidationError::EmptyTitle);
        }
        if instructions.is_empty() {
            return Err(RecipeValidationError::EmptyInstructions);
        }
        let actual = instructions.chars().count();
        if actual < INSTRUCTIONS_MIN_CHARS {
            return Err(RecipeValidationError::InstructionsTooShort {
                min: INSTRUCTIONS_MIN_CHARS,
                actual,
            });
        }
        Ok(Self {
            title: title.to_owned(),
            instructions: instructions.to_owned(),
            minutes_to_complete,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn instructions(&self) -> &str {
        self.instructions.as_str()
    }

    pub fn minutes_to_complete(&self) -> Option<i32> {
        self.minutes_to_complete
    }
}

/// Persisted recipe owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    owner_id: UserId,
    draft: RecipeDraft,
}

impl Recipe {
    /// Attach a fresh identifier and owner to a validated draft.
    pub fn new(owner_id: UserId, draft: RecipeDraft) -> Self {
        Self::from_parts(RecipeId::random(), owner_id, draft)
    }

    /// Rebuild a recipe from stored parts.
    pub fn from_parts(id: RecipeId, owner_id: UserId, draft: RecipeDraft) -> Self {
        Self { id, owner_id, draft }
    }

    pub fn id(&self) -> &RecipeId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn title(&self) -> &str {
        self.draft.title()
    }

    pub fn instructions(&self) -> &str {
        self.draft.instructions()
    }

    pub fn minutes_to_complete(&self) -> Option<i32> {
        self.draft.minutes_to_complete()
    }

    /// Combine with the owner's summary for responses.
    pub fn into_view(self, owner: RecipeOwner) -> RecipeView {
        let Self { id, draft, .. } = self;
        RecipeView {
            id,
            title: draft.title,
            instructions: draft.instructions,
            minutes_to_complete: draft.minutes_to_complete,
            user: owner,
        }
    }
}

/// Owner summary embedded in recipe responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeOwner {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    #[schema(example = "ada")]
    pub username: String,
}

/// Recipe as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeView {
    #[schema(value_type = String, example = "9b2f4c1e-0d3a-4f8e-bb9a-7c6d5e4f3a21")]
    pub id: RecipeId,
    #[schema(example = "Overnight oats")]
    pub title: String,
    pub instructions: String,
    #[schema(example = 10)]
    pub minutes_to_complete: Option<i32>,
    pub user: RecipeOwner,
}
