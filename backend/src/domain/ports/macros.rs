//! Macro for declaring repository error enums.
//!
//! Every variant carries named fields and a display template. The macro
//! derives `thiserror::Error` and adds one snake_case constructor per
//! variant whose arguments accept anything convertible into the field type:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum UserPersistenceError {
//!         Connection { message: String } => "user repository connection failed: {message}",
//!     }
//! }
//!
//! let err = UserPersistenceError::connection("refused");
//! ```

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),+ },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build the `" $variant "` variant."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::domain::ports::{RecipePersistenceError, UserPersistenceError};

    #[rstest]
    #[case(
        UserPersistenceError::connection("refused"),
        "user repository connection failed: refused"
    )]
    #[case(
        UserPersistenceError::query("syntax error"),
        "user repository query failed: syntax error"
    )]
    #[case(
        UserPersistenceError::duplicate_username("ada"),
        "username already taken: ada"
    )]
    fn user_errors_render_their_fields(#[case] err: UserPersistenceError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    #[case(
        RecipePersistenceError::connection("timed out"),
        "recipe repository connection failed: timed out"
    )]
    #[case(
        RecipePersistenceError::missing_owner("0b6f"),
        "recipe owner not found: 0b6f"
    )]
    fn recipe_errors_render_their_fields(
        #[case] err: RecipePersistenceError,
        #[case] expected: &str,
    ) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn constructors_accept_owned_and_borrowed_strings() {
        let owned = UserPersistenceError::duplicate_username(String::from("ada"));
        let borrowed = UserPersistenceError::duplicate_username("ada");
        assert_eq!(owned, borrowed);
        assert_eq!(
            owned,
            UserPersistenceError::DuplicateUsername {
                username: "ada".to_owned()
            }
        );
    }
}
