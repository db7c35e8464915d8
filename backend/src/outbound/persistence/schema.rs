//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the tables.

diesel::table! {
    /// Registered accounts. `username` carries a unique index.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        password_hash -> Text,
        image_url -> Nullable<Varchar>,
        bio -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Recipes owned by a user; rows cascade when the owner is deleted.
    recipes (id) {
        id -> Uuid,
        user_id -> Uuid,
        title -> Text,
        instructions -> Text,
        minutes_to_complete -> Nullable<Int4>,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(recipes -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(users, recipes);
