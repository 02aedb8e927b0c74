use serde::{Deserialize, Serialize};

/// Persisted user record. The password is stored verbatim (no hashing),
/// matching the on-disk format this service inherits.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct User {
    pub id: String,  // Time-derived: Unix millis at signup, as a string
    pub email: String,
    pub pseudo: String,
    pub password: String,
}

/// Wire/disk wrapper for `users.json`: `{"users":[User,...]}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UsersDocument {
    pub users: Vec<User>,
}
