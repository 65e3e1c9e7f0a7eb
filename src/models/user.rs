use uuid::Uuid;

/// A dashboard login. `password` holds plaintext in the seed set and a hash once stored.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}
