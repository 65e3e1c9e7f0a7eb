use uuid::Uuid;

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}
