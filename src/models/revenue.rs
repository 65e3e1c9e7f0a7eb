#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
