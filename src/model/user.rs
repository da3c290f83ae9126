use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "bob")]
    pub username: String,

    #[schema(example = false)]
    pub is_admin: bool,
}
