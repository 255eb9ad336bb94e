use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Department {
    #[schema(example = 1)]
    pub dept_id: i32,

    #[schema(example = "Engineering")]
    pub dept_name: String,

    #[schema(example = "Rokeya Begum", nullable = true)]
    pub manager: Option<String>,
}
