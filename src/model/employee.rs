use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Pranita Shivgan",
        "email": "pranita@company.com",
        "phone": "+8801712345678",
        "position": "Engineer",
        "salary": 52000.0,
        "join_date": "2024-01-01"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Pranita Shivgan")]
    pub name: String,

    #[schema(example = "pranita@company.com", nullable = true)]
    pub email: Option<String>,

    #[schema(example = "+8801712345678", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "Engineer", nullable = true)]
    pub position: Option<String>,

    #[schema(example = 52000.0, nullable = true)]
    pub salary: Option<f64>,

    #[schema(example = "2024-01-01", value_type = String, format = "date", nullable = true)]
    pub join_date: Option<NaiveDate>,
}
