use serde::{Deserialize, Serialize};

/// Row shape for the by-date attendance query. `status` is the raw ENUM
/// text; the handler partitions on it.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceMark {
    pub employee_id: i32,
    pub name: String,
    pub status: String,
}
