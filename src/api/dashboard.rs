use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::ApiError;

#[derive(Serialize, ToSchema)]
pub struct DashboardSummary {
    #[schema(example = 42)]
    pub total_employees: i64,
    #[schema(example = 5)]
    pub total_departments: i64,
    #[schema(example = 51234.56)]
    pub avg_salary: f64,
}

pub fn summarize(
    total_employees: i64,
    total_departments: i64,
    avg_salary: Option<f64>,
) -> DashboardSummary {
    DashboardSummary {
        total_employees,
        total_departments,
        avg_salary: round2(avg_salary.unwrap_or(0.0)),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Dashboard Summary
#[utoipa::path(
    get,
    path = "/dashboard/summary",
    responses(
        (status = 200, description = "Key metrics", body = DashboardSummary),
        (status = 400, description = "Database error", body = Object)
    ),
    tag = "Dashboard"
)]
pub async fn summary(pool: web::Data<MySqlPool>) -> Result<impl Responder, ApiError> {
    let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool.get_ref())
        .await?;

    let total_departments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
        .fetch_one(pool.get_ref())
        .await?;

    // AVG over zero rows (or all-NULL salaries) is NULL; reported as 0.
    let avg_salary: Option<f64> =
        sqlx::query_scalar("SELECT CAST(AVG(salary) AS DOUBLE) FROM employees")
            .fetch_one(pool.get_ref())
            .await?;

    Ok(HttpResponse::Ok().json(summarize(total_employees, total_departments, avg_salary)))
}

#[cfg(test)]
mod tests {
    use super::{round2, summarize};

    #[test]
    fn no_employees_defaults_avg_to_zero() {
        let s = summarize(0, 0, None);
        assert_eq!(s.total_employees, 0);
        assert_eq!(s.avg_salary, 0.0);
    }

    #[test]
    fn avg_of_two_salaries() {
        // salaries 1000 and 2000
        let s = summarize(2, 1, Some(1500.0));
        assert_eq!(s.avg_salary, 1500.0);
    }

    #[test]
    fn avg_is_rounded_to_two_decimals() {
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(1234.5), 1234.5);
        assert_eq!(summarize(3, 0, Some(33333.333333)).avg_salary, 33333.33);
    }
}
