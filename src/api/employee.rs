use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::utils::body::{as_object, date_field, f64_field, string_field};

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
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

/// Add Employee
#[utoipa::path(
    post,
    path = "/add_employee",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee added", body = Object, example = json!({
            "message": "Employee added successfully!"
        })),
        (status = 400, description = "Invalid payload or constraint violation", body = Object, example = json!({
            "error": "missing field `name`"
        }))
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, ApiError> {
    sqlx::query(
        r#"
        INSERT INTO employees
        (name, email, phone, position, salary, join_date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.position)
    .bind(payload.salary)
    .bind(payload.join_date)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to add employee");
        e
    })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Employee added successfully!" })))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, natural storage order", body = [Employee]),
        (status = 400, description = "Database error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<MySqlPool>) -> Result<impl Responder, ApiError> {
    // DECIMAL is cast at query time so salary decodes as f64 and
    // serializes as a plain JSON number.
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, email, phone, position,
               CAST(salary AS DOUBLE) AS salary, join_date
        FROM employees
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Update Employee
///
/// Full-record overwrite: every one of the six fields must be present in
/// the payload. An id with no matching row is a silent success.
#[utoipa::path(
    put,
    path = "/update_employee/{id}",
    params(("id", Path, description = "Employee ID")),
    request_body = Object,
    responses(
        (status = 200, description = "Employee updated", body = Object, example = json!({
            "message": "Employee updated successfully!"
        })),
        (status = 400, description = "Missing field or constraint violation", body = Object, example = json!({
            "error": "missing field 'salary'"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();
    let obj = as_object(&body)?;

    let name = string_field(obj, "name")?;
    let email = string_field(obj, "email")?;
    let phone = string_field(obj, "phone")?;
    let position = string_field(obj, "position")?;
    let salary = f64_field(obj, "salary")?;
    let join_date = date_field(obj, "join_date")?;

    debug!(id, "Updating employee");

    sqlx::query(
        r#"
        UPDATE employees
        SET name=?, email=?, phone=?, position=?, salary=?, join_date=?
        WHERE id=?
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(position)
    .bind(salary)
    .bind(join_date)
    .bind(id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, id, "Failed to update employee");
        e
    })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Employee updated successfully!" })))
}

/// Delete Employee
///
/// Cascades to attendance rows. An id with no matching row is a silent
/// success.
#[utoipa::path(
    delete,
    path = "/delete_employee/{id}",
    params(("id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee deleted successfully!"
        })),
        (status = 400, description = "Database error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();

    sqlx::query("DELETE FROM employees WHERE id=?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to delete employee");
            e
        })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Employee deleted successfully!" })))
}
