use actix_web::{HttpResponse, Responder, web};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use tracing::error;

use crate::error::ApiError;
use crate::model::department::Department;
use crate::utils::body::{as_object, string_field};

/// List Departments
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All departments", body = [Department]),
        (status = 400, description = "Database error", body = Object)
    ),
    tag = "Department"
)]
pub async fn list_departments(pool: web::Data<MySqlPool>) -> Result<impl Responder, ApiError> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT dept_id, dept_name, manager FROM departments",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(departments))
}

/// Add Department
///
/// Both keys must be present; `manager` may be null.
#[utoipa::path(
    post,
    path = "/departments",
    request_body = Object,
    responses(
        (status = 200, description = "Department added", body = Object, example = json!({
            "message": "Department added successfully"
        })),
        (status = 400, description = "Missing field or constraint violation", body = Object, example = json!({
            "error": "missing field 'dept_name'"
        }))
    ),
    tag = "Department"
)]
pub async fn add_department(
    pool: web::Data<MySqlPool>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let obj = as_object(&body)?;
    let dept_name = string_field(obj, "dept_name")?;
    let manager = string_field(obj, "manager")?;

    sqlx::query("INSERT INTO departments (dept_name, manager) VALUES (?, ?)")
        .bind(dept_name)
        .bind(manager)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to add department");
            e
        })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Department added successfully" })))
}

/// Update Department
///
/// Full-record overwrite; silent success when the id does not exist.
#[utoipa::path(
    put,
    path = "/departments/{id}",
    params(("id", Path, description = "Department ID")),
    request_body = Object,
    responses(
        (status = 200, description = "Department updated", body = Object, example = json!({
            "message": "Department updated successfully"
        })),
        (status = 400, description = "Missing field or constraint violation", body = Object)
    ),
    tag = "Department"
)]
pub async fn update_department(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();
    let obj = as_object(&body)?;
    let dept_name = string_field(obj, "dept_name")?;
    let manager = string_field(obj, "manager")?;

    sqlx::query("UPDATE departments SET dept_name=?, manager=? WHERE dept_id=?")
        .bind(dept_name)
        .bind(manager)
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to update department");
            e
        })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Department updated successfully" })))
}

/// Delete Department
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    params(("id", Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department deleted", body = Object, example = json!({
            "message": "Department deleted successfully"
        })),
        (status = 400, description = "Database error", body = Object)
    ),
    tag = "Department"
)]
pub async fn delete_department(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();

    sqlx::query("DELETE FROM departments WHERE dept_id=?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to delete department");
            e
        })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Department deleted successfully" })))
}
