use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::attendance::AttendanceMark;
use crate::utils::body::{as_object, int_field, required_date, required_string};

pub const STATUS_PRESENT: &str = "Present";
pub const STATUS_ABSENT: &str = "Absent";

#[derive(Debug, PartialEq)]
pub struct AttendanceRecord {
    pub employee_id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct AttendeeEntry {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Pranita Shivgan")]
    pub name: String,
}

#[derive(Serialize, Default, ToSchema)]
pub struct DailyAttendance {
    pub present: Vec<AttendeeEntry>,
    pub absent: Vec<AttendeeEntry>,
}

/// Top-level payload must be a JSON array; each record must carry all four
/// keys. `employee_id` accepts an integer or a numeric string. `status` is
/// passed through as-is; the ENUM column rejects anything but
/// Present/Absent.
pub fn parse_records(payload: &Value) -> Result<Vec<AttendanceRecord>, ApiError> {
    let items = payload.as_array().ok_or_else(|| {
        ApiError::Validation("Expected a list of attendance records".to_string())
    })?;

    items
        .iter()
        .map(|item| {
            let obj = as_object(item)?;
            Ok(AttendanceRecord {
                employee_id: int_field(obj, "employee_id")?,
                name: required_string(obj, "name")?,
                date: required_date(obj, "date")?,
                status: required_string(obj, "status")?,
            })
        })
        .collect()
}

pub fn partition_by_status(rows: Vec<AttendanceMark>) -> DailyAttendance {
    let mut out = DailyAttendance::default();
    for row in rows {
        let entry = AttendeeEntry {
            id: row.employee_id,
            name: row.name,
        };
        match row.status.as_str() {
            STATUS_PRESENT => out.present.push(entry),
            STATUS_ABSENT => out.absent.push(entry),
            // unreachable given the ENUM column
            _ => {}
        }
    }
    out
}

/// Submit Attendance
///
/// Upserts each record on (employee_id, date) in input order. The batch
/// runs in one transaction: nothing is committed unless every record
/// applies.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = Object,
    responses(
        (status = 200, description = "Attendance saved", body = Object, example = json!({
            "message": "Attendance saved successfully!"
        })),
        (status = 400, description = "Malformed record or constraint violation", body = Object, example = json!({
            "error": "Expected a list of attendance records"
        }))
    ),
    tag = "Attendance"
)]
pub async fn submit_attendance(
    pool: web::Data<MySqlPool>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let records = parse_records(&body)?;
    debug!(count = records.len(), "Submitting attendance batch");

    let mut tx = pool.get_ref().begin().await?;
    for record in &records {
        sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, name, date, status)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE name = VALUES(name), status = VALUES(status)
            "#,
        )
        .bind(record.employee_id)
        .bind(&record.name)
        .bind(record.date)
        .bind(&record.status)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            // tx rolls back on drop
            error!(error = %e, employee_id = record.employee_id, "Attendance upsert failed");
            e
        })?;
    }
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Attendance saved successfully!" })))
}

/// View Attendance
///
/// Employees with no record for the date appear in neither list.
#[utoipa::path(
    get,
    path = "/attendance/{date}",
    params(("date", Path, description = "ISO date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Present/absent partition for the date", body = DailyAttendance),
        (status = 400, description = "Malformed date or database error", body = Object)
    ),
    tag = "Attendance"
)]
pub async fn view_attendance(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let date = NaiveDate::parse_from_str(&path.into_inner(), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("date must be an ISO date (YYYY-MM-DD)".to_string()))?;

    let rows = sqlx::query_as::<_, AttendanceMark>(
        "SELECT employee_id, name, status FROM attendance WHERE date = ?",
    )
    .bind(date)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(partition_by_status(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mark(employee_id: i32, name: &str, status: &str) -> AttendanceMark {
        AttendanceMark {
            employee_id,
            name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn rejects_non_list_payload() {
        let err = parse_records(&json!({ "employee_id": 1 })).unwrap_err();
        assert_eq!(err.to_string(), "Expected a list of attendance records");
    }

    #[test]
    fn parses_records_in_input_order() {
        let payload = json!([
            { "employee_id": 2, "name": "B", "date": "2025-01-01", "status": "Absent" },
            { "employee_id": 1, "name": "A", "date": "2025-01-01", "status": "Present" }
        ]);
        let records = parse_records(&payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, 2);
        assert_eq!(records[1].employee_id, 1);
    }

    #[test]
    fn coerces_string_employee_id() {
        let payload = json!([
            { "employee_id": "7", "name": "A", "date": "2025-01-01", "status": "Present" }
        ]);
        let records = parse_records(&payload).unwrap();
        assert_eq!(records[0].employee_id, 7);
    }

    #[test]
    fn record_missing_a_key_aborts_the_batch() {
        let payload = json!([
            { "employee_id": 1, "name": "A", "date": "2025-01-01", "status": "Present" },
            { "employee_id": 2, "name": "B", "date": "2025-01-01" }
        ]);
        let err = parse_records(&payload).unwrap_err();
        assert_eq!(err.to_string(), "missing field 'status'");
    }

    #[test]
    fn rejects_malformed_date() {
        let payload = json!([
            { "employee_id": 1, "name": "A", "date": "Jan 1 2025", "status": "Present" }
        ]);
        assert!(parse_records(&payload).is_err());
    }

    #[test]
    fn partition_splits_with_no_overlap() {
        let rows = vec![
            mark(1, "A", "Present"),
            mark(2, "B", "Absent"),
            mark(3, "C", "Present"),
        ];
        let daily = partition_by_status(rows);
        let present: Vec<i32> = daily.present.iter().map(|e| e.id).collect();
        let absent: Vec<i32> = daily.absent.iter().map(|e| e.id).collect();
        assert_eq!(present, vec![1, 3]);
        assert_eq!(absent, vec![2]);
        assert!(present.iter().all(|id| !absent.contains(id)));
    }

    #[test]
    fn partition_of_empty_rows_is_empty() {
        let daily = partition_by_status(Vec::new());
        assert!(daily.present.is_empty());
        assert!(daily.absent.is_empty());
    }
}
