use crate::api::attendance::{AttendeeEntry, DailyAttendance};
use crate::api::dashboard::DashboardSummary;
use crate::api::employee::CreateEmployee;
use crate::model::department::Department;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staffdesk API",
        version = "1.0.0",
        description = r#"
## Employee & Attendance Backend

CRUD backend for employee records, department records, and daily attendance.

### 🔹 Key Features
- **Employee Management**
  - Create, update, list, and delete employee records
- **Department Management**
  - Create, update, list, and delete departments
- **Attendance Management**
  - Batch upsert of daily Present/Absent records, view by date
- **Dashboard**
  - Headcounts and average salary

### 📦 Response Format
- JSON-based RESTful responses
- Failures return HTTP 400 with `{"error": "<message>"}`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::add_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::department::list_departments,
        crate::api::department::add_department,
        crate::api::department::update_department,
        crate::api::department::delete_department,

        crate::api::attendance::submit_attendance,
        crate::api::attendance::view_attendance,

        crate::api::dashboard::summary,
    ),
    components(
        schemas(
            CreateEmployee,
            Employee,
            Department,
            AttendeeEntry,
            DailyAttendance,
            DashboardSummary
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Department", description = "Department management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Aggregate metrics APIs"),
    )
)]
pub struct ApiDoc;
