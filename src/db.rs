use anyhow::Context;
use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> MySqlPool {
    MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database")
}

/// Idempotent schema bootstrap. Runs once at startup, before the server
/// binds; any failure here is fatal.
pub async fn ensure_tables(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255),
            phone VARCHAR(50),
            position VARCHAR(100),
            salary DECIMAL(12,2),
            join_date DATE
        )
        "#,
    )
    .execute(pool)
    .await
    .context("creating employees table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            dept_id INT AUTO_INCREMENT PRIMARY KEY,
            dept_name VARCHAR(255) NOT NULL,
            manager VARCHAR(255)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("creating departments table")?;

    // One row per employee per day; employee deletion cascades here.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            employee_id INT NOT NULL,
            name VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            status ENUM('Present','Absent') NOT NULL,
            PRIMARY KEY (employee_id, date),
            CONSTRAINT fk_attendance_employee
                FOREIGN KEY (employee_id) REFERENCES employees(id)
                ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await
    .context("creating attendance table")?;

    Ok(())
}
