#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Single-connection in-memory database; every connection to
/// `sqlite::memory:` is a separate database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();

    pool
}

pub struct AssignmentRow<'a> {
    pub assignment_id: i32,
    pub driver_id: i32,
    pub shuttle_id: i32,
    pub start_time: &'a str,
    pub start_date: &'a str,
    pub status: &'a str,
    pub archived: bool,
}

impl<'a> AssignmentRow<'a> {
    pub fn scheduled(assignment_id: i32, start_time: &'a str) -> Self {
        Self {
            assignment_id,
            driver_id: 3,
            shuttle_id: 7,
            start_time,
            start_date: "2026-10-16",
            status: "SCHEDULED",
            archived: false,
        }
    }
}

pub async fn insert_route(pool: &SqlitePool, id: i32, name: &str) {
    sqlx::query(r#"INSERT INTO route ("ID", name) VALUES (?, ?)"#)
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_assignment(pool: &SqlitePool, row: AssignmentRow<'_>) {
    sqlx::query(
        r#"
        INSERT INTO assignment (
            assignmentid, serviceid, driverid, shuttleid, routeid,
            starttime, startdate, routename, status, isarchived
        )
        VALUES (?, 1, ?, ?, 11, ?, ?, 'Campus Loop', ?, ?)
        "#,
    )
    .bind(row.assignment_id)
    .bind(row.driver_id)
    .bind(row.shuttle_id)
    .bind(row.start_time)
    .bind(row.start_date)
    .bind(row.status)
    .bind(row.archived)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_stop(pool: &SqlitePool, id: i32, address: &str, lat: f64, lng: f64) {
    sqlx::query(r#"INSERT INTO stop ("ID", address, latitude, longitude) VALUES (?, ?, ?, ?)"#)
        .bind(id)
        .bind(address)
        .bind(lat)
        .bind(lng)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_assignment_stop(
    pool: &SqlitePool,
    row_id: i32,
    assignment_id: i32,
    index: i32,
    stop_id: i32,
) {
    sqlx::query(
        r#"
        INSERT INTO assignment_stop (
            assignment_stop_id, assignmentid, "Index", estimatedtimeofarrival, stopid
        )
        VALUES (?, ?, ?, '2026-10-16 08:45:00', ?)
        "#,
    )
    .bind(row_id)
    .bind(assignment_id)
    .bind(index)
    .bind(stop_id)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_activity(
    pool: &SqlitePool,
    shuttle_id: i32,
    assignment_id: Option<i32>,
    status: &str,
) {
    sqlx::query(
        r#"
        INSERT INTO shuttle_activity (
            shuttleid, driverid, assignmentid, assignment_stop_id, "Index",
            latitude, longitude, heading, status
        )
        VALUES (?, 3, ?, NULL, NULL, 40.4237, -86.9212, 90.0, ?)
        "#,
    )
    .bind(shuttle_id)
    .bind(assignment_id)
    .bind(status)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn assignment_status(pool: &SqlitePool, assignment_id: i32) -> String {
    sqlx::query_scalar("SELECT status FROM assignment WHERE assignmentid = ?")
        .bind(assignment_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
