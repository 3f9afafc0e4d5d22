use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::AppError;
use crate::models::assignment::{Assignment, AssignmentStatus};
use crate::models::assignment_stop::AssignmentStop;
use crate::models::shuttle_activity::{ShuttleActivity, ShuttleState};
use crate::repository::decode::{decode_assignment, decode_assignment_stop, decode_shuttle_activity};
use crate::repository::{validate_id, ActiveRepository};

/// `ActiveRepository` backed by an sqlx pool. The pool is owned by the caller
/// and shared; this type never opens connections on its own.
#[derive(Clone)]
pub struct SqlActiveRepository {
    pool: SqlitePool,
}

impl SqlActiveRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActiveRepository for SqlActiveRepository {
    async fn find_assignment(&self, assignment_id: i32) -> Result<Assignment, AppError> {
        validate_id("assignment_id", assignment_id)?;
        debug!(assignment_id, "loading assignment");

        let row = sqlx::query(
            r#"
            SELECT assignment.assignmentid, assignment.serviceid, assignment.driverid,
                   assignment.shuttleid, assignment.routeid, assignment.starttime,
                   assignment.startdate, assignment.routename, assignment.status
            FROM assignment
            WHERE assignment.assignmentid = ? AND assignment.isarchived = false
            "#,
        )
        .bind(assignment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("assignment {assignment_id} not found")))?;

        decode_assignment(&row)
    }

    async fn find_assignment_stops(
        &self,
        assignment_id: i32,
    ) -> Result<Vec<AssignmentStop>, AppError> {
        validate_id("assignment_id", assignment_id)?;
        debug!(assignment_id, "loading assignment stops");

        let rows = sqlx::query(
            r#"
            SELECT assignment_stop.assignment_stop_id, assignment_stop.assignmentid,
                   assignment_stop."Index",
                   assignment_stop.estimatedtimeofarrival, assignment_stop.estimatedtimeofdeparture,
                   assignment_stop.timeofarrival, assignment_stop.timeofdeparture,
                   assignment_stop.stopid,
                   stop.address, stop.latitude, stop.longitude
            FROM assignment_stop
            LEFT OUTER JOIN stop ON (stop."ID" = assignment_stop.stopid)
            WHERE assignment_stop.assignmentid = ?
            ORDER BY assignment_stop."Index", assignment_stop.assignment_stop_id
            "#,
        )
        .bind(assignment_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_assignment_stop).collect()
    }

    async fn find_assignments(
        &self,
        driver_id: i32,
        shuttle_id: i32,
        start_date: NaiveDate,
    ) -> Result<Vec<Assignment>, AppError> {
        validate_id("driver_id", driver_id)?;
        validate_id("shuttle_id", shuttle_id)?;
        debug!(driver_id, shuttle_id, %start_date, "loading scheduled assignments");

        let rows = sqlx::query(
            r#"
            SELECT assignment.assignmentid, assignment.serviceid, assignment.driverid,
                   assignment.shuttleid, assignment.routeid, assignment.starttime,
                   assignment.startdate, assignment.routename, assignment.status
            FROM assignment
            LEFT OUTER JOIN route ON (route."ID" = assignment.routeid)
            WHERE assignment.driverid = ?
              AND assignment.shuttleid = ?
              AND assignment.startdate = ?
              AND assignment.status = ?
              AND assignment.isarchived = false
            ORDER BY assignment.starttime
            "#,
        )
        .bind(driver_id)
        .bind(shuttle_id)
        .bind(start_date)
        .bind(AssignmentStatus::Scheduled.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_assignment).collect()
    }

    async fn find_shuttle_activity(&self, shuttle_id: i32) -> Result<ShuttleActivity, AppError> {
        validate_id("shuttle_id", shuttle_id)?;
        debug!(shuttle_id, "loading shuttle activity");

        let row = sqlx::query(
            r#"
            SELECT shuttleid, driverid, assignmentid, assignment_stop_id, "Index",
                   latitude, longitude, heading, status
            FROM shuttle_activity
            WHERE shuttleid = ?
            "#,
        )
        .bind(shuttle_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("no activity for shuttle {shuttle_id}"))
        })?;

        decode_shuttle_activity(&row)
    }

    async fn begin_route(&self, shuttle_id: i32, assignment_id: i32) -> Result<(), AppError> {
        validate_id("shuttle_id", shuttle_id)?;
        validate_id("assignment_id", assignment_id)?;

        // Dropping `tx` without commit rolls back both updates.
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE assignment SET status = ? WHERE assignmentid = ?")
            .bind(AssignmentStatus::InProgress.as_str())
            .bind(assignment_id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "assignment {assignment_id} not found"
            )));
        }

        let updated = sqlx::query(
            "UPDATE shuttle_activity SET status = ?, assignmentid = ? WHERE shuttleid = ?",
        )
        .bind(ShuttleState::Driving.as_str())
        .bind(assignment_id)
        .bind(shuttle_id)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "no activity for shuttle {shuttle_id}"
            )));
        }

        tx.commit().await?;
        debug!(shuttle_id, assignment_id, "route begun");

        Ok(())
    }

    async fn end_service(&self, shuttle_id: i32) -> Result<(), AppError> {
        validate_id("shuttle_id", shuttle_id)?;

        let deleted = sqlx::query("DELETE FROM shuttle_activity WHERE shuttleid = ?")
            .bind(shuttle_id)
            .execute(&self.pool)
            .await?;
        debug!(shuttle_id, rows = deleted.rows_affected(), "service ended");

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
