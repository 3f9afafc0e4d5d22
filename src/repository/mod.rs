//! Persistence for the driver-facing view of the schedule: assignments,
//! their stops, and the live activity row of each shuttle in service.

pub mod decode;
pub mod sql;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::assignment::Assignment;
use crate::models::assignment_stop::AssignmentStop;
use crate::models::shuttle_activity::ShuttleActivity;

pub use sql::SqlActiveRepository;

#[async_trait]
pub trait ActiveRepository: Send + Sync {
    /// Returns the non-archived assignment with this id.
    async fn find_assignment(&self, assignment_id: i32) -> Result<Assignment, AppError>;

    /// Returns the stops of an assignment ordered by their sequence index.
    /// An assignment without stops yields an empty list.
    async fn find_assignment_stops(
        &self,
        assignment_id: i32,
    ) -> Result<Vec<AssignmentStop>, AppError>;

    /// Returns the scheduled, non-archived assignments of a driver and
    /// shuttle on `start_date`, earliest start time first.
    async fn find_assignments(
        &self,
        driver_id: i32,
        shuttle_id: i32,
        start_date: NaiveDate,
    ) -> Result<Vec<Assignment>, AppError>;

    async fn find_shuttle_activity(&self, shuttle_id: i32) -> Result<ShuttleActivity, AppError>;

    /// Marks the assignment in progress and puts the shuttle in `DRIVING`
    /// state on it. Either both changes are applied or neither is.
    async fn begin_route(&self, shuttle_id: i32, assignment_id: i32) -> Result<(), AppError>;

    /// Removes the shuttle's activity row. Succeeds when there is none.
    async fn end_service(&self, shuttle_id: i32) -> Result<(), AppError>;

    /// Round-trips a trivial statement; used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}

pub(crate) fn validate_id(field: &str, value: i32) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::Validation(format!(
            "{field} must be > 0, got {value}"
        )));
    }
    Ok(())
}
