use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};

use crate::error::AppError;
use crate::models::assignment::{Assignment, AssignmentStatus};
use crate::models::assignment_stop::AssignmentStop;
use crate::models::shuttle_activity::{ShuttleActivity, ShuttleState};

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, AppError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|err| AppError::Decode(format!("column {name}: {err}")))
}

pub fn decode_assignment(row: &SqliteRow) -> Result<Assignment, AppError> {
    let status: String = column(row, "status")?;

    Ok(Assignment {
        assignment_id: column(row, "assignmentid")?,
        service_id: column(row, "serviceid")?,
        driver_id: column(row, "driverid")?,
        shuttle_id: column(row, "shuttleid")?,
        route_id: column(row, "routeid")?,
        start_time: column(row, "starttime")?,
        start_date: column(row, "startdate")?,
        route_name: column(row, "routename")?,
        status: status.parse::<AssignmentStatus>().map_err(AppError::Decode)?,
    })
}

pub fn decode_assignment_stop(row: &SqliteRow) -> Result<AssignmentStop, AppError> {
    Ok(AssignmentStop {
        stop_row_id: column(row, "assignment_stop_id")?,
        assignment_id: column(row, "assignmentid")?,
        sequence_index: column(row, "Index")?,
        estimated_arrival: column(row, "estimatedtimeofarrival")?,
        estimated_departure: column(row, "estimatedtimeofdeparture")?,
        actual_arrival: column(row, "timeofarrival")?,
        actual_departure: column(row, "timeofdeparture")?,
        stop_id: column(row, "stopid")?,
        address: column(row, "address")?,
        latitude: column(row, "latitude")?,
        longitude: column(row, "longitude")?,
    })
}

pub fn decode_shuttle_activity(row: &SqliteRow) -> Result<ShuttleActivity, AppError> {
    let status: String = column(row, "status")?;

    Ok(ShuttleActivity {
        shuttle_id: column(row, "shuttleid")?,
        driver_id: column(row, "driverid")?,
        assignment_id: column(row, "assignmentid")?,
        current_stop_id: column(row, "assignment_stop_id")?,
        current_index: column(row, "Index")?,
        latitude: column(row, "latitude")?,
        longitude: column(row, "longitude")?,
        heading: column(row, "heading")?,
        status: status.parse::<ShuttleState>().map_err(AppError::Decode)?,
    })
}
