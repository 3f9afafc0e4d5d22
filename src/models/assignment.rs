use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    /// Value stored in the `assignment.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Scheduled => "SCHEDULED",
            AssignmentStatus::InProgress => "IN_PROGRESS",
            AssignmentStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "SCHEDULED" => Ok(AssignmentStatus::Scheduled),
            "IN_PROGRESS" => Ok(AssignmentStatus::InProgress),
            "COMPLETED" => Ok(AssignmentStatus::Completed),
            other => Err(format!("unknown assignment status '{other}'")),
        }
    }
}

/// A scheduled driver/shuttle/route pairing for one service day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub assignment_id: i32,
    pub service_id: i32,
    pub driver_id: i32,
    pub shuttle_id: i32,
    pub route_id: i32,
    pub start_time: NaiveTime,
    pub start_date: NaiveDate,
    pub route_name: String,
    pub status: AssignmentStatus,
}
