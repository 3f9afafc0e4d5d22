use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One stop on an assignment's planned route.
///
/// Arrival and departure timestamps stay `None` until the shuttle reaches the
/// stop. `address`, `latitude` and `longitude` come from the joined `stop`
/// row and are `None` when that row is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentStop {
    pub stop_row_id: i32,
    pub assignment_id: i32,
    pub sequence_index: i32,
    pub estimated_arrival: Option<NaiveDateTime>,
    pub estimated_departure: Option<NaiveDateTime>,
    pub actual_arrival: Option<NaiveDateTime>,
    pub actual_departure: Option<NaiveDateTime>,
    pub stop_id: i32,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
