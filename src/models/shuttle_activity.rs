use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShuttleState {
    Driving,
    Idle,
    AtStop,
}

impl ShuttleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShuttleState::Driving => "DRIVING",
            ShuttleState::Idle => "IDLE",
            ShuttleState::AtStop => "AT_STOP",
        }
    }
}

impl fmt::Display for ShuttleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShuttleState {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "DRIVING" => Ok(ShuttleState::Driving),
            "IDLE" => Ok(ShuttleState::Idle),
            "AT_STOP" => Ok(ShuttleState::AtStop),
            other => Err(format!("unknown shuttle state '{other}'")),
        }
    }
}

/// Live state of a shuttle that is in service. A shuttle without a row is
/// out of service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShuttleActivity {
    pub shuttle_id: i32,
    pub driver_id: i32,
    pub assignment_id: Option<i32>,
    pub current_stop_id: Option<i32>,
    pub current_index: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub heading: f64,
    pub status: ShuttleState,
}
