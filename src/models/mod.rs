pub mod assignment;
pub mod assignment_stop;
pub mod shuttle_activity;
