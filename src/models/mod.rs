pub mod from_row;
pub mod workout;

pub use from_row::FromSqliteRow;
pub use workout::{Workout, WorkoutForm};
