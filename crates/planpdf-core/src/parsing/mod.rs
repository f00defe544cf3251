pub mod cell;
pub mod distance;
pub mod normalize;
pub mod week_date;
pub mod workout_type;

pub use cell::interpret_cell;
pub use distance::extract_distance;
pub use week_date::{parse_week_date, resolve_week_date};
pub use workout_type::classify_workout_type;
