pub mod prelude;

pub mod appointments;
pub mod citizens;
pub mod doctors;
pub mod time_slots;
