pub mod appointment;
pub mod citizen;
pub mod doctor;
pub mod slot;

pub use appointment::{Appointment, AppointmentDetails};
pub use citizen::Citizen;
pub use doctor::Doctor;
pub use slot::TimeSlot;
