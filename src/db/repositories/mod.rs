pub mod appointment;
pub mod citizen;
pub mod doctor;
pub mod seed;
pub mod slot;
