pub use super::appointments::Entity as Appointments;
pub use super::citizens::Entity as Citizens;
pub use super::doctors::Entity as Doctors;
pub use super::time_slots::Entity as TimeSlots;
