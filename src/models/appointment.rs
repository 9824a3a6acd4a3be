use serde::Serialize;

use super::{Citizen, Doctor, TimeSlot};
use crate::entities::appointments;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: i32,
    pub citizen_id: i32,
    pub doctor_id: i32,
    pub slot_id: i32,
    pub created_at: String,
}

impl From<appointments::Model> for Appointment {
    fn from(model: appointments::Model) -> Self {
        Self {
            id: model.id,
            citizen_id: model.citizen_id,
            doctor_id: model.doctor_id,
            slot_id: model.slot_id,
            created_at: model.created_at,
        }
    }
}

/// An appointment joined with the rows it references, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub citizen: Citizen,
    pub doctor: Doctor,
    pub slot: TimeSlot,
}
