use serde::Serialize;

use crate::entities::time_slots;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub id: i32,
    pub doctor_id: i32,
    pub date: String,
    pub time: String,
    pub is_booked: bool,
}

impl From<time_slots::Model> for TimeSlot {
    fn from(model: time_slots::Model) -> Self {
        Self {
            id: model.id,
            doctor_id: model.doctor_id,
            date: model.date,
            time: model.time,
            is_booked: model.is_booked,
        }
    }
}
