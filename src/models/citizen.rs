use serde::Serialize;

use crate::entities::citizens;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citizen {
    pub id: i32,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
}

impl From<citizens::Model> for Citizen {
    fn from(model: citizens::Model) -> Self {
        Self {
            id: model.id,
            national_id: model.national_id,
            first_name: model.first_name,
            last_name: model.last_name,
            birth_date: model.birth_date,
        }
    }
}
