use serde::Serialize;

use crate::entities::doctors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: i32,
    pub full_name: String,
    pub specialty: String,
}

impl From<doctors::Model> for Doctor {
    fn from(model: doctors::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            specialty: model.specialty,
        }
    }
}
