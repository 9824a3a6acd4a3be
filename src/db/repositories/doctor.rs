use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use crate::entities::{doctors, prelude::*};
use crate::models::Doctor;

pub struct DoctorRepository {
    conn: DatabaseConnection,
}

impl DoctorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<Doctor>> {
        let rows = Doctors::find()
            .order_by_asc(doctors::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Doctor>> {
        let doctor = Doctors::find_by_id(id).one(&self.conn).await?;
        Ok(doctor.map(Doctor::from))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Doctors::find().count(&self.conn).await?)
    }
}
