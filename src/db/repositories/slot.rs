use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::entities::{prelude::*, time_slots};
use crate::models::TimeSlot;

pub struct SlotRepository {
    conn: DatabaseConnection,
}

impl SlotRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Unbooked slots of one doctor, earliest first.
    ///
    /// `date` is ISO and `time` is zero-padded 24h, so ordering the strings
    /// orders the slots chronologically.
    pub async fn list_open_for_doctor(&self, doctor_id: i32) -> Result<Vec<TimeSlot>> {
        let rows = TimeSlots::find()
            .filter(time_slots::Column::DoctorId.eq(doctor_id))
            .filter(time_slots::Column::IsBooked.eq(false))
            .order_by_asc(time_slots::Column::Date)
            .order_by_asc(time_slots::Column::Time)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }

    pub async fn list_for_doctor(&self, doctor_id: i32) -> Result<Vec<TimeSlot>> {
        let rows = TimeSlots::find()
            .filter(time_slots::Column::DoctorId.eq(doctor_id))
            .order_by_asc(time_slots::Column::Date)
            .order_by_asc(time_slots::Column::Time)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<TimeSlot>> {
        let slot = TimeSlots::find_by_id(id).one(&self.conn).await?;
        Ok(slot.map(TimeSlot::from))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(TimeSlots::find().count(&self.conn).await?)
    }

    pub async fn count_booked(&self) -> Result<u64> {
        let count = TimeSlots::find()
            .filter(time_slots::Column::IsBooked.eq(true))
            .count(&self.conn)
            .await?;
        Ok(count)
    }
}
