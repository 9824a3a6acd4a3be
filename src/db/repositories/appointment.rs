use anyhow::{Result, anyhow};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, sea_query::Expr,
};
use std::collections::HashMap;
use tracing::info;

use crate::entities::{appointments, citizens, doctors, prelude::*, time_slots};
use crate::models::{Appointment, AppointmentDetails, Citizen, Doctor, TimeSlot};

/// Repository for appointments and the slot state they consume
pub struct AppointmentRepository {
    conn: DatabaseConnection,
}

impl AppointmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Claims `slot_id` for the citizen and records the appointment.
    ///
    /// The slot is claimed with a single conditional update, so of any number
    /// of concurrent attempts on one slot at most one sees an affected row.
    /// Returns `None` when the slot is already booked, does not exist, or
    /// belongs to another doctor; nothing is written in that case.
    pub async fn book(
        &self,
        citizen_id: i32,
        doctor_id: i32,
        slot_id: i32,
        created_at: &str,
    ) -> Result<Option<BookedSlot>> {
        let txn = self.conn.begin().await?;

        let claimed = TimeSlots::update_many()
            .col_expr(time_slots::Column::IsBooked, Expr::value(true))
            .filter(time_slots::Column::Id.eq(slot_id))
            .filter(time_slots::Column::DoctorId.eq(doctor_id))
            .filter(time_slots::Column::IsBooked.eq(false))
            .exec(&txn)
            .await?;

        if claimed.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let appointment = appointments::ActiveModel {
            citizen_id: Set(citizen_id),
            doctor_id: Set(doctor_id),
            slot_id: Set(slot_id),
            created_at: Set(created_at.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let slot = TimeSlots::find_by_id(slot_id)
            .one(&txn)
            .await?
            .ok_or_else(|| anyhow!("Slot {slot_id} disappeared while being booked"))?;

        txn.commit().await?;

        info!(
            appointment_id = appointment.id,
            citizen_id, doctor_id, slot_id, "Booked time slot"
        );

        Ok(Some(BookedSlot {
            appointment: Appointment::from(appointment),
            slot: TimeSlot::from(slot),
        }))
    }

    pub async fn get_for_slot(&self, slot_id: i32) -> Result<Vec<Appointment>> {
        let rows = Appointments::find()
            .filter(appointments::Column::SlotId.eq(slot_id))
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Appointments::find().count(&self.conn).await?)
    }

    /// All appointments with their citizen, doctor and slot, newest first.
    pub async fn list_detailed(&self) -> Result<Vec<AppointmentDetails>> {
        let rows = Appointments::find()
            .order_by_desc(appointments::Column::Id)
            .all(&self.conn)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let citizen_ids: Vec<i32> = rows.iter().map(|a| a.citizen_id).collect();
        let doctor_ids: Vec<i32> = rows.iter().map(|a| a.doctor_id).collect();
        let slot_ids: Vec<i32> = rows.iter().map(|a| a.slot_id).collect();

        let citizens: HashMap<i32, Citizen> = Citizens::find()
            .filter(citizens::Column::Id.is_in(citizen_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|m| (m.id, Citizen::from(m)))
            .collect();

        let doctors: HashMap<i32, Doctor> = Doctors::find()
            .filter(doctors::Column::Id.is_in(doctor_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|m| (m.id, Doctor::from(m)))
            .collect();

        let slots: HashMap<i32, TimeSlot> = TimeSlots::find()
            .filter(time_slots::Column::Id.is_in(slot_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|m| (m.id, TimeSlot::from(m)))
            .collect();

        rows.into_iter()
            .map(|row| {
                let citizen = citizens
                    .get(&row.citizen_id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Appointment {} has no citizen", row.id))?;
                let doctor = doctors
                    .get(&row.doctor_id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Appointment {} has no doctor", row.id))?;
                let slot = slots
                    .get(&row.slot_id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Appointment {} has no slot", row.id))?;

                Ok(AppointmentDetails {
                    appointment: Appointment::from(row),
                    citizen,
                    doctor,
                    slot,
                })
            })
            .collect()
    }
}

/// Result of a successful booking: the new appointment and the consumed slot.
#[derive(Debug, Clone)]
pub struct BookedSlot {
    pub appointment: Appointment,
    pub slot: TimeSlot,
}
